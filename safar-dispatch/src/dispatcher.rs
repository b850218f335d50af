use crate::{detect, links};
use safar_core::platform::{OpenOutcome, Platform};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// The resolved destination for one handoff: operator phone plus the
/// formatted message. Derived per dispatch, never persisted.
#[derive(Debug, Clone)]
pub struct DispatchTarget {
    pub phone: String,
    pub message: String,
}

/// Which delivery mechanism handled a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStrategy {
    /// Deep link into the installed mobile app.
    NativeApp,
    /// api.whatsapp.com opened in a new context (mobile, app absent).
    MobileWeb,
    /// web.whatsapp.com opened in a new context, or the current one when
    /// the popup is blocked.
    DesktopWeb,
}

/// Picks a delivery strategy from the runtime environment and performs
/// the handoff.
pub struct ChannelDispatcher {
    platform: Arc<dyn Platform>,
}

impl ChannelDispatcher {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }

    /// Hand the message off to WhatsApp. `true` means a handoff
    /// mechanism was invoked without throwing; there is no delivery
    /// acknowledgment coming back. On any unexpected error one
    /// last-ditch open of the mobile API URL is attempted and the
    /// dispatch reports `false`, signalling that the user may need to
    /// send manually.
    pub async fn send(&self, target: &DispatchTarget) -> bool {
        let attempt = Uuid::new_v4();
        match self.try_send(target).await {
            Ok(strategy) => {
                info!("dispatch {} handed off via {:?}", attempt, strategy);
                true
            }
            Err(err) => {
                error!("dispatch {} failed: {}", attempt, err);
                let fallback = links::mobile_api_url(&target.phone, &target.message);
                if let Err(fallback_err) = self.platform.open_external(&fallback) {
                    warn!("dispatch {} fallback open failed: {}", attempt, fallback_err);
                }
                false
            }
        }
    }

    async fn try_send(
        &self,
        target: &DispatchTarget,
    ) -> Result<DeliveryStrategy, Box<dyn std::error::Error + Send + Sync>> {
        if self.platform.is_mobile() {
            if detect::app_installed(self.platform.as_ref()).await {
                let url = links::native_app_url(&target.phone, &target.message);
                self.platform.redirect_current(&url)?;
                return Ok(DeliveryStrategy::NativeApp);
            }

            // A blocked popup is still a success here: the open request
            // was issued and the API page handles the rest.
            let url = links::mobile_api_url(&target.phone, &target.message);
            self.platform.open_external(&url)?;
            return Ok(DeliveryStrategy::MobileWeb);
        }

        let url = links::desktop_web_url(&target.phone, &target.message);
        match self.platform.open_external(&url)? {
            OpenOutcome::Opened => {}
            OpenOutcome::Blocked => self.platform.redirect_current(&url)?,
        }
        Ok(DeliveryStrategy::DesktopWeb)
    }
}
