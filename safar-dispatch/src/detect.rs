use crate::links;
use safar_core::platform::Platform;
use std::time::Duration;
use tracing::debug;

/// How long the scheme probe may wait for the app to answer before the
/// device is treated as not having it.
pub const APP_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Whether the companion app is installed on this device.
///
/// Off mobile the probe is skipped entirely. On mobile the hidden-scheme
/// probe races a one second timer; whichever fires first wins and the
/// loser is dropped. A timeout means "not installed", never an error.
pub async fn app_installed(platform: &dyn Platform) -> bool {
    if !platform.is_mobile() {
        return false;
    }

    match tokio::time::timeout(APP_PROBE_TIMEOUT, platform.probe_native_app(links::APP_PROBE_URL))
        .await
    {
        Ok(handled) => handled,
        Err(_) => {
            debug!("app probe timed out, treating the app as not installed");
            false
        }
    }
}
