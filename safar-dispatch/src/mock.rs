use async_trait::async_trait;
use safar_core::platform::{OpenOutcome, Platform};
use std::sync::Mutex;
use std::time::Duration;

/// How the mock answers the hidden-scheme probe.
#[derive(Debug, Clone, Copy)]
pub enum ProbeBehavior {
    /// Resolve with the given answer after `delay`.
    Respond { installed: bool, delay: Duration },
    /// Never resolve, like a scheme nothing on the device handles.
    Silent,
}

/// Everything the platform was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Probe(String),
    OpenExternal(String),
    RedirectCurrent(String),
}

/// Deterministic Platform for tests and the demo binary: device class,
/// probe behavior, popup blocking and navigation failures are all
/// scripted, and every call is recorded for inspection.
pub struct MockPlatform {
    mobile: bool,
    probe: ProbeBehavior,
    block_popups: bool,
    broken_navigation: bool,
    calls: Mutex<Vec<PlatformCall>>,
}

impl MockPlatform {
    pub fn desktop() -> Self {
        Self::with(false, ProbeBehavior::Silent)
    }

    pub fn mobile_with_app() -> Self {
        Self::with(
            true,
            ProbeBehavior::Respond {
                installed: true,
                delay: Duration::from_millis(50),
            },
        )
    }

    pub fn mobile_without_app() -> Self {
        Self::with(true, ProbeBehavior::Silent)
    }

    fn with(mobile: bool, probe: ProbeBehavior) -> Self {
        Self {
            mobile,
            probe,
            block_popups: false,
            broken_navigation: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every open_external call come back without a usable handle.
    pub fn with_blocked_popups(mut self) -> Self {
        self.block_popups = true;
        self
    }

    /// Make every open and redirect call fail outright.
    pub fn with_broken_navigation(mut self) -> Self {
        self.broken_navigation = true;
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Platform for MockPlatform {
    fn is_mobile(&self) -> bool {
        self.mobile
    }

    async fn probe_native_app(&self, scheme_url: &str) -> bool {
        self.record(PlatformCall::Probe(scheme_url.to_string()));
        match self.probe {
            ProbeBehavior::Respond { installed, delay } => {
                tokio::time::sleep(delay).await;
                installed
            }
            ProbeBehavior::Silent => std::future::pending().await,
        }
    }

    fn open_external(
        &self,
        url: &str,
    ) -> Result<OpenOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.record(PlatformCall::OpenExternal(url.to_string()));
        if self.broken_navigation {
            return Err("window.open is not available".into());
        }
        Ok(if self.block_popups {
            OpenOutcome::Blocked
        } else {
            OpenOutcome::Opened
        })
    }

    fn redirect_current(
        &self,
        url: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(PlatformCall::RedirectCurrent(url.to_string()));
        if self.broken_navigation {
            return Err("navigation refused".into());
        }
        Ok(())
    }
}
