use async_trait::async_trait;

/// Result of asking the environment to open a URL in a new browsing
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new context opened and a usable handle came back.
    Opened,
    /// The open request was issued but no handle came back, typically a
    /// blocked popup.
    Blocked,
}

/// Capability interface over the runtime environment the dispatcher runs
/// in: device class, app detection and outbound navigation.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Whether the current device is a mobile device.
    fn is_mobile(&self) -> bool;

    /// Load `scheme_url` in a hidden context to see whether an installed
    /// application handles the scheme. Resolves `true` once a handler
    /// picks it up and may never resolve otherwise; callers bound the
    /// wait.
    async fn probe_native_app(&self, scheme_url: &str) -> bool;

    /// Open a URL in a new browsing context.
    fn open_external(
        &self,
        url: &str,
    ) -> Result<OpenOutcome, Box<dyn std::error::Error + Send + Sync>>;

    /// Point the current browsing context at a URL.
    fn redirect_current(
        &self,
        url: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
