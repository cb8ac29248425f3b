use std::time::Duration;

use crate::route::GUMROAD_API_BASE;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    pub(crate) api_base: String,
    pub(crate) timeout: Duration,
    pub(crate) disputed_purchase_invalidates_license: bool,
}

impl ValidatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_base: GUMROAD_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            disputed_purchase_invalidates_license: false,
        }
    }

    /// Overrides the scheme and host requests are sent to.
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Deadline for the whole request, including reading the body.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Treat purchases with an open dispute or a chargeback as invalid.
    #[must_use]
    pub fn disputed_purchase_invalidates_license(mut self, value: bool) -> Self {
        self.disputed_purchase_invalidates_license = value;
        self
    }

    #[must_use]
    pub fn get_api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn get_disputed_purchase_invalidates_license(&self) -> bool {
        self.disputed_purchase_invalidates_license
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
