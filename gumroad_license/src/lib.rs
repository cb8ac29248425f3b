#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod config;
mod error;
pub mod request;
mod route;
pub mod transport;

use hyper::Method;

use request::{Request, VerifyRequest};
use route::Route;

pub use config::{ValidatorConfig, DEFAULT_TIMEOUT};
pub use error::{DeserializeBodyError, ErrorKind, GumroadError, Rejection};
pub use gumroad_models::{ProductId, Purchase, VerificationResponse};
pub use transport::{HttpsTransport, Response, Transport};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidationOptions {
    /// Whether Gumroad should count this check against the key's uses.
    /// Background re-checks usually turn this off.
    pub increment_uses_count: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            increment_uses_count: true,
        }
    }
}

/// Checks license keys for a single Gumroad product.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent checks.
#[derive(Clone)]
pub struct LicenseValidator<T = HttpsTransport> {
    product_id: ProductId,
    config: ValidatorConfig,
    transport: T,
}

impl LicenseValidator<HttpsTransport> {
    pub fn new(product_id: &str) -> Result<Self, GumroadError> {
        Self::with_config(product_id, ValidatorConfig::default())
    }

    pub fn with_config(product_id: &str, config: ValidatorConfig) -> Result<Self, GumroadError> {
        Self::with_transport(product_id, config, HttpsTransport::new())
    }
}

impl<T: Transport> LicenseValidator<T> {
    pub fn with_transport(
        product_id: &str,
        config: ValidatorConfig,
        transport: T,
    ) -> Result<Self, GumroadError> {
        let product_id = ProductId::new(product_id)
            .map_err(|source| GumroadError::with_source(ErrorKind::EmptyProductId, source))?;
        Ok(Self {
            product_id,
            config,
            transport,
        })
    }

    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Same as [`is_license_valid_with`](Self::is_license_valid_with) with the
    /// uses count incremented.
    pub async fn is_license_valid(&self, license_key: &str) -> bool {
        self.is_license_valid_with(license_key, ValidationOptions::default())
            .await
    }

    /// Returns `true` only when Gumroad confirms the key belongs to this
    /// product and the purchase was not refunded.
    ///
    /// Every failure, whether in transport, decoding or the checks on the
    /// purchase, comes back as `false`. The reason is logged at `warn` or
    /// `debug` and never surfaced to the caller.
    pub async fn is_license_valid_with(&self, license_key: &str, options: ValidationOptions) -> bool {
        if license_key.is_empty() {
            tracing::debug!(product_id = %self.product_id, "empty license key");
            return false;
        }

        let response = match self.verify(license_key, options).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(product_id = %self.product_id, err = %err, "license verification failed");
                return false;
            }
        };

        match self.check(&response, license_key) {
            Ok(()) => {
                tracing::debug!(product_id = %self.product_id, uses = ?response.uses, "license key accepted");
                true
            }
            Err(rejection) => {
                tracing::debug!(product_id = %self.product_id, reason = %rejection, "license key rejected");
                false
            }
        }
    }

    async fn verify(
        &self,
        license_key: &str,
        options: ValidationOptions,
    ) -> Result<VerificationResponse, GumroadError> {
        let route = Route::VerifyLicense {
            base: &self.config.api_base,
        };

        let form = VerifyRequest {
            product_id: self.product_id.as_str(),
            license_key,
            increment_uses_count: options.increment_uses_count,
        }
        .to_form()
        .map_err(|source| GumroadError::with_source(ErrorKind::BuildingRequest, source))?;

        let request = Request::new()
            .uri(route.to_string())
            .method(Method::POST)
            .form(form)
            .build()
            .map_err(|source| GumroadError::with_source(ErrorKind::BuildingRequest, source))?;

        let res = tokio::time::timeout(self.config.timeout, self.transport.send(request))
            .await
            .map_err(|source| GumroadError::with_source(ErrorKind::Timeout, source))??;

        if !res.status.is_success() {
            return Err(GumroadError::new(ErrorKind::Response {
                status: res.status,
                bytes: res.bytes.to_vec(),
            }));
        }

        serde_json::from_slice::<VerificationResponse>(&res.bytes).map_err(|source| {
            GumroadError::with_source(
                ErrorKind::Deserialize,
                DeserializeBodyError {
                    source: Some(Box::new(source)),
                    bytes: res.bytes.to_vec(),
                },
            )
        })
    }

    fn check(&self, response: &VerificationResponse, license_key: &str) -> Result<(), Rejection> {
        if !response.success {
            return Err(Rejection::Unsuccessful);
        }

        let purchase = response
            .purchase
            .as_ref()
            .ok_or(Rejection::MissingPurchase)?;

        // The echoed key must be the one we asked about, not merely any valid key.
        if purchase.license_key.as_deref() != Some(license_key) {
            return Err(Rejection::KeyMismatch);
        }

        match purchase.refunded {
            None => return Err(Rejection::MissingRefundStatus),
            Some(true) => return Err(Rejection::Refunded),
            Some(false) => {}
        }

        if self.config.disputed_purchase_invalidates_license && purchase.is_disputed() {
            return Err(Rejection::Disputed);
        }

        Ok(())
    }
}
