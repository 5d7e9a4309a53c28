//! Hub configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! page_size = 9
//! payment_delay_ms = 500
//!
//! [user]
//! name = "Abeba Tesfaye"
//! avatar = "https://api.dicebear.com/7.x/avataaars/svg?seed=Abeba"
//! ```

use crate::error::HubError;
use recipe_catalog::DEFAULT_PAGE_SIZE;
use recipe_model::UserProfile;
use recipe_payment::DEFAULT_DELAY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Price charged for a premium recipe that has none set
pub const DEFAULT_PREMIUM_PRICE: f64 = 299.99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Cards per grid page
    pub page_size: usize,
    /// Simulated checkout delay
    pub payment_delay_ms: u64,
    pub currency: String,
    pub default_price: f64,
    /// Display user after login
    pub user: UserProfile,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            payment_delay_ms: u64::try_from(DEFAULT_DELAY.as_millis()).unwrap_or(2_000),
            currency: "ETB".into(),
            default_price: DEFAULT_PREMIUM_PRICE,
            user: UserProfile::default(),
        }
    }
}

impl HubConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_payment_delay(mut self, delay: Duration) -> Self {
        self.payment_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_default_price(mut self, price: f64) -> Self {
        self.default_price = price;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = user;
        self
    }

    #[inline]
    #[must_use]
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// # Errors
    /// - `Config` for a zero page size, an empty currency or a non-positive price
    pub fn validate(&self) -> Result<(), HubError> {
        if self.page_size == 0 {
            return Err(HubError::Config("page_size must be at least 1".into()));
        }
        if self.currency.trim().is_empty() {
            return Err(HubError::Config("currency must not be empty".into()));
        }
        if !(self.default_price.is_finite() && self.default_price > 0.0) {
            return Err(HubError::Config(format!(
                "default_price must be positive, got {}",
                self.default_price
            )));
        }
        Ok(())
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// - `Toml` for malformed input, `Config` for invalid values
    pub fn from_toml_str(raw: &str) -> Result<Self, HubError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// - `Io` when the file cannot be read, otherwise as [`HubConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HubError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| HubError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded hub config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = HubConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.payment_delay(), Duration::from_secs(2));
        assert_eq!(config.currency, "ETB");
        assert_eq!(config.user.name, "John Doe");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = HubConfig::from_toml_str(
            r#"
            page_size = 9

            [user]
            name = "Abeba Tesfaye"
            avatar = "abeba.svg"
            "#,
        )
        .unwrap();

        assert_eq!(config.page_size, 9);
        assert_eq!(config.user.initials(), "AT");
        assert_eq!(config.default_price, DEFAULT_PREMIUM_PRICE);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            HubConfig::from_toml_str("page_size = 0"),
            Err(HubError::Config(_))
        ));
        assert!(matches!(
            HubConfig::from_toml_str("page_size = \"six\""),
            Err(HubError::Toml(_))
        ));
        assert!(HubConfig::new().with_default_price(-1.0).validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "payment_delay_ms = 250\ncurrency = \"USD\"").unwrap();

        let config = HubConfig::load(file.path()).unwrap();
        assert_eq!(config.payment_delay(), Duration::from_millis(250));
        assert_eq!(config.currency, "USD");

        let missing = HubConfig::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(HubError::Io { .. })));
    }
}
