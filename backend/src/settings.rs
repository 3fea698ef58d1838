//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ADDRESS_BOOK_*` environment variables and
//! optional config files. `results` and `timeout_secs` carry derive-level
//! defaults so an empty environment still loads; the string fields are
//! optional and their accessors fall back to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::ports::UserBatchRequest;

/// Default data source endpoint.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";
/// Default generator seed. A fixed seed keeps listings stable.
pub const DEFAULT_SEED: &str = "addressbook";
/// Default number of users fetched per request.
pub const DEFAULT_RESULTS: u32 = 100;
/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The data source URL does not parse.
    #[error("invalid base_url {value:?}: {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// The listen address does not parse.
    #[error("invalid bind_addr {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the address book service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADDRESS_BOOK")]
pub struct AppSettings {
    /// Data source endpoint; `seed` and `results` are appended as query pairs.
    pub base_url: Option<String>,
    /// Generator seed sent with every fetch.
    pub seed: Option<String>,
    /// Users fetched per request.
    #[ortho_config(default = 100)]
    pub results: u32,
    /// Outbound request timeout in seconds.
    #[ortho_config(default = 10)]
    pub timeout_secs: u64,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
}

impl AppSettings {
    /// Parsed data source endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BaseUrl`] when the value is not a URL.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let value = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::BaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Generator seed.
    pub fn seed(&self) -> &str {
        self.seed.as_deref().unwrap_or(DEFAULT_SEED)
    }

    /// Users fetched per request.
    pub fn results(&self) -> u32 {
        self.results
    }

    /// Outbound request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Batch requested from the data source on every listing.
    pub fn user_batch(&self) -> UserBatchRequest {
        UserBatchRequest {
            seed: self.seed().to_owned(),
            results: self.results(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings loading and defaults.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "ADDRESS_BOOK_BASE_URL",
        "ADDRESS_BOOK_SEED",
        "ADDRESS_BOOK_RESULTS",
        "ADDRESS_BOOK_TIMEOUT_SECS",
        "ADDRESS_BOOK_BIND_ADDR",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("address-book")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.base_url().expect("default url").as_str(),
            DEFAULT_BASE_URL
        );
        assert_eq!(settings.seed(), DEFAULT_SEED);
        assert_eq!(settings.results(), DEFAULT_RESULTS);
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(
            settings.bind_addr().expect("default addr"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("addr")
        );
        assert_eq!(
            settings.user_batch(),
            UserBatchRequest {
                seed: DEFAULT_SEED.to_owned(),
                results: DEFAULT_RESULTS,
            }
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ADDRESS_BOOK_BASE_URL", Some("http://127.0.0.1:9000/api/".to_owned())),
            ("ADDRESS_BOOK_SEED", Some("fixed".to_owned())),
            ("ADDRESS_BOOK_RESULTS", Some("25".to_owned())),
            ("ADDRESS_BOOK_TIMEOUT_SECS", Some("3".to_owned())),
            ("ADDRESS_BOOK_BIND_ADDR", Some("127.0.0.1:3000".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.base_url().expect("url").as_str(),
            "http://127.0.0.1:9000/api/"
        );
        assert_eq!(
            settings.user_batch(),
            UserBatchRequest {
                seed: "fixed".to_owned(),
                results: 25,
            }
        );
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        assert_eq!(settings.bind_addr().expect("addr").port(), 3000);
    }

    fn with_overrides(base_url: Option<&str>, bind_addr: Option<&str>) -> AppSettings {
        AppSettings {
            base_url: base_url.map(str::to_owned),
            seed: None,
            results: DEFAULT_RESULTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bind_addr: bind_addr.map(str::to_owned),
        }
    }

    #[rstest]
    fn unparsable_base_url_is_reported() {
        let err = with_overrides(Some("not a url"), None)
            .base_url()
            .expect_err("invalid url");
        assert!(matches!(err, SettingsError::BaseUrl { .. }));
    }

    #[rstest]
    #[case("localhost")]
    #[case("127.0.0.1")]
    #[case("0.0.0.0:http")]
    fn unparsable_bind_addr_is_reported(#[case] raw: &str) {
        let err = with_overrides(None, Some(raw))
            .bind_addr()
            .expect_err("invalid addr");
        assert!(err.to_string().contains(raw));
    }
}
