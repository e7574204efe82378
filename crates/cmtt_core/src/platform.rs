//! The closed set of platform deployments.

use cmtt_error::ConfigError;
use serde::{Deserialize, Serialize};

/// One of the three deployments sharing the API protocol.
///
/// The display form is the name used in configuration; `domain()` is the
/// host suffix used to build the base URL.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// TJournal
    #[display("tjournal")]
    Tjournal,
    /// DTF
    #[display("dtf")]
    Dtf,
    /// vc.ru
    #[display("vc")]
    Vc,
}

impl Platform {
    /// Registrable domain of the deployment.
    pub fn domain(&self) -> &'static str {
        match self {
            Platform::Tjournal => "tjournal.ru",
            Platform::Dtf => "dtf.ru",
            Platform::Vc => "vc.ru",
        }
    }

    /// Base URL for an API version, without a trailing slash.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmtt_core::Platform;
    ///
    /// assert_eq!(Platform::Dtf.base_url("1.6"), "https://api.dtf.ru/v1.6");
    /// ```
    pub fn base_url(&self, version: &str) -> String {
        format!("https://api.{}/v{}", self.domain(), version)
    }
}

impl std::str::FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tjournal" | "tj" | "tjournal.ru" => Ok(Platform::Tjournal),
            "dtf" | "dtf.ru" => Ok(Platform::Dtf),
            "vc" | "vc.ru" => Ok(Platform::Vc),
            _ => Err(ConfigError::new(format!("Unknown platform: {}", s))),
        }
    }
}
