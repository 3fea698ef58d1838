//! User record data model.
//!
//! Records are produced by the external demographic-data source and are only
//! read by the domain. Field names follow the source's JSON vocabulary so the
//! records serialise to clients unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender reported by the data source.
///
/// Serialises as lowercase `male` / `female`. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// `male`
    Male,
    /// `female`
    Female,
}

impl Gender {
    /// Wire representation of the gender.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`Gender`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(UnknownGender(other.to_owned())),
        }
    }
}

/// Personal name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FullName {
    /// Honorific such as `Mr` or `Mrs`.
    pub title: String,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

impl FullName {
    /// Given and family name joined by a single space.
    ///
    /// # Examples
    /// ```
    /// use address_book::domain::FullName;
    ///
    /// let name = FullName {
    ///     title: "Mr".into(),
    ///     first: "Ramon".into(),
    ///     last: "Thompson".into(),
    /// };
    /// assert_eq!(name.display(), "Ramon Thompson");
    /// ```
    pub fn display(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Street part of a postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Street {
    /// House number.
    pub number: i64,
    /// Street name.
    pub name: String,
}

/// Postal location of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Street address.
    pub street: Street,
    /// City name.
    pub city: String,
    /// State, province or region.
    pub state: String,
    /// Country name.
    pub country: String,
    /// Postal code. Always textual, even when the source sends a number.
    pub postcode: String,
}

/// Portrait URLs in three resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Picture {
    /// Large portrait URL.
    pub large: String,
    /// Medium portrait URL.
    pub medium: String,
    /// Thumbnail portrait URL.
    pub thumbnail: String,
}

/// One user as returned by the demographic-data source.
///
/// Serialised example:
/// `{"gender":"male","name":{"title":"Mr","first":"Ramon","last":"Thompson"},...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Reported gender.
    pub gender: Gender,
    /// Personal name.
    pub name: FullName,
    /// Postal location.
    pub location: Location,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Portrait URLs, when the source supplies them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<Picture>,
    /// Nationality code, e.g. `BG`.
    pub nat: String,
}
