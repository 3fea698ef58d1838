//! DTOs for decoding randomuser-style JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps them into
//! domain [`UserRecord`]s in one pass. Fields the domain does not read
//! (login, dob, coordinates, ...) are ignored.

use serde::Deserialize;

use crate::domain::{FullName, Gender, Location, Picture, Street, UserRecord};

#[derive(Debug, Default, Deserialize)]
pub(super) struct RandomUserResponseDto {
    #[serde(default)]
    pub(super) results: Vec<RandomUserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserDto {
    pub(super) gender: String,
    #[serde(default)]
    pub(super) name: NameDto,
    #[serde(default)]
    pub(super) location: LocationDto,
    #[serde(default)]
    pub(super) email: String,
    #[serde(default)]
    pub(super) phone: String,
    pub(super) picture: Option<PictureDto>,
    #[serde(default)]
    pub(super) nat: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct NameDto {
    #[serde(default)]
    pub(super) title: String,
    #[serde(default)]
    pub(super) first: String,
    #[serde(default)]
    pub(super) last: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct LocationDto {
    #[serde(default)]
    pub(super) street: StreetDto,
    #[serde(default)]
    pub(super) city: String,
    #[serde(default)]
    pub(super) state: String,
    #[serde(default)]
    pub(super) country: String,
    pub(super) postcode: Option<PostcodeDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct StreetDto {
    #[serde(default)]
    pub(super) number: i64,
    #[serde(default)]
    pub(super) name: String,
}

/// The source sends numeric postcodes for some nationalities.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum PostcodeDto {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
pub(super) struct PictureDto {
    pub(super) large: String,
    pub(super) medium: String,
    pub(super) thumbnail: String,
}

impl RandomUserResponseDto {
    pub(super) fn into_domain_users(self) -> Result<Vec<UserRecord>, String> {
        self.results
            .into_iter()
            .enumerate()
            .map(|(index, dto)| dto.into_domain_user(index))
            .collect()
    }
}

impl RandomUserDto {
    fn into_domain_user(self, index: usize) -> Result<UserRecord, String> {
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|err| format!("result {index}: {err}"))?;

        Ok(UserRecord {
            gender,
            name: FullName {
                title: self.name.title,
                first: self.name.first,
                last: self.name.last,
            },
            location: self.location.into(),
            email: self.email,
            phone: self.phone,
            picture: self.picture.map(Picture::from),
            nat: self.nat,
        })
    }
}

impl From<LocationDto> for Location {
    fn from(value: LocationDto) -> Self {
        Self {
            street: Street {
                number: value.street.number,
                name: value.street.name,
            },
            city: value.city,
            state: value.state,
            country: value.country,
            postcode: match value.postcode {
                Some(PostcodeDto::Text(text)) => text,
                Some(PostcodeDto::Number(number)) => number.to_string(),
                None => String::new(),
            },
        }
    }
}

impl From<PictureDto> for Picture {
    fn from(value: PictureDto) -> Self {
        Self {
            large: value.large,
            medium: value.medium,
            thumbnail: value.thumbnail,
        }
    }
}
