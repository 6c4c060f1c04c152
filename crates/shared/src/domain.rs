use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Server-assigned record identifier.
///
/// json-server hands out numeric ids in older releases and short strings in
/// newer ones, so both JSON shapes are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GameId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for GameId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for GameId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGameId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawGameId::deserialize(deserializer)? {
            RawGameId::Int(v) => Self(v.to_string()),
            RawGameId::Float(v) => Self(v.to_string()),
            RawGameId::Text(v) => Self(v),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<i32>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Hand-edited collections hold years as numbers or numeric strings; anything
/// unusable reads as "no year" instead of failing the whole list.
fn lenient_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let year = match RawYear::deserialize(deserializer)? {
        RawYear::Int(v) => i32::try_from(v).ok(),
        RawYear::Float(v) if v.is_finite() => Some(v.trunc() as i32),
        RawYear::Float(_) | RawYear::Other(_) => None,
        RawYear::Text(v) => {
            let v = v.trim();
            v.parse::<i32>()
                .ok()
                .or_else(|| v.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i32))
        }
    };
    Ok(year)
}

impl GameRecord {
    /// Image URL, treating an empty string the same as a missing one.
    pub fn image_url(&self) -> Option<&str> {
        self.img
            .as_deref()
            .map(str::trim)
            .filter(|img| !img.is_empty())
    }
}

/// Body of a create request. Carries no id: the server assigns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub img: String,
    pub description: String,
}

impl NewGame {
    pub fn new(
        title: impl Into<String>,
        img: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            img: img.into(),
            description: description.into(),
        }
    }

    /// Trims every field and rejects a blank title.
    pub fn validate(&self) -> Result<NewGame, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(NewGame {
            title: title.to_string(),
            img: self.img.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Title,
    ReleaseYear,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::ReleaseYear => "releaseYear",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "title" => Ok(SortKey::Title),
            "releaseyear" => Ok(SortKey::ReleaseYear),
            _ => Err(ValidationError::UnknownSortKey(s.to_string())),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
