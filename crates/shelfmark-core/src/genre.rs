use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A book genre from the fixed catalogue offered by the creation form.
///
/// Genres travel over the wire by their Korean display label, which is
/// what the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "소설")]
    Novel,
    #[serde(rename = "에세이")]
    Essay,
    #[serde(rename = "추리")]
    Mystery,
    #[serde(rename = "판타지")]
    Fantasy,
    #[serde(rename = "로맨스")]
    Romance,
    #[serde(rename = "인문")]
    Humanities,
    #[serde(rename = "자기계발")]
    SelfHelp,
    #[serde(rename = "경제/경영")]
    Business,
    #[serde(rename = "과학/기술")]
    Science,
    #[serde(rename = "역사/문화")]
    History,
}

impl Genre {
    /// All genres, in the order the form lists them.
    pub const ALL: [Self; 10] = [
        Self::Novel,
        Self::Essay,
        Self::Mystery,
        Self::Fantasy,
        Self::Romance,
        Self::Humanities,
        Self::SelfHelp,
        Self::Business,
        Self::Science,
        Self::History,
    ];

    /// Display label, also the wire value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Novel => "소설",
            Self::Essay => "에세이",
            Self::Mystery => "추리",
            Self::Fantasy => "판타지",
            Self::Romance => "로맨스",
            Self::Humanities => "인문",
            Self::SelfHelp => "자기계발",
            Self::Business => "경제/경영",
            Self::Science => "과학/기술",
            Self::History => "역사/문화",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.label() == s)
            .ok_or_else(|| Error::UnknownGenre(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_ten_genres() {
        assert_eq!(Genre::ALL.len(), 10);
        assert_eq!(Genre::ALL[0], Genre::Novel);
        assert_eq!(Genre::ALL[9], Genre::History);
    }

    #[test]
    fn test_genre_from_label() {
        assert_eq!("경제/경영".parse::<Genre>().unwrap(), Genre::Business);
        assert!("Jazz".parse::<Genre>().is_err());
        assert!("".parse::<Genre>().is_err());
    }

    #[test]
    fn test_genre_serializes_as_label() {
        let json = serde_json::to_string(&Genre::Science).unwrap();
        assert_eq!(json, "\"과학/기술\"");
        let back: Genre = serde_json::from_str("\"추리\"").unwrap();
        assert_eq!(back, Genre::Mystery);
    }
}
