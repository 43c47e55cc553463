use serde::de::Error;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{ConfigError, Face};

/// The ordered, non-empty pattern of faces a player is racing to flip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Face>);

impl Sequence {
    pub fn new(faces: Vec<Face>) -> Result<Self, ConfigError> {
        if faces.is_empty() {
            return Err(ConfigError::EmptySequence);
        }

        Ok(Self(faces))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn faces(&self) -> &[Face] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.0.iter()
    }
}

/// Parses a comma-delimited list such as `heads,tails,heads`.
impl FromStr for Sequence {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ConfigError::EmptySequence);
        }

        let faces = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Face>, _>>()?;

        Self::new(faces)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (i, face) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", face)?;
        }

        Ok(())
    }
}

impl Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Face::*;

    #[test]
    fn test_parse_comma_delimited() {
        let sequence: Sequence = "heads,tails,heads".parse().unwrap();

        assert_eq!(sequence.faces(), &[Heads, Tails, Heads]);
        assert_eq!(sequence.len(), 3);
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let sequence: Sequence = "Heads, TAILS ,tails".parse().unwrap();

        assert_eq!(sequence.faces(), &[Heads, Tails, Tails]);
    }

    #[test]
    fn test_parse_empty_is_an_error() {
        assert_eq!("".parse::<Sequence>(), Err(ConfigError::EmptySequence));
        assert_eq!("  ".parse::<Sequence>(), Err(ConfigError::EmptySequence));
    }

    #[test]
    fn test_parse_invalid_token_is_an_error() {
        assert_eq!(
            "heads,edge".parse::<Sequence>(),
            Err(ConfigError::InvalidFace("edge".to_string()))
        );
        assert!("heads,,tails".parse::<Sequence>().is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Sequence::new(vec![]), Err(ConfigError::EmptySequence));
    }

    #[test]
    fn test_display_matches_cli_format() {
        let sequence = Sequence::new(vec![Heads, Tails, Tails]).unwrap();

        assert_eq!(sequence.to_string(), "heads,tails,tails");
    }

    #[test]
    fn test_serde_as_string() {
        let sequence = Sequence::new(vec![Tails, Heads]).unwrap();
        let json = serde_json::to_string(&sequence).unwrap();

        assert_eq!(json, "\"tails,heads\"");
        assert_eq!(serde_json::from_str::<Sequence>(&json).unwrap(), sequence);
    }
}
