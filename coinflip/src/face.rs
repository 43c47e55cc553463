use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::de::Error;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ConfigError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Face {
    Heads,
    Tails,
}

impl FromStr for Face {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heads" => Ok(Face::Heads),
            "tails" => Ok(Face::Tails),
            _ => Err(ConfigError::InvalidFace(s.to_string())),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Face::Heads => write!(f, "heads"),
            Face::Tails => write!(f, "tails"),
        }
    }
}

impl Distribution<Face> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Face {
        if rng.gen_range(0..2) == 0 {
            Face::Heads
        } else {
            Face::Tails
        }
    }
}

impl Serialize for Face {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct FaceVisitor {}

impl FaceVisitor {
    fn new() -> Self {
        Self {}
    }
}

impl<'de> Visitor<'de> for FaceVisitor {
    type Value = Face;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Expecting either \"heads\" or \"tails\".")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Face {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FaceVisitor::new())
    }
}
