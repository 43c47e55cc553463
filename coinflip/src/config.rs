use serde::Serialize;

use crate::{ConfigError, Sequence};

/// Validated parameters of a simulation.
///
/// Both target sequences are guaranteed to be non-empty and of equal length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    runs: u64,
    p1_name: String,
    p2_name: String,
    p1_sequence: Sequence,
    p2_sequence: Sequence,
}

impl GameConfig {
    pub fn new(
        runs: u64,
        p1_name: impl Into<String>,
        p2_name: impl Into<String>,
        p1_sequence: Sequence,
        p2_sequence: Sequence,
    ) -> Result<Self, ConfigError> {
        if p1_sequence.len() != p2_sequence.len() {
            return Err(ConfigError::UnequalLengths {
                p1: p1_sequence.len(),
                p2: p2_sequence.len(),
            });
        }

        Ok(Self {
            runs,
            p1_name: p1_name.into(),
            p2_name: p2_name.into(),
            p1_sequence,
            p2_sequence,
        })
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn p1_name(&self) -> &str {
        &self.p1_name
    }

    pub fn p2_name(&self) -> &str {
        &self.p2_name
    }

    pub fn p1_sequence(&self) -> &Sequence {
        &self.p1_sequence
    }

    pub fn p2_sequence(&self) -> &Sequence {
        &self.p2_sequence
    }
}
