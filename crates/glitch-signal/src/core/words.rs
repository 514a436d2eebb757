use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::cycle::LightColor;

/// Startup configuration problems. None of these are recoverable in place:
/// the host is misconfigured and should fail loudly rather than run with an
/// undefined word on screen.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A color has no candidate words (missing key or empty list).
    #[error("no words configured for the {0:?} light")]
    EmptyWordList(LightColor),
    /// The word bank JSON did not parse.
    #[error("word bank JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Candidate display words per light color.
///
/// Loaded once at startup from JSON (a missing color key parses as an empty
/// list and is rejected by `validate`), or taken from the built-in set.
/// Treated as read-only after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBank {
    #[serde(default)]
    pub red: Vec<String>,
    #[serde(default)]
    pub yellow: Vec<String>,
    #[serde(default)]
    pub green: Vec<String>,
}

impl WordBank {
    /// Parse and validate a bank from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let bank: WordBank = serde_json::from_str(json)?;
        bank.validate()?;
        Ok(bank)
    }

    /// Every color must have at least one word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for color in LightColor::ALL {
            if self.words(color).is_empty() {
                return Err(ConfigError::EmptyWordList(color));
            }
        }
        Ok(())
    }

    /// The word list for a color.
    pub fn words(&self, color: LightColor) -> &[String] {
        match color {
            LightColor::Red => &self.red,
            LightColor::Yellow => &self.yellow,
            LightColor::Green => &self.green,
        }
    }
}

impl Default for WordBank {
    /// The stock word set shipped with the widget.
    fn default() -> Self {
        fn list(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| (*w).to_owned()).collect()
        }
        Self {
            red: list(&[
                "HALT", "FREEZE", "ERROR", "CRITICAL", "CHAOS",
                "LOCKED", "SCREAM", "SILENCE", "VOID", "ABSOLUTE",
                "BARRIER", "DENIED", "CRASH", "NOPE", "FORBIDDEN",
                "RAGE", "STOP", "BLOCKED", "DEADEND", "PANIC",
            ]),
            yellow: list(&[
                "CAUTION", "GLITCH", "LOADING", "ANXIETY", "VOLTAGE",
                "SPARK", "HAZARD", "WAIT", "YIELD", "SLOW",
                "BUFFER", "WARNING", "MAYBE", "ALMOST", "DOUBT",
                "FEAR", "ACID", "PREPARE", "READY", "ATOMIC",
            ]),
            green: list(&[
                "GO", "VELOCITY", "IGNITE", "LAUNCH", "ZOOM",
                "HYPER", "ALIVE", "FLOW", "ACCELERATE", "THRUST",
                "NITRO", "ESCAPE", "RUSH", "DRIFT", "TURBO",
                "BLAST", "SPEED", "FUTURE", "START", "BEGIN",
            ]),
        }
    }
}
