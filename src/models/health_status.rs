use serde::{Deserialize, Serialize};
use std::fmt;

/// Health state of an animal.
///
/// Only `Healthy` and `Sick` are ever written by this program; the two move
/// into each other (symptoms → Sick, admin edit → either). Any other text
/// found in an existing file is carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Sick,
    Other(String),
}

impl HealthStatus {
    /// An empty cell.
    pub fn blank() -> Self {
        HealthStatus::Other(String::new())
    }

    pub fn as_str(&self) -> &str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Sick => "Sick",
            HealthStatus::Other(text) => text,
        }
    }

    /// Parse stored text. Case-insensitive; accepts the Indonesian labels
    /// written by older versions of the farm files.
    pub fn from_text(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "healthy" | "sehat" => HealthStatus::Healthy,
            "sick" | "sakit" => HealthStatus::Sick,
            _ => HealthStatus::Other(text.to_string()),
        }
    }
}

impl From<String> for HealthStatus {
    fn from(text: String) -> Self {
        HealthStatus::from_text(&text)
    }
}

impl From<HealthStatus> for String {
    fn from(status: HealthStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
