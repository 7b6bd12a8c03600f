use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mass in kilograms, kept as the text that is stored on disk.
///
/// New values always come from a validated number; values read back from a
/// file are only parsed when a caller needs the number (reports, sorting),
/// so a damaged cell never prevents the rest of the row from loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(String);

impl Kilograms {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::InvalidQuantity(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Numeric value, `None` if the stored text is not a number.
    pub fn value(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Kilograms {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidQuantity(s.to_string()))?;
        Kilograms::new(value)
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
