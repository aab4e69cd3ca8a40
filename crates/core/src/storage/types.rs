use std::{fmt, str::FromStr};

use super::{Result, StorageError};

/// Row limit for a scan, as the table accepts it.
///
/// The limit caps how many items a scan reads. It does not select the newest
/// items: a limited scan returns an arbitrary subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimit(i32);

impl ScanLimit {
    /// Creates a limit, rejecting values the table would reject.
    pub fn new(limit: i32) -> Result<Self> {
        if limit < 1 {
            return Err(StorageError::validation(format!(
                "1 validation error detected: Value '{limit}' at 'limit' failed to satisfy constraint: Member must have value greater than or equal to 1"
            )));
        }
        Ok(Self(limit))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for ScanLimit {
    type Err = StorageError;

    /// Parses a raw path segment such as `"10"`.
    ///
    /// Only the canonical decimal form is accepted: no whitespace, sign or
    /// leading zeros.
    fn from_str(raw: &str) -> Result<Self> {
        let limit = raw
            .parse::<i32>()
            .ok()
            .filter(|limit| limit.to_string() == raw)
            .ok_or_else(|| {
                StorageError::validation(format!(
                    "1 validation error detected: Value '{raw}' at 'limit' failed to satisfy constraint: Member must be a valid integer"
                ))
            })?;
        Self::new(limit)
    }
}

impl fmt::Display for ScanLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
