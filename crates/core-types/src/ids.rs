use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of a company attached to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyId(String);

impl CompanyId {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyIdentifier("company id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CompanyId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CompanyId> for String {
    fn from(id: CompanyId) -> Self {
        id.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reporting interval label: `2024`, `2024-Q1` or `2024-03`.
///
/// Periods order lexicographically, which is chronological within each of
/// those shapes. Months must be zero-padded, otherwise `2024-10` would sort
/// before `2024-3`, so `parse` rejects any other shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period(String);

impl Period {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyIdentifier("period"));
        }
        if !is_period_label(trimmed) {
            return Err(CoreError::InvalidPeriod(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_period_label(label: &str) -> bool {
    let (year, rest) = label.split_at_checked(4).unwrap_or((label, ""));
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match rest.as_bytes() {
        [] => true,
        [b'-', b'Q', quarter] => (b'1'..=b'4').contains(quarter),
        [b'-', tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            let month = (tens - b'0') * 10 + (ones - b'0');
            (1..=12).contains(&month)
        }
        _ => false,
    }
}

impl TryFrom<String> for Period {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
