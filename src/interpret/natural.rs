use std::cmp::Ordering;

use derive_more::Display;

/// Non-negative integer of any size, stored as its decimal digits without
/// leading zeros (zero itself is `"0"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{}", _0)]
pub struct Natural(String);

impl Natural {
    /// Returns `None` unless `digits` is a non-empty run of ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Some(Natural("0".to_string()));
        }
        Some(Natural(trimmed.to_string()))
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

// Canonical digits: a longer number is larger, equal lengths compare by text.
impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Natural {
    fn from(v: u64) -> Self {
        Natural(v.to_string())
    }
}

impl From<u32> for Natural {
    fn from(v: u32) -> Self {
        Natural(v.to_string())
    }
}
