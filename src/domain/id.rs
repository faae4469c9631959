//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Liquidity platform identifier - newtype for type safety.
///
/// One identifier per venue instance: two pair-graph platforms on the same
/// chain carry distinct ids even though they share an adapter type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlatformId(String);

impl PlatformId {
    /// Create a new `PlatformId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the platform ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlatformId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PlatformId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_id_new_and_as_str() {
        let id = PlatformId::new("curve");
        assert_eq!(id.as_str(), "curve");
    }

    #[test]
    fn platform_id_from_string() {
        let id = PlatformId::from("swapr".to_string());
        assert_eq!(id.as_str(), "swapr");
    }

    #[test]
    fn platform_id_display() {
        let id = PlatformId::new("sushiswap");
        assert_eq!(format!("{}", id), "sushiswap");
    }
}
