//! Sort direction for container snapshots.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RankError;

/// Direction of a snapshot produced by `to_sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Order {
    /// Smallest element first.
    Ascending,
    /// Largest element first.
    #[default]
    Descending,
}

impl Order {
    /// Applies the direction to an ascending vector in place.
    #[inline]
    pub(crate) fn apply<T>(self, ascending: &mut [T]) {
        if self == Order::Descending {
            ascending.reverse();
        }
    }
}

impl FromStr for Order {
    type Err = RankError;

    /// Accepts `"ascend"` / `"descend"` and their common spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascend" | "ascending" | "asc" => Ok(Order::Ascending),
            "descend" | "descending" | "desc" => Ok(Order::Descending),
            _ => Err(RankError::UnsupportedOrder(s.to_string())),
        }
    }
}

impl TryFrom<String> for Order {
    type Error = RankError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => f.write_str("ascend"),
            Order::Descending => f.write_str("descend"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_names() {
        assert_eq!("ascend".parse::<Order>().unwrap(), Order::Ascending);
        assert_eq!("Ascending".parse::<Order>().unwrap(), Order::Ascending);
        assert_eq!("desc".parse::<Order>().unwrap(), Order::Descending);
        assert_eq!(" descend ".parse::<Order>().unwrap(), Order::Descending);
    }

    #[test]
    fn parse_unknown_is_unsupported() {
        let err = "random".parse::<Order>().unwrap_err();
        assert!(matches!(err, RankError::UnsupportedOrder(ref s) if s == "random"));
    }

    #[test]
    fn display_roundtrips() {
        for order in [Order::Ascending, Order::Descending] {
            assert_eq!(order.to_string().parse::<Order>().unwrap(), order);
        }
    }

    #[test]
    fn deserialize_from_json() {
        let order: Order = serde_json::from_str("\"ascend\"").unwrap();
        assert_eq!(order, Order::Ascending);
        assert!(serde_json::from_str::<Order>("\"upward\"").is_err());
    }
}
