use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the Tropy server.
///
/// Ids arrive on the wire as JSON numbers, but string ids are carried
/// through unchanged rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) => Id::Number(n),
            Err(_) => Id::Text(s.to_string()),
        }
    }
}

impl FromStr for Id {
    type Err = std::convert::Infallible;

    /// Never fails: non-numeric input is forwarded as text for the server
    /// to judge.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_input_parses_as_number() {
        let id: Id = "42".parse().unwrap();
        assert_eq!(id, Id::Number(42));
    }

    #[test]
    fn test_other_input_parses_as_text() {
        let id: Id = "item-42".parse().unwrap();
        assert_eq!(id, Id::Text("item-42".to_string()));
    }

    #[test]
    fn test_display_renders_bare_value() {
        assert_eq!(Id::Number(7).to_string(), "7");
        assert_eq!(Id::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_deserializes_from_number_or_string() {
        let id: Id = serde_json::from_str("17").unwrap();
        assert_eq!(id, Id::Number(17));

        let id: Id = serde_json::from_str(r#""17a""#).unwrap();
        assert_eq!(id, Id::Text("17a".to_string()));
    }

    #[test]
    fn test_serializes_back_to_wire_shape() {
        assert_eq!(serde_json::to_string(&Id::Number(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&Id::Text("3b".to_string())).unwrap(),
            r#""3b""#
        );
    }
}
