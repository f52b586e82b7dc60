//! Strongly-typed identifiers.
//!
//! The catalog service is inconsistent about id encoding (`2` vs `"2"`), so ids
//! are normalized to their string form on the way in and compared as strings.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Tool identifier, always held in string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolId(String);

impl ToolId {
    pub fn from_string(s: String) -> Result<Self, &'static str> {
        if s.is_empty() {
            return Err("ToolId cannot be empty");
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ToolId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ToolId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for ToolId {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<&ToolId> for ToolId {
    fn from(id: &ToolId) -> Self {
        id.clone()
    }
}

macro_rules! tool_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ToolId {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

tool_id_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl PartialEq<str> for ToolId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ToolId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for ToolId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ToolId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ToolIdVisitor)
    }
}

struct ToolIdVisitor;

impl<'de> Visitor<'de> for ToolIdVisitor {
    type Value = ToolId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-empty string or an integer tool id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ToolId, E> {
        ToolId::from_string(v.to_string()).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ToolId, E> {
        ToolId::from_string(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ToolId, E> {
        Ok(ToolId::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ToolId, E> {
        Ok(ToolId::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids_compare_equal() {
        let from_number: ToolId = serde_json::from_value(json!(2)).unwrap();
        let from_string: ToolId = serde_json::from_value(json!("2")).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number, ToolId::from(2u32));
        assert_eq!(from_number, "2");
    }

    #[test]
    fn test_negative_id_normalizes() {
        let id: ToolId = serde_json::from_value(json!(-7)).unwrap();
        assert_eq!(id.as_str(), "-7");
    }

    #[test]
    fn test_serializes_as_string() {
        let id = ToolId::from(42i64);
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("42"));
    }

    #[test]
    fn test_rejects_empty_and_non_scalar_ids() {
        assert!(serde_json::from_value::<ToolId>(json!("")).is_err());
        assert!(serde_json::from_value::<ToolId>(json!(true)).is_err());
        assert!(serde_json::from_value::<ToolId>(json!(null)).is_err());
        assert!(serde_json::from_value::<ToolId>(json!(2.5)).is_err());
        assert!(serde_json::from_value::<ToolId>(json!({"id": 1})).is_err());
    }

    #[test]
    fn test_from_string_rejects_empty() {
        assert!(ToolId::from_string(String::new()).is_err());
        assert_eq!(ToolId::from_string("7".into()).unwrap().to_string(), "7");
    }
}
