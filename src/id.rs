use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned poll identifier
///
/// The API hands out integer ids, but the client treats them as opaque and
/// accepts string ids as well. Integer ids go back out as numbers.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct PollId {
    value: CompactString,
}

/// Wire forms an id may take
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPollId {
    Signed(i64),
    Unsigned(u64),
    Text(CompactString),
}

impl PollId {
    pub fn new<S: Into<CompactString>>(id: S) -> Self {
        Self { value: id.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<'de> Deserialize<'de> for PollId {
    fn deserialize<D>(deserializer: D) -> Result<PollId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match RawPollId::deserialize(deserializer)? {
            RawPollId::Signed(n) => n.to_compact_string(),
            RawPollId::Unsigned(n) => n.to_compact_string(),
            RawPollId::Text(s) => s,
        };
        Ok(PollId { value })
    }
}

impl Serialize for PollId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // only canonical integers, so "007" or "+5" stay strings
        if let Ok(n) = self.value.parse::<i64>()
            && self.value == n.to_compact_string()
        {
            return serializer.serialize_i64(n);
        }
        if let Ok(n) = self.value.parse::<u64>()
            && self.value == n.to_compact_string()
        {
            return serializer.serialize_u64(n);
        }
        serializer.serialize_str(&self.value)
    }
}

impl std::fmt::Display for PollId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_integer_id() {
        let id: PollId = serde_json::from_str("42").unwrap();
        assert_eq!(id, PollId::new("42"));
    }

    #[test]
    fn deserializes_string_id() {
        let id: PollId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(id.as_str(), "a1b2");
    }

    #[test]
    fn rejects_non_scalar_id() {
        assert!(serde_json::from_str::<PollId>("[1]").is_err());
        assert!(serde_json::from_str::<PollId>("null").is_err());
    }

    #[test]
    fn serializes_numeric_ids_as_numbers() {
        assert_eq!(serde_json::to_string(&PollId::new("7")).unwrap(), "7");
        assert_eq!(serde_json::to_string(&PollId::new("x7")).unwrap(), "\"x7\"");
        assert_eq!(serde_json::to_string(&PollId::new("007")).unwrap(), "\"007\"");
    }

    #[test]
    fn negative_and_large_ids_round_trip_as_numbers() {
        for raw in [json!(-5), json!(i64::MIN), json!(u64::MAX)] {
            let id: PollId = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&id).unwrap(), raw);
        }
    }
}
