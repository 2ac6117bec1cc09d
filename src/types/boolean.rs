use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Boolean in the vendor's wire format.
///
/// Serialized as `"1"` / `"0"`. Responses may carry either a JSON boolean or
/// a string/number token; any token other than `0` reads as `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool(pub bool);

impl Bool {
    pub const TRUE: Bool = Bool(true);
    pub const FALSE: Bool = Bool(false);

    pub fn value(self) -> bool {
        self.0
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Bool(value)
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.0
    }
}

impl Serialize for Bool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if self.0 { "1" } else { "0" })
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = match Value::deserialize(deserializer)? {
            Value::Null => return Ok(Bool(false)),
            Value::Bool(value) => return Ok(Bool(value)),
            Value::String(s) => s,
            other => other.to_string(),
        };

        // Unknown tokens are accepted as true; the vendor only documents "0"/"1".
        Ok(Bool(token.replace('"', "") != "0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> Bool {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn encodes_as_digit_strings() {
        assert_eq!(serde_json::to_string(&Bool(true)).unwrap(), r#""1""#);
        assert_eq!(serde_json::to_string(&Bool(false)).unwrap(), r#""0""#);
    }

    #[test]
    fn decodes_encoded_values() {
        for value in [true, false] {
            let encoded = serde_json::to_string(&Bool(value)).unwrap();
            assert_eq!(decode(&encoded), Bool(value));
        }
    }

    #[test]
    fn decodes_native_booleans() {
        assert_eq!(decode("true"), Bool(true));
        assert_eq!(decode("false"), Bool(false));
    }

    #[test]
    fn decodes_numbers() {
        assert_eq!(decode("1"), Bool(true));
        assert_eq!(decode("0"), Bool(false));
    }

    #[test]
    fn unknown_tokens_are_true() {
        assert_eq!(decode(r#""yes""#), Bool(true));
        assert_eq!(decode(r#""""#), Bool(true));
    }

    #[test]
    fn null_is_false() {
        assert_eq!(decode("null"), Bool(false));
    }

    #[derive(Deserialize)]
    struct Flags {
        #[serde(default)]
        is_active: Bool,
    }

    #[test]
    fn missing_field_defaults_to_false() {
        let flags: Flags = serde_json::from_str("{}").unwrap();
        assert!(!flags.is_active.value());
    }
}
