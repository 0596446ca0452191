use serde::{Deserialize, Deserializer, Serialize};

// query strings always arrive as text; a page value that doesn't parse is
// treated as if it was never sent
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse::<i64>().ok()))
}

/// Integer that may also be sent as a numeric string. The quiz front end posts
/// `{"id": 0}` for "all" but category ids as object keys, i.e. `{"id": "3"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntOrString", into = "i32")]
pub struct LooseI32(pub i32);

impl From<LooseI32> for i32 {
    fn from(value: LooseI32) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl TryFrom<IntOrString> for LooseI32 {
    type Error = String;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        let parsed = match value {
            IntOrString::Int(v) => i32::try_from(v).map_err(|_| format!("{v} is out of range")),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("Wrong value {s}, can not parse to i32")),
        }?;
        Ok(LooseI32(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        id: LooseI32,
    }

    #[test]
    fn loose_i32_accepts_numbers_and_numeric_strings() {
        let a: Holder = serde_json::from_value(json!({"id": 0})).unwrap();
        let b: Holder = serde_json::from_value(json!({"id": "3"})).unwrap();
        assert_eq!(a.id, LooseI32(0));
        assert_eq!(b.id, LooseI32(3));
    }

    #[test]
    fn loose_i32_serializes_as_a_plain_integer() {
        assert_eq!(serde_json::to_value(LooseI32(7)).unwrap(), json!(7));
    }

    #[test]
    fn loose_i32_rejects_garbage() {
        assert!(serde_json::from_value::<Holder>(json!({"id": "science"})).is_err());
        assert!(serde_json::from_value::<Holder>(json!({"id": 1.5})).is_err());
        assert!(serde_json::from_value::<Holder>(json!({"id": 9_999_999_999i64})).is_err());
    }
}
