use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// Reads an optional id the way loosely typed clients send it: absent,
/// `null`, `false`, `0` and `""` all mean "no id", numeric strings are
/// accepted.
pub fn falsy_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(None),
        Some(Value::Number(number)) => number.as_i64().ok_or_else(|| {
            D::Error::custom(format!("invalid id: {}", number))
        })?,
        Some(Value::String(text)) if text.is_empty() => return Ok(None),
        Some(Value::String(text)) => text
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid id: {}", text)))?,
        Some(other) => {
            return Err(D::Error::custom(format!("invalid id: {}", other)))
        }
    };

    if id == 0 {
        return Ok(None);
    }

    i32::try_from(id)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("id out of range: {}", id)))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::falsy_id;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "falsy_id")]
        id: Option<i32>,
    }

    fn parse(
        value: serde_json::Value,
    ) -> Result<Option<i32>, serde_json::Error> {
        serde_json::from_value::<Body>(value).map(|body| body.id)
    }

    #[test]
    fn falsy_values_mean_no_id() {
        assert_eq!(parse(json!({})).unwrap(), None);
        assert_eq!(parse(json!({ "id": null })).unwrap(), None);
        assert_eq!(parse(json!({ "id": "" })).unwrap(), None);
        assert_eq!(parse(json!({ "id": 0 })).unwrap(), None);
        assert_eq!(parse(json!({ "id": false })).unwrap(), None);
    }

    #[test]
    fn numbers_and_numeric_strings_are_ids() {
        assert_eq!(parse(json!({ "id": 12 })).unwrap(), Some(12));
        assert_eq!(parse(json!({ "id": "34" })).unwrap(), Some(34));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse(json!({ "id": "abc" })).is_err());
        assert!(parse(json!({ "id": [1] })).is_err());
        assert!(parse(json!({ "id": 1.5 })).is_err());
        assert!(parse(json!({ "id": 9_999_999_999_i64 })).is_err());
    }
}
