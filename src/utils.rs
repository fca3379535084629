use super::*;

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(s),
    Value::Number(n) => Ok(n.to_string()),
    Value::Null => Err(de::Error::invalid_type(
      Unexpected::Option,
      &"string or number",
    )),
    Value::Bool(b) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Value::Array(_) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Value::Object(_) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

/// Counters keep a fixed label regardless of the count.
pub(crate) fn format_counter(count: u64, label: &str) -> String {
  format!("{count} {label}")
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct IdWrapper {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
  }

  fn parse_id(input: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<IdWrapper>(input).map(|wrapper| wrapper.id)
  }

  #[test]
  fn deserialize_id_supports_strings_and_numbers() {
    assert_eq!(parse_id(r#"{"id": "109372"}"#).unwrap(), "109372");
    assert_eq!(parse_id(r#"{"id": 42}"#).unwrap(), "42");
  }

  #[test]
  fn deserialize_id_rejects_other_values() {
    assert!(parse_id(r#"{"id": null}"#).is_err(), "null should fail");
    assert!(parse_id(r#"{"id": true}"#).is_err(), "bools should fail");
    assert!(parse_id(r#"{"id": [1]}"#).is_err(), "arrays should fail");
    assert!(parse_id(r"{}").is_err(), "missing ids should fail");
  }

  #[test]
  fn format_counter_keeps_label_fixed() {
    assert_eq!(format_counter(3, "Replies"), "3 Replies");
    assert_eq!(format_counter(1, "Boosts"), "1 Boosts");
    assert_eq!(format_counter(0, "Favorites"), "0 Favorites");
  }
}
