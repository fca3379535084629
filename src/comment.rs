use super::*;

/// A single status as returned by `GET /api/v1/statuses/:id`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Comment {
  pub(crate) account: Account,
  #[serde(default)]
  pub(crate) content: String,
  #[serde(default)]
  pub(crate) favourites_count: u64,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) reblogs_count: u64,
  #[serde(default)]
  pub(crate) replies_count: u64,
}
