use super::*;

/// The reply context of a status, `GET /api/v1/statuses/:id/context`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct CommentsResponse {
  #[allow(dead_code)]
  #[serde(default)]
  pub(crate) ancestors: Vec<Comment>,
  #[serde(default)]
  pub(crate) descendants: Vec<Comment>,
}

impl CommentsResponse {
  /// Descendants in server order, keyed by id. A repeated id keeps its
  /// first occurrence.
  pub(crate) fn replies(&self) -> Vec<&Comment> {
    let mut seen = HashSet::new();

    self
      .descendants
      .iter()
      .filter(|comment| {
        let first = seen.insert(comment.id.as_str());

        if !first {
          tracing::warn!(id = %comment.id, "skipping reply with duplicate id");
        }

        first
      })
      .collect()
  }
}
