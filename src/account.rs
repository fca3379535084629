use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Account {
  #[serde(default)]
  pub(crate) display_name: String,
  pub(crate) url: String,
  pub(crate) username: String,
}

impl Account {
  pub(crate) fn display_name(&self) -> &str {
    if self.display_name.trim().is_empty() {
      &self.username
    } else {
      &self.display_name
    }
  }

  /// Full federated handle, `@username@host`, where the host comes from the
  /// profile URL. Falls back to `@username` when the profile URL does not
  /// parse.
  pub(crate) fn handle(&self) -> String {
    match Url::parse(&self.url)
      .ok()
      .as_ref()
      .and_then(Url::host_str)
    {
      Some(host) => format!("@{}@{host}", self.username),
      None => format!("@{}", self.username),
    }
  }
}
