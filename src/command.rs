#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  /// Sets (`Some`) or removes (`None`) an attribute on the host element.
  SetAttribute { name: String, value: Option<String> },
  SetHideActionBar(bool),
  SetSrc(String),
}
