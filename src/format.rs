use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
  /// Embeddable `<fedi-chat>` element with a declarative shadow root
  #[default]
  Html,
  /// Plain text for terminals
  Text,
}
