#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TaskState<T> {
  Complete(T),
  Error(String),
  Pending,
}

impl<T> TaskState<T> {
  pub(crate) fn render<R>(
    &self,
    pending: impl FnOnce() -> R,
    complete: impl FnOnce(&T) -> R,
    error: impl FnOnce(&str) -> R,
  ) -> R {
    match self {
      Self::Complete(value) => complete(value),
      Self::Error(message) => error(message),
      Self::Pending => pending(),
    }
  }
}
