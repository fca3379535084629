use super::*;

/// One asynchronous fetch bound to the widget. The task re-runs only when
/// its input URL changes, and only accepts the completion of its latest
/// request.
#[derive(Debug)]
pub(crate) struct FetchTask<T> {
  input: Option<String>,
  request_id: Option<u64>,
  state: TaskState<T>,
}

impl<T> Default for FetchTask<T> {
  fn default() -> Self {
    Self {
      input: None,
      request_id: None,
      state: TaskState::Pending,
    }
  }
}

impl<T> FetchTask<T> {
  pub(crate) fn is_settled(&self) -> bool {
    self.request_id.is_none()
  }

  /// Clears the task back to its initial pending state, abandoning any
  /// in-flight request.
  pub(crate) fn reset(&mut self) {
    *self = Self::default();
  }

  /// Starts a run for `input` under `request_id`. Returns false without
  /// touching the state when the input is unchanged.
  pub(crate) fn run(&mut self, input: String, request_id: u64) -> bool {
    if self.input.as_deref() == Some(input.as_str()) {
      return false;
    }

    self.input = Some(input);
    self.request_id = Some(request_id);
    self.state = TaskState::Pending;

    true
  }

  /// Applies a completion. Returns false when `request_id` is not the
  /// task's current request.
  pub(crate) fn settle(&mut self, request_id: u64, result: Result<T>) -> bool {
    if self.request_id != Some(request_id) {
      return false;
    }

    self.request_id = None;

    self.state = match result {
      Ok(value) => TaskState::Complete(value),
      Err(error) => TaskState::Error(format!("{error:#}")),
    };

    true
  }

  pub(crate) fn state(&self) -> &TaskState<T> {
    &self.state
  }
}
