use super::*;

/// State of one `<fedi-chat>` element: its attributes and the two fetch
/// tasks they drive.
#[derive(Debug, Default)]
pub(crate) struct Widget {
  context: FetchTask<CommentsResponse>,
  hide_action_bar: bool,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  src: String,
  status: FetchTask<Comment>,
}

impl Widget {
  const HIDE_ACTION_BAR_ATTRIBUTE: &str = "hide-action-bar";

  const SRC_ATTRIBUTE: &str = "src";

  pub(crate) fn context(&self) -> &TaskState<CommentsResponse> {
    self.context.state()
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<Vec<Effect>> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let result = match command {
      Command::SetAttribute { name, value } => self.set_attribute(&name, value),
      Command::SetHideActionBar(hide) => {
        self.hide_action_bar = hide;
        Ok(())
      }
      Command::SetSrc(src) => self.set_src(src),
    };

    if let Err(error) = result {
      self.pending_effects.clear();
      return Err(error);
    }

    Ok(std::mem::take(&mut self.pending_effects))
  }

  /// Applies a fetch completion. Returns whether the visible state changed;
  /// completions of superseded requests are dropped.
  pub(crate) fn handle_event(&mut self, event: Event) -> bool {
    let (task, request_id, applied) = match event {
      Event::Context { request_id, result } => {
        ("context", request_id, self.context.settle(request_id, result))
      }
      Event::Status { request_id, result } => {
        ("status", request_id, self.status.settle(request_id, result))
      }
    };

    if !applied {
      tracing::debug!(task, request_id, "discarding stale completion");
    }

    applied
  }

  pub(crate) fn hide_action_bar(&self) -> bool {
    self.hide_action_bar
  }

  /// True once neither task has a request in flight.
  pub(crate) fn is_settled(&self) -> bool {
    self.context.is_settled() && self.status.is_settled()
  }

  fn next_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    request_id
  }

  fn set_attribute(&mut self, name: &str, value: Option<String>) -> Result {
    match name {
      Self::SRC_ATTRIBUTE => self.set_src(value.unwrap_or_default()),
      Self::HIDE_ACTION_BAR_ATTRIBUTE => {
        self.hide_action_bar = value.is_some();
        Ok(())
      }
      _ => {
        tracing::debug!(name, "ignoring unobserved attribute");
        Ok(())
      }
    }
  }

  fn set_src(&mut self, src: String) -> Result {
    if src.is_empty() {
      self.src = src;
      self.context.reset();
      self.status.reset();
      return Ok(());
    }

    let endpoint = Endpoint::resolve(&src)
      .context("failed to resolve post endpoint")?;

    tracing::debug!(host = endpoint.host(), id = endpoint.id(), "resolved post");

    self.src = src;

    let request_id = self.next_request_id();

    if self.status.run(endpoint.status_url(), request_id) {
      self.pending_effects.push(Effect::FetchStatus {
        request_id,
        url: endpoint.status_url(),
      });
    }

    let request_id = self.next_request_id();

    if self.context.run(endpoint.context_url(), request_id) {
      self.pending_effects.push(Effect::FetchContext {
        request_id,
        url: endpoint.context_url(),
      });
    }

    Ok(())
  }

  pub(crate) fn src(&self) -> &str {
    &self.src
  }

  pub(crate) fn status(&self) -> &TaskState<Comment> {
    self.status.state()
  }
}
