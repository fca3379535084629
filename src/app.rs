use super::*;

/// Drives a [`Widget`]: executes its fetch effects on the runtime and feeds
/// completions back into it, rendering after every applied transition.
pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  renderer: Renderer,
  widget: Widget,
}

impl App {
  pub(crate) fn dispatch_command(&mut self, command: Command) -> Result {
    for effect in self.widget.dispatch_command(command)? {
      self.execute_effect(effect);
    }

    Ok(())
  }

  fn execute_effect(&self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::FetchContext { request_id, url } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Context {
            request_id,
            result: client.fetch_context(&url).await,
          });
        });
      }
      Effect::FetchStatus { request_id, url } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Status {
            request_id,
            result: client.fetch_status(&url).await,
          });
        });
      }
    }
  }

  pub(crate) fn new(client: Client, renderer: Renderer) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      renderer,
      widget: Widget::default(),
    }
  }

  /// Renders the current state, then re-renders after each applied
  /// completion until both tasks have settled. Every render is passed to
  /// `observer`; the last one is returned, and it is the only frame the
  /// CLI writes out.
  pub(crate) async fn run(
    &mut self,
    mut observer: impl FnMut(&str) -> Result,
  ) -> Result<String> {
    let mut markup = self.renderer.render(&self.widget);

    observer(&markup)?;

    while !self.widget.is_settled() {
      let Some(event) = self.event_rx.recv().await else {
        break;
      };

      if !self.widget.handle_event(event) {
        continue;
      }

      markup = self.renderer.render(&self.widget);

      observer(&markup)?;
    }

    Ok(markup)
  }
}
