use super::*;

const ACTION_BAR_ERROR: &str = "Error!";
const ACTION_BAR_LOADING: &str = "Loading...";
const COMMENTS_LOADING: &str = "Loading comments...";
const MISSING_SRC: &str =
  "Make sure you provided the link to a host comment in the \"src\" field.";

const STYLES: &str = "\
article {
  display: block;
  margin-top: 1em;
  margin-bottom: 1em;
  max-width: 400px;
  min-width: 250px;
  padding: 1em;
  padding-bottom: 0;
  font-family: sans-serif;
}

.content {
  display: block;
  margin-block-start: 1em;
  margin-block-end: 1em;
}

.content > p {
  margin-top: 0;
  margin-bottom: 0;
}

.author > div:first-child {
  font-weight: bold;
  margin-bottom: .25em;
}

.author a {
  font-size: .85em;
}

.action-bar {
  display: flex;
  justify-content: space-around;
}
";

/// Pure view of a [`Widget`]. Every call renders the whole widget from the
/// current state of both tasks.
///
/// `Comment::content` is inserted into HTML output verbatim through
/// `PreEscaped`. It arrives pre-rendered from the remote server and is
/// trusted as-is; every other value goes through maud's escaping.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Renderer {
  pub(crate) format: Format,
  pub(crate) styles: bool,
  pub(crate) width: usize,
}

impl Default for Renderer {
  fn default() -> Self {
    Self {
      format: Format::Html,
      styles: true,
      width: 80,
    }
  }
}

impl Renderer {
  fn counters(comment: &Comment) -> [String; 3] {
    [
      format_counter(comment.replies_count, "Replies"),
      format_counter(comment.reblogs_count, "Boosts"),
      format_counter(comment.favourites_count, "Favorites"),
    ]
  }

  fn html(self, widget: &Widget) -> String {
    let src = Some(widget.src()).filter(|src| !src.is_empty());

    let markup = html! {
      fedi-chat src=[src] hide-action-bar[widget.hide_action_bar()] {
        template shadowrootmode="open" {
          @if self.styles {
            style { (PreEscaped(STYLES)) }
          }
          (Self::html_body(widget))
        }
      }
    };

    let mut html = markup.into_string();

    html.push('\n');

    html
  }

  fn html_action_bar(comment: &Comment) -> Markup {
    html! {
      div class="action-bar" part="action-bar" {
        @for counter in Self::counters(comment) {
          div { (counter) }
        }
      }
    }
  }

  fn html_body(widget: &Widget) -> Markup {
    if widget.src().is_empty() {
      return html! { div { (MISSING_SRC) } };
    }

    html! {
      @if !widget.hide_action_bar() {
        (widget.status().render(
          || html! { div { (ACTION_BAR_LOADING) } },
          Self::html_action_bar,
          |_| html! { div { (ACTION_BAR_ERROR) } },
        ))
      }
      div part="comment-container" {
        (widget.context().render(
          || html! { (COMMENTS_LOADING) },
          |response| html! {
            @for comment in response.replies() {
              (Self::html_comment(comment))
            }
          },
          |_| html! { "Error. Unable to load comments from " (widget.src()) },
        ))
      }
    }
  }

  fn html_comment(comment: &Comment) -> Markup {
    let account = &comment.account;

    html! {
      article class="comment" part="comment" data-id=(comment.id) {
        div class="author" {
          div { (account.display_name()) }
          div {
            a href=(account.url) { (account.handle()) }
          }
        }
        div class="content" { (PreEscaped(&comment.content)) }
      }
    }
  }

  pub(crate) fn render(self, widget: &Widget) -> String {
    match self.format {
      Format::Html => self.html(widget),
      Format::Text => self.text(widget),
    }
  }

  fn text(self, widget: &Widget) -> String {
    if widget.src().is_empty() {
      return format!("{MISSING_SRC}\n");
    }

    let mut text = String::new();

    if !widget.hide_action_bar() {
      text.push_str(&widget.status().render(
        || ACTION_BAR_LOADING.to_string(),
        |comment| Self::counters(comment).join(" · "),
        |_| ACTION_BAR_ERROR.to_string(),
      ));

      text.push_str("\n\n");
    }

    text.push_str(&widget.context().render(
      || format!("{COMMENTS_LOADING}\n"),
      |response| {
        response
          .replies()
          .into_iter()
          .map(|comment| self.text_comment(comment))
          .collect::<Vec<_>>()
          .join("\n")
      },
      |_| format!("Error. Unable to load comments from {}\n", widget.src()),
    ));

    text
  }

  fn text_comment(self, comment: &Comment) -> String {
    let account = &comment.account;

    let content = html2text::from_read(comment.content.as_bytes(), self.width)
      .unwrap_or_else(|_| comment.content.clone());

    format!(
      "{}\n{}\n{}\n",
      account.display_name(),
      account.handle(),
      content.trim_end()
    )
  }
}
