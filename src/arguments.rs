use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "fedi-chat",
  version,
  about = "Render the replies to a fediverse post as an embeddable comment widget"
)]
pub(crate) struct Arguments {
  /// Set an attribute on the widget element, as an embedding page would
  #[arg(long = "attribute", value_name = "NAME[=VALUE]")]
  pub(crate) attributes: Vec<String>,
  /// Output format
  #[arg(
    long,
    value_enum,
    default_value_t = Format::Html,
    env = "FEDI_CHAT_FORMAT"
  )]
  pub(crate) format: Format,
  /// Do not render the replies/boosts/favorites bar
  #[arg(
    long,
    env = "FEDI_CHAT_HIDE_ACTION_BAR",
    value_parser = BoolishValueParser::new()
  )]
  pub(crate) hide_action_bar: bool,
  /// Omit the embedded stylesheet from HTML output
  #[arg(
    long,
    env = "FEDI_CHAT_NO_STYLES",
    value_parser = BoolishValueParser::new()
  )]
  pub(crate) no_styles: bool,
  /// Write the rendered widget to a file instead of stdout
  #[arg(long, short, value_name = "PATH", env = "FEDI_CHAT_OUTPUT")]
  pub(crate) output: Option<PathBuf>,
  /// Remove an attribute from the widget element after all `--attribute`s
  #[arg(long = "remove-attribute", value_name = "NAME")]
  pub(crate) removed_attributes: Vec<String>,
  /// Link to the post whose replies should be shown
  #[arg(value_name = "SRC", env = "FEDI_CHAT_SRC")]
  pub(crate) src: Option<String>,
  /// Wrap width for text output
  #[arg(long, default_value_t = 80, env = "FEDI_CHAT_WIDTH")]
  pub(crate) width: usize,
}

impl Arguments {
  /// Commands applied to a fresh widget: properties first, then raw
  /// attributes in the order given, then attribute removals.
  pub(crate) fn commands(&self) -> Vec<Command> {
    let mut commands = vec![
      Command::SetHideActionBar(self.hide_action_bar),
      Command::SetSrc(self.src.clone().unwrap_or_default()),
    ];

    commands.extend(self.attributes.iter().map(|attribute| {
      let (name, value) = attribute
        .split_once('=')
        .unwrap_or((attribute.as_str(), ""));

      Command::SetAttribute {
        name: name.to_string(),
        value: Some(value.to_string()),
      }
    }));

    commands.extend(self.removed_attributes.iter().map(|name| {
      Command::SetAttribute {
        name: name.clone(),
        value: None,
      }
    }));

    commands
  }

  pub(crate) fn renderer(&self) -> Renderer {
    Renderer {
      format: self.format,
      styles: !self.no_styles,
      width: self.width.max(1),
    }
  }

  pub(crate) fn write(&self, markup: &str) -> Result {
    match &self.output {
      Some(path) => fs::write(path, markup)
        .with_context(|| format!("failed to write {}", path.display())),
      None => {
        let mut stdout = io::stdout().lock();

        stdout.write_all(markup.as_bytes())?;
        stdout.flush()?;

        Ok(())
      }
    }
  }
}
