use {
  account::Account,
  anyhow::Context,
  app::App,
  arguments::Arguments,
  clap::{Parser, ValueEnum, builder::BoolishValueParser},
  client::Client,
  command::Command,
  comment::Comment,
  comments_response::CommentsResponse,
  crossterm::style::Stylize,
  effect::Effect,
  endpoint::Endpoint,
  event::Event,
  fetch_task::FetchTask,
  format::Format,
  maud::{Markup, PreEscaped, html},
  render::Renderer,
  serde::{
    Deserialize, Deserializer,
    de::{self, DeserializeOwned, Unexpected},
  },
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    collections::HashSet,
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process,
  },
  task_state::TaskState,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing_subscriber::EnvFilter,
  url::Url,
  utils::{deserialize_id, format_counter},
  widget::Widget,
};

mod account;
mod app;
mod arguments;
mod client;
mod command;
mod comment;
mod comments_response;
mod effect;
mod endpoint;
mod event;
mod fetch_task;
mod format;
mod render;
mod task_state;
mod utils;
mod widget;

const LOG_ENV: &str = "FEDI_CHAT_LOG";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_env(LOG_ENV)
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let mut app = App::new(Client::new()?, arguments.renderer());

  for command in arguments.commands() {
    app.dispatch_command(command)?;
  }

  let mut revision = 0_u64;

  let markup = app
    .run(|markup| {
      tracing::debug!(revision, bytes = markup.len(), "widget rendered");
      revision += 1;
      Ok(())
    })
    .await?;

  arguments.write(&markup)
}

#[tokio::main]
async fn main() {
  initialize_logging();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
