//! # CLI Layer
//!
//! This module is **one possible UI client** for streamfield.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Locate the document, load configuration, build the API
//! 3. **Dispatch**: Route each command to one API call
//! 4. **Output Formatting**: Templates for `term`/`text`, serde for `json`
//! 5. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::render::{ListOptions, Renderer};
use super::setup::{Cli, Commands, OutputMode};
use anyhow::{anyhow, Context};
use clap::Parser;
use console::Term;
use serde::Serialize;
use std::path::PathBuf;
use streamfieldapp::api::{parse_path, CmdMessage};
use streamfieldapp::commands::CmdResult;
use streamfieldapp::config::StreamFieldConfig;
use streamfieldapp::droppable::DragResult;
use streamfieldapp::init::{initialize, StreamFieldContext};
use streamfieldapp::store::ForestStore;
use streamfieldapp::view::{block_view, EventTarget, UiEvent};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_override = cli.data.as_ref().map(PathBuf::from);
    let mut ctx = initialize(&cwd, data_override)?;
    let out = Output::new(cli.output)?;

    if ctx.seeded {
        let location = ctx
            .api
            .store()
            .location()
            .unwrap_or_else(|| ctx.data_dir.clone());
        out.notice(&CmdMessage::info(format!(
            "Created a new document with {} sample blocks in {}",
            ctx.config.sample_size,
            location.display()
        )))?;
    }

    let command = cli.command.unwrap_or(Commands::List { all: false });
    debug!(?command, "dispatching");
    dispatch(&mut ctx, &out, command)
}

/// `STREAMFIELD_LOG` wins over `RUST_LOG`; `-v` lowers the default level to debug.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = std::env::var("STREAMFIELD_LOG")
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::from_default_env().add_directive(level.into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn dispatch(ctx: &mut StreamFieldContext, out: &Output, command: Commands) -> anyhow::Result<()> {
    let api = &mut ctx.api;
    match command {
        Commands::List { all } => {
            let view = api.view()?;
            match out.mode {
                OutputMode::Json => out.json(&view),
                _ => {
                    let options = ListOptions {
                        indent: ctx.config.indent,
                        show_ids: ctx.config.show_ids,
                        expand_all: all,
                    };
                    out.print(out.renderer.render_tree(&view, options)?);
                    Ok(())
                }
            }
        }
        Commands::Show { path } => {
            let result = api.get_block(&parse_path(&path)?)?;
            let found = result
                .affected_blocks
                .first()
                .ok_or_else(|| anyhow!("No block at {}", path))?;
            let view = block_view(found.path.clone(), &found.block);
            match out.mode {
                OutputMode::Json => out.json(&view),
                _ => {
                    out.print(out.renderer.render_block(&view)?);
                    Ok(())
                }
            }
        }
        Commands::Up { path } => out.result(&api.move_up(&parse_path(&path)?)?),
        Commands::Down { path } => out.result(&api.move_down(&parse_path(&path)?)?),
        Commands::Duplicate { path } => out.result(&api.duplicate(&parse_path(&path)?)?),
        Commands::Add { path } => out.result(&api.add(&parse_path(&path)?)?),
        Commands::Append { list } => out.result(&api.append(&parse_path(&list)?)?),
        Commands::Delete { path } => out.result(&api.delete(&parse_path(&path)?)?),
        Commands::Open { path } => out.result(&api.open(&parse_path(&path)?)?),
        Commands::Close { path } => out.result(&api.close(&parse_path(&path)?)?),
        Commands::Toggle { path } => out.result(&api.toggle(&parse_path(&path)?)?),
        Commands::Move {
            source,
            source_index,
            destination,
            destination_index,
        } => out.result(&api.reorder(
            &parse_path(&source)?,
            &parse_path(&destination)?,
            source_index,
            destination_index,
        )?),
        Commands::Drop { json } => {
            let drag: DragResult =
                serde_json::from_str(&json).context("Invalid drag result JSON")?;
            out.result(&api.on_drag_end(&drag)?)
        }
        Commands::Click { path, target } => {
            let target: EventTarget = target.parse()?;
            let event = UiEvent::new(parse_path(&path)?, target);
            out.result(&api.dispatch(&event)?)
        }
        Commands::Reset { size } => {
            out.result(&api.reset(size.unwrap_or(ctx.config.sample_size))?)
        }
        Commands::Config { key } => config(&ctx.config, out, key.as_deref()),
    }
}

fn config(config: &StreamFieldConfig, out: &Output, key: Option<&str>) -> anyhow::Result<()> {
    let table = toml::Value::try_from(config).context("Failed to serialize configuration")?;
    let toml::Value::Table(table) = table else {
        return Err(anyhow!("Configuration is not a table"));
    };

    match key {
        Some(key) => {
            let value = table
                .get(key)
                .ok_or_else(|| anyhow!("Unknown config key: {}", key))?;
            match out.mode {
                OutputMode::Json => out.json(value),
                _ => {
                    println!("{}", format_toml_value(value));
                    Ok(())
                }
            }
        }
        None => match out.mode {
            OutputMode::Json => out.json(config),
            _ => {
                for (k, v) in &table {
                    println!("{} = {}", k, format_toml_value(v));
                }
                Ok(())
            }
        },
    }
}

fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

struct Output {
    mode: OutputMode,
    renderer: Renderer,
}

impl Output {
    fn new(mode: OutputMode) -> anyhow::Result<Self> {
        let use_color = match mode {
            OutputMode::Term => Term::stdout().features().colors_supported(),
            OutputMode::Text | OutputMode::Json => false,
        };
        Ok(Self {
            mode,
            renderer: Renderer::new(use_color)?,
        })
    }

    fn print(&self, text: String) {
        if !text.is_empty() {
            print!("{}", text);
        }
    }

    fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn result(&self, result: &CmdResult) -> anyhow::Result<()> {
        match self.mode {
            OutputMode::Json => self.json(result),
            _ => {
                self.print(self.renderer.render_messages(&result.messages)?);
                Ok(())
            }
        }
    }

    /// Side-channel message; kept off stdout in JSON mode.
    fn notice(&self, message: &CmdMessage) -> anyhow::Result<()> {
        match self.mode {
            OutputMode::Json => eprintln!("{}", message.content),
            _ => self.print(self.renderer.render_messages(std::slice::from_ref(message))?),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_toml_value() {
        assert_eq!(
            format_toml_value(&toml::Value::String("document.json".into())),
            "document.json"
        );
        assert_eq!(format_toml_value(&toml::Value::Integer(50)), "50");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
