//! Command-line surface: argument parsing and the subcommand runners.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use zones::config::{ConfigError, EditorConfig};
use zones::engine::EditorCore;
use zones::floorplan::{FloorplanDoc, FloorplanError};
use zones::render;
use zones::svg::SvgSurface;

use crate::script;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid floorplan {path}: {source}")]
    Floorplan {
        path: String,
        #[source]
        source: FloorplanError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize floorplan: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to render svg")]
    Render(#[from] std::fmt::Error),
}

#[derive(Parser, Debug)]
#[command(name = "zoneplanner", about = "Define floor zones on a floorplan grid")]
pub struct Cli {
    /// Editor config JSON (tile size, scale, style).
    #[arg(long, global = true, env = "ZONEPLANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, global = true, default_value_t = 800.0)]
    pub width: f64,

    /// Canvas height in pixels.
    #[arg(long, global = true, default_value_t = 600.0)]
    pub height: f64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a scripted session against a floorplan.
    Replay {
        #[arg(long)]
        floorplan: PathBuf,
        #[arg(long)]
        script: PathBuf,
        /// Where to write the updated floorplan JSON.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Where to write an SVG of the final editor state.
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Render a floorplan and its saved zones to SVG.
    Render {
        #[arg(long)]
        floorplan: PathBuf,
        #[arg(long)]
        svg: PathBuf,
    },
}

/// Execute the parsed command.
///
/// # Errors
///
/// Returns [`CliError`] for unreadable inputs, bad JSON or config, and failed writes.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => EditorConfig::from_json_file(path)?,
        None => EditorConfig::default(),
    };

    match cli.command {
        Command::Replay { floorplan, script, out, svg } => {
            let mut editor = open_editor(&floorplan, config, cli.width, cli.height)?;
            let raw = read(&script)?;
            let steps = script::parse(&raw).map_err(|source| json_error(&script, source))?;
            let summary = script::replay(&mut editor, &steps);
            info!(
                steps = summary.steps,
                toggles = summary.toggles,
                saves = summary.saves,
                removals = summary.removals,
                "replay finished"
            );

            print!("{}", listing(&editor));
            if let Some(path) = svg {
                write(&path, &render_svg(&editor)?)?;
            }
            if let Some(path) = out {
                write(&path, &editor.into_floorplan().to_json_string()?)?;
            }
            Ok(())
        }
        Command::Render { floorplan, svg } => {
            let editor = open_editor(&floorplan, config, cli.width, cli.height)?;
            write(&svg, &render_svg(&editor)?)
        }
    }
}

/// Load a floorplan and run the reset protocol at the requested canvas size.
fn open_editor(path: &Path, config: EditorConfig, width: f64, height: f64) -> Result<EditorCore, CliError> {
    let raw = read(path)?;
    let doc = FloorplanDoc::from_json_str(&raw)
        .map_err(|source| CliError::Floorplan { path: path.display().to_string(), source })?;
    let mut editor = EditorCore::new(doc, config);
    editor.resize(width, height);
    Ok(editor)
}

fn render_svg(editor: &EditorCore) -> Result<String, CliError> {
    let mut surface = SvgSurface::new();
    render::draw(&mut surface, editor)?;
    Ok(surface.finish())
}

/// One line per zone: saved zones first, then the in-progress zone.
pub fn listing(editor: &EditorCore) -> String {
    editor
        .zone_listing()
        .iter()
        .map(|entry| {
            let state = if entry.saved { "saved" } else { "editing" };
            format!("{state}\t{}\t{}\t{}\t{} tiles\n", entry.id, entry.color, entry.name, entry.tile_count)
        })
        .collect()
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })
}

fn write(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write { path: path.display().to_string(), source })
}

fn json_error(path: &Path, source: serde_json::Error) -> CliError {
    CliError::Json { path: path.display().to_string(), source }
}
