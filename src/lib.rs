#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod output;
pub mod store;

use anyhow::{Context, Result, anyhow, bail};
use std::path::PathBuf;
use thiserror::Error;

use cli::{Cli, Commands};
use commands::list::ListRequest;
use commands::post::PostRequest;
use config::Config;
use error::BoardError;
use output::Output;
use store::Database;

pub const BOARD_DIR: &str = ".thoughts";

/// A board error that has already been written to the terminal.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Reported(#[from] pub BoardError);

/// Finds the `.thoughts/` directory by walking up from the current directory.
/// Returns `None` if no `.thoughts/` directory is found.
pub fn find_board_dir() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    let mut dir = current_dir.as_path();

    loop {
        let board_path = dir.join(BOARD_DIR);
        if board_path.is_dir() {
            return Some(board_path);
        }

        dir = dir.parent()?;
    }
}

/// The configured board directory, falling back to an upward search.
pub fn resolve_board_dir(config: &Config) -> Option<PathBuf> {
    config.board_dir.clone().or_else(find_board_dir)
}

fn ensure_initialized(config: &Config) -> Result<Database> {
    let board_dir = resolve_board_dir(config)
        .ok_or_else(|| anyhow!("Board not initialized. Run 'thoughts init' first."))?;

    Database::open(&board_dir).context("Failed to open board")
}

fn report(out: &Output, err: BoardError, suggestion: Option<String>) -> anyhow::Error {
    match out.board_error(&err, suggestion.as_deref()) {
        Ok(()) => Reported(err).into(),
        Err(write_err) => {
            tracing::error!(%write_err, "failed to report error: {err}");
            write_err.context(err)
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load();
    let out = Output::new(cli.json);

    match cli.command {
        Commands::Init => {
            let board_dir = config
                .board_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(BOARD_DIR));
            let outcome = commands::init::run(&board_dir)?;
            out.initialized(&outcome)
        }
        Commands::List { page, order, theme } => {
            let db = ensure_initialized(&config)?;
            let request = ListRequest { page, order, theme };
            match commands::list::run(&request, &db) {
                Ok(listing) => out.listing(&listing, page),
                Err(err) => Err(report(&out, err, None)),
            }
        }
        Commands::Post {
            message,
            theme,
            page,
            order,
        } => {
            let db = ensure_initialized(&config)?;
            let request = PostRequest {
                message,
                theme,
                page,
                order,
            };
            match commands::post::run(&request, &db) {
                Ok(listing) => out.listing(&listing, page),
                Err(err) => Err(report(&out, err, None)),
            }
        }
        Commands::Like { thought_id } => {
            let db = ensure_initialized(&config)?;
            match commands::like::run(&thought_id, &db) {
                Ok(thought) => out.liked(&thought),
                Err(err @ BoardError::NotFound { .. }) => {
                    let suggestion = commands::like::suggest(&thought_id, &db);
                    Err(report(&out, err, suggestion))
                }
                Err(err) => Err(report(&out, err, None)),
            }
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("Refusing to delete every thought without --yes");
            }
            let db = ensure_initialized(&config)?;
            match commands::reset::run(&db) {
                Ok(summary) => out.reset(&summary),
                Err(err) => Err(report(&out, err, None)),
            }
        }
    }
}
