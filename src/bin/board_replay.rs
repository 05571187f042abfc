//! Replays board requests and prints the resulting board.
//!
//! Usage:
//!
//! ```text
//! board_replay [config-path] < requests.jsonl
//! ```
//!
//! The optional `config-path` names a JSON [`BoardConfig`]. Each non-empty
//! line on stdin must hold one request object tagged by `op`:
//!
//! ```json
//! {"op":"create","status":"new","draft":{"title":"Write docs","priority":"high"}}
//! {"op":"move","command":{"kind":"relocate","source":{"status":"new","index":0},"destination":{"status":"ongoing","index":0}}}
//! {"op":"move","command":{"kind":"cancelled"}}
//! {"op":"edit","id":"FYR-1000","update":{"description":"Cover the move engine"}}
//! {"op":"move_to_column","id":"FYR-1000","status":"completed"}
//! {"op":"delete","id":"FYR-1000"}
//! ```
//!
//! After the last request the board view is written to stdout as JSON.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use mockable::{Clock, DefaultClock};
use serde::Deserialize;
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use taskboard::{
    board::{
        config::BoardConfig,
        domain::{MoveCommand, TaskDetailsUpdate, TaskDraft, TaskId, TaskStatus},
        ports::TaskIdGenerator,
        services::{BoardSession, BoardSessionError},
    },
    telemetry,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while replaying requests.
#[derive(Debug, Error)]
enum ReplayError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read board config: {0}")]
    ConfigRead(#[source] io::Error),
    #[error("failed to parse board config: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("failed to read requests: {0}")]
    Input(#[source] io::Error),
    #[error("line {line}: malformed request: {source}")]
    Request {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: request rejected: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: BoardSessionError,
    },
    #[error("failed to write board view: {0}")]
    Output(#[source] io::Error),
}

/// One command issued by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum BoardRequest {
    Move {
        command: MoveCommand,
    },
    Create {
        #[serde(default)]
        draft: TaskDraft,
        status: TaskStatus,
    },
    Edit {
        id: TaskId,
        update: TaskDetailsUpdate,
    },
    MoveToColumn {
        id: TaskId,
        status: TaskStatus,
    },
    Delete {
        id: TaskId,
    },
}

type ReplaySession<C> = BoardSession<Box<dyn TaskIdGenerator>, C>;

fn main() -> Result<(), ReplayError> {
    if let Err(err) = telemetry::init_tracing() {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "warning: failed to initialize logging: {err}").map_err(ReplayError::Output)?;
    }

    let config = parse_args(env::args().skip(1))?
        .map(|path| read_config(&path))
        .transpose()?
        .unwrap_or_default();
    let mut session = BoardSession::from_config(&config, Arc::new(DefaultClock));

    let applied = replay(&mut session, io::stdin().lock())?;
    info!(applied, tasks = session.board().len(), "replay finished");

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &session.board_view())
        .map_err(|err| ReplayError::Output(err.into()))?;
    writeln!(stdout).map_err(ReplayError::Output)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Utf8PathBuf>, ReplayError> {
    let config_path = args.next().map(Utf8PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(ReplayError::InvalidArgs(format!(
            "unexpected argument '{extra}'; expected at most a config path"
        )));
    }
    Ok(config_path)
}

fn read_config(path: &Utf8Path) -> Result<BoardConfig, ReplayError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ReplayError::InvalidArgs(format!("'{path}' does not name a file")))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(ReplayError::ConfigRead)?;
    let raw = dir.read_to_string(file_name).map_err(ReplayError::ConfigRead)?;
    BoardConfig::from_json(&raw).map_err(ReplayError::ConfigParse)
}

/// Applies every request read from `input`, stopping at the first failure.
///
/// Returns the number of requests applied.
fn replay<C>(session: &mut ReplaySession<C>, input: impl BufRead) -> Result<usize, ReplayError>
where
    C: Clock + Send + Sync,
{
    let mut applied = 0_usize;
    for (offset, line) in input.lines().enumerate() {
        let line_number = offset.saturating_add(1);
        let raw = line.map_err(ReplayError::Input)?;
        if raw.trim().is_empty() {
            continue;
        }
        let request: BoardRequest = serde_json::from_str(&raw).map_err(|source| {
            ReplayError::Request {
                line: line_number,
                source,
            }
        })?;
        apply(session, request).map_err(|source| {
            warn!(line = line_number, error = %source, "request rejected");
            ReplayError::Rejected {
                line: line_number,
                source,
            }
        })?;
        applied = applied.saturating_add(1);
    }
    Ok(applied)
}

fn apply<C>(session: &mut ReplaySession<C>, request: BoardRequest) -> Result<(), BoardSessionError>
where
    C: Clock + Send + Sync,
{
    match request {
        BoardRequest::Move { command } => {
            let outcome = session.apply_move(command)?;
            debug!(?outcome, "move applied");
        }
        BoardRequest::Create { draft, status } => {
            session.create_task(draft, status)?;
        }
        BoardRequest::Edit { id, update } => {
            session.update_details(id, update)?;
        }
        BoardRequest::MoveToColumn { id, status } => {
            session.move_to_column(id, status)?;
        }
        BoardRequest::Delete { id } => {
            session.delete_task(id)?;
        }
    }
    Ok(())
}
