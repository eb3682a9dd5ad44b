//! Board file codec and repository contracts.
//!
//! # Responsibility
//! - Decode the line-oriented board format into a `Board`.
//! - Encode a `Board` back to the exact inverse representation.
//! - Provide the file-backed repository implementation.
//!
//! # Invariants
//! - A category line is `<id> <label>`, split on the first space only.
//! - An item line is `><imageLoc> <caption>` and attaches to the most
//!   recently declared category.
//! - Malformed or orphan lines are skipped and counted, never fatal.
//! - Encoding follows board insertion order, so decode/encode round-trips
//!   are structurally stable.

use crate::model::board::Board;
use crate::model::category::Category;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type BoardFileResult<T> = Result<T, BoardFileError>;

/// Persistence failure for board load/save operations.
#[derive(Debug)]
pub enum BoardFileError {
    Io(std::io::Error),
}

impl Display for BoardFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "board file i/o failed: {err}"),
        }
    }
}

impl Error for BoardFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BoardFileError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Counters describing one decode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Categories registered after the pass.
    pub categories: usize,
    /// Items stored after the pass.
    pub items: usize,
    /// Non-blank lines dropped for not yielding exactly two tokens.
    pub skipped_lines: usize,
    /// Item lines dropped for appearing before any category line.
    pub orphan_items: usize,
}

/// Decodes board text. Infallible: tolerance for malformed input is part of
/// the wire format, and a bad line never corrupts previously decoded state.
pub fn parse_board(input: &str) -> (Board, ParseReport) {
    let mut board = Board::new();
    let mut report = ParseReport::default();
    let mut pending: Option<String> = None;

    for raw_line in input.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('>') {
            let (image_loc, caption) = match split_two_tokens(rest) {
                Some(tokens) => tokens,
                None => {
                    report.skipped_lines += 1;
                    continue;
                }
            };
            let category_id = match pending.as_deref() {
                Some(id) => id,
                None => {
                    report.orphan_items += 1;
                    continue;
                }
            };
            match board.category_mut(category_id) {
                Some(category) => category.add_item(image_loc, caption),
                None => report.skipped_lines += 1,
            }
        } else {
            let (id, label) = match split_two_tokens(line) {
                Some(tokens) => tokens,
                None => {
                    report.skipped_lines += 1;
                    continue;
                }
            };
            board.insert_category(id, label);
            pending = Some(id.to_string());
        }
    }

    report.categories = board.len();
    report.items = board.categories().map(Category::len).sum();
    (board, report)
}

/// Encodes a board to the exact inverse of [`parse_board`]: one `id label`
/// line per category in insertion order, each followed by its
/// `>imageLoc caption` item lines.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for category in board.categories() {
        out.push_str(category.name());
        out.push(' ');
        out.push_str(category.label());
        out.push('\n');
        for (image_loc, caption) in category.items() {
            out.push('>');
            out.push_str(image_loc);
            out.push(' ');
            out.push_str(caption);
            out.push('\n');
        }
    }
    out
}

/// Reads and decodes one board file.
///
/// # Side effects
/// - Emits `board_load` logging events with duration, counts and status.
///
/// # Errors
/// - Returns `BoardFileError::Io` when the file cannot be read; whether that
///   is fatal is the caller's decision.
pub fn load_board(path: impl AsRef<Path>) -> BoardFileResult<Board> {
    let started_at = Instant::now();
    info!("event=board_load module=board_file status=start");

    let input = match fs::read_to_string(path.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            error!(
                "event=board_load module=board_file status=error duration_ms={} error_code=file_unreadable error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    let (board, report) = parse_board(&input);
    if report.skipped_lines > 0 || report.orphan_items > 0 {
        warn!(
            "event=board_load module=board_file status=degraded skipped_lines={} orphan_items={}",
            report.skipped_lines, report.orphan_items
        );
    }
    info!(
        "event=board_load module=board_file status=ok categories={} items={} duration_ms={}",
        report.categories,
        report.items,
        started_at.elapsed().as_millis()
    );
    Ok(board)
}

/// Encodes and writes one board file.
///
/// # Side effects
/// - Emits `board_save` logging events with duration and status.
///
/// # Errors
/// - Returns `BoardFileError::Io` when the file cannot be written; the
///   in-memory board stays authoritative either way.
pub fn save_board(board: &Board, path: impl AsRef<Path>) -> BoardFileResult<()> {
    let started_at = Instant::now();
    info!("event=board_save module=board_file status=start");

    let rendered = render_board(board);
    match fs::write(path.as_ref(), rendered.as_bytes()) {
        Ok(()) => {
            info!(
                "event=board_save module=board_file status=ok categories={} duration_ms={}",
                board.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=board_save module=board_file status=error duration_ms={} error_code=file_unwritable error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

/// Repository interface for board persistence.
pub trait BoardRepository {
    fn load(&self) -> BoardFileResult<Board>;
    fn save(&self, board: &Board) -> BoardFileResult<()>;
}

/// File-backed board repository over the line-oriented format.
pub struct FileBoardRepository {
    path: PathBuf,
}

impl FileBoardRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardRepository for FileBoardRepository {
    fn load(&self) -> BoardFileResult<Board> {
        load_board(&self.path)
    }

    fn save(&self, board: &Board) -> BoardFileResult<()> {
        save_board(board, &self.path)
    }
}

fn split_two_tokens(line: &str) -> Option<(&str, &str)> {
    let (first, second) = line.split_once(' ')?;
    if first.is_empty() {
        return None;
    }
    Some((first, second))
}
