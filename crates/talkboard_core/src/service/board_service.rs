//! Board use-case service.
//!
//! # Responsibility
//! - Reconstitute a board from its repository and expose the navigation
//!   surface to callers.
//! - Keep the load/save failure policy an explicit caller decision.
//!
//! # Invariants
//! - The in-memory board stays authoritative when persistence fails.
//! - Lenient constructors always yield a usable (possibly empty) board.

use crate::model::board::{Board, BoardResult};
use crate::repo::board_file::{BoardFileResult, BoardRepository};
use log::error;

/// Use-case facade pairing one board with its repository.
pub struct BoardService<R: BoardRepository> {
    repo: R,
    board: Board,
}

impl<R: BoardRepository> BoardService<R> {
    /// Eagerly loads the full board from the repository.
    ///
    /// # Errors
    /// - Surfaces the repository's load failure unchanged; the caller
    ///   decides whether it is fatal.
    pub fn load(repo: R) -> BoardFileResult<Self> {
        let board = repo.load()?;
        Ok(Self { repo, board })
    }

    /// Best-effort variant of [`BoardService::load`]: a failed load is
    /// logged and degrades to an empty board. Callers opting in must verify
    /// the board before use.
    pub fn load_lenient(repo: R) -> Self {
        let board = match repo.load() {
            Ok(board) => board,
            Err(err) => {
                error!(
                    "event=board_service_load module=board_service status=degraded error={err}"
                );
                Board::new()
            }
        };
        Self { repo, board }
    }

    /// Creates a service over an already-built board, skipping the load.
    pub fn with_board(repo: R, board: Board) -> Self {
        Self { repo, board }
    }

    /// Serializes the current board through the repository.
    pub fn save(&self) -> BoardFileResult<()> {
        self.repo.save(&self.board)
    }

    /// Best-effort variant of [`BoardService::save`]: failure is logged and
    /// reported as `false`; the in-memory board stays authoritative.
    pub fn save_lenient(&self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(err) => {
                error!(
                    "event=board_service_save module=board_service status=degraded error={err}"
                );
                false
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Resolves one selection path. See [`Board::select`].
    pub fn select(&mut self, path: &str) -> BoardResult<String> {
        self.board.select(path)
    }

    /// Returns the board to menu mode.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Compatibility item-add. See [`Board::add_item`].
    pub fn add_item(
        &mut self,
        image_loc: impl Into<String>,
        caption: impl Into<String>,
    ) -> BoardResult<()> {
        self.board.add_item(image_loc, caption)
    }

    /// Ensures a category exists. See [`Board::create_category`].
    pub fn create_category(&mut self, id: impl Into<String>) -> bool {
        self.board.create_category(id)
    }

    /// Adds one item to the active category. See
    /// [`Board::add_item_to_active`].
    pub fn add_item_to_active(
        &mut self,
        image_loc: impl Into<String>,
        caption: impl Into<String>,
    ) -> BoardResult<()> {
        self.board.add_item_to_active(image_loc, caption)
    }

    pub fn active_label(&self) -> Option<&str> {
        self.board.active_label()
    }

    pub fn image_locs(&self) -> Vec<String> {
        self.board.image_locs()
    }

    pub fn top_level_categories(&self) -> Vec<String> {
        self.board.top_level_categories()
    }

    pub fn has_image(&self, image_loc: &str) -> bool {
        self.board.has_image(image_loc)
    }

    pub fn is_category(&self, id: &str) -> bool {
        self.board.is_category(id)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardService;
    use crate::model::board::Board;
    use crate::repo::board_file::{BoardFileError, BoardFileResult, BoardRepository};
    use std::cell::RefCell;
    use std::io::{Error as IoError, ErrorKind};

    struct FailingRepository;

    impl BoardRepository for FailingRepository {
        fn load(&self) -> BoardFileResult<Board> {
            Err(BoardFileError::Io(IoError::new(
                ErrorKind::NotFound,
                "board file missing",
            )))
        }

        fn save(&self, _board: &Board) -> BoardFileResult<()> {
            Err(BoardFileError::Io(IoError::new(
                ErrorKind::PermissionDenied,
                "board file unwritable",
            )))
        }
    }

    struct RecordingRepository {
        stored: RefCell<Option<Board>>,
    }

    impl RecordingRepository {
        fn new(board: Board) -> Self {
            Self {
                stored: RefCell::new(Some(board)),
            }
        }
    }

    impl BoardRepository for RecordingRepository {
        fn load(&self) -> BoardFileResult<Board> {
            match self.stored.borrow().as_ref() {
                Some(board) => Ok(board.clone()),
                None => Err(BoardFileError::Io(IoError::new(
                    ErrorKind::NotFound,
                    "nothing stored",
                ))),
            }
        }

        fn save(&self, board: &Board) -> BoardFileResult<()> {
            *self.stored.borrow_mut() = Some(board.clone());
            Ok(())
        }
    }

    fn fruit_board() -> Board {
        let mut board = Board::new();
        board.insert_category("one", "fruit");
        if let Some(category) = board.category_mut("one") {
            category.add_item("apple.png", "apple");
        }
        board
    }

    #[test]
    fn strict_load_surfaces_repository_failure() {
        let result = BoardService::load(FailingRepository);
        assert!(matches!(result, Err(BoardFileError::Io(_))));
    }

    #[test]
    fn lenient_load_degrades_to_an_empty_usable_board() {
        let mut service = BoardService::load_lenient(FailingRepository);

        assert!(service.board().is_empty());
        service
            .add_item("chores", "ignored")
            .expect("empty board still accepts the category-create path");
        assert!(service.is_category("chores"));
    }

    #[test]
    fn save_lenient_reports_failure_without_touching_the_board() {
        let service = BoardService::with_board(FailingRepository, fruit_board());

        assert!(!service.save_lenient());
        assert!(service.is_category("one"));
        assert!(service.board().category("one").is_some());
    }

    #[test]
    fn load_save_cycle_through_the_repository_seam() {
        let repo = RecordingRepository::new(fruit_board());
        let mut service = BoardService::load(repo).expect("stored board should load");

        service.select("one").expect("category should be selectable");
        service
            .add_item_to_active("pear.png", "pear")
            .expect("active category accepts items");
        assert!(service.save_lenient());

        let reloaded = service.repo.load().expect("stored board should reload");
        let one = reloaded.category("one").expect("category survives");
        assert_eq!(one.image_locs(), vec!["apple.png", "pear.png"]);
    }

    #[test]
    fn delegates_expose_the_navigation_surface() {
        let repo = RecordingRepository::new(fruit_board());
        let mut service = BoardService::load(repo).expect("stored board should load");

        assert_eq!(service.top_level_categories(), vec!["one"]);
        assert_eq!(service.image_locs(), vec!["one"]);
        assert_eq!(service.active_label(), None);

        assert_eq!(service.select("one").expect("category hop"), "");
        assert_eq!(service.active_label(), Some("fruit"));
        assert!(service.has_image("apple.png"));

        service.reset();
        assert_eq!(service.image_locs(), service.top_level_categories());
    }
}
