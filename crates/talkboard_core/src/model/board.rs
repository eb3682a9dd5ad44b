//! Board registry and selection state machine.
//!
//! # Responsibility
//! - Own the ordered collection of categories and the active selection.
//! - Drive the menu/item navigation contract for callers.
//!
//! # Invariants
//! - Category identifiers are unique; insertion order is file order.
//! - `active`, when set, should name a registered category; every operation
//!   tolerates a stale identifier instead of panicking.

use crate::model::category::Category;
use crate::model::ordered_map::OrderedMap;
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Navigation and mutation failures surfaced to board callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board holds no categories at all.
    NoCategories,
    /// The selected category is already active.
    AlreadyActive(String),
    /// An item path cannot be resolved without an active category.
    NoActiveCategory,
    /// The active category does not contain the requested item.
    ItemNotFound {
        category: String,
        image_loc: String,
    },
    /// The active identifier no longer names a registered category.
    ActiveCategoryMissing(String),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCategories => write!(f, "no categories are available"),
            Self::AlreadyActive(id) => write!(f, "category is already selected: {id}"),
            Self::NoActiveCategory => write!(f, "no category is currently selected"),
            Self::ItemNotFound {
                category,
                image_loc,
            } => write!(f, "image not found in category {category}: {image_loc}"),
            Self::ActiveCategoryMissing(id) => {
                write!(f, "active category is not registered: {id}")
            }
        }
    }
}

impl Error for BoardError {}

/// Policy for re-selecting the category that is already active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReselectPolicy {
    /// Treat re-selection as a caller error (`AlreadyActive`).
    #[default]
    Reject,
    /// Treat re-selection as a no-op.
    Ignore,
}

/// Two-level mapping of categories to items, with one category active at a
/// time.
///
/// With no active category the board is a menu of category identifiers; with
/// one active it exposes that category's items. All enumeration follows
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: OrderedMap<String, Category>,
    active: Option<String>,
    #[serde(default)]
    reselect_policy: ReselectPolicy,
}

impl Board {
    /// Creates an empty board with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty board with an explicit re-selection policy.
    pub fn with_policy(reselect_policy: ReselectPolicy) -> Self {
        Self {
            reselect_policy,
            ..Self::default()
        }
    }

    /// Ensures a category with the given identifier exists, creating an
    /// empty unlabeled one if new. Does not change the active selection.
    ///
    /// Returns whether the category was created by this call.
    pub fn create_category(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.categories.contains_key(id.as_str()) {
            return false;
        }
        self.categories.insert(id.clone(), Category::new(id));
        true
    }

    /// Ensures a category exists and establishes or overwrites its display
    /// label. The decoder's primitive: the latest label declaration wins.
    pub fn insert_category(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        self.create_category(id.clone());
        if let Some(category) = self.categories.get_mut(id.as_str()) {
            category.set_label(label);
        }
    }

    /// Adds one item to the active category.
    ///
    /// # Errors
    /// - `NoActiveCategory` when nothing is active.
    /// - `ActiveCategoryMissing` when the active identifier is stale.
    pub fn add_item_to_active(
        &mut self,
        image_loc: impl Into<String>,
        caption: impl Into<String>,
    ) -> BoardResult<()> {
        let active = match self.active.as_deref() {
            Some(value) => value.to_string(),
            None => return Err(BoardError::NoActiveCategory),
        };
        match self.categories.get_mut(active.as_str()) {
            Some(category) => {
                category.add_item(image_loc, caption);
                Ok(())
            }
            None => Err(BoardError::ActiveCategoryMissing(active)),
        }
    }

    /// Combined add-or-create operation.
    ///
    /// With no active category this is a category-create in disguise:
    /// `image_loc` becomes a new category identifier (created if absent) and
    /// the active selection, and `caption` is discarded. Otherwise it behaves
    /// like [`Board::add_item_to_active`]. The dual purpose is easy to
    /// misread; prefer [`Board::create_category`] and
    /// [`Board::add_item_to_active`] in new code.
    pub fn add_item(
        &mut self,
        image_loc: impl Into<String>,
        caption: impl Into<String>,
    ) -> BoardResult<()> {
        if self.active.is_none() {
            let id = image_loc.into();
            self.create_category(id.clone());
            self.active = Some(id);
            return Ok(());
        }
        self.add_item_to_active(image_loc, caption)
    }

    /// Display label of the active category.
    ///
    /// `None` when nothing is active or the active identifier is stale.
    pub fn active_label(&self) -> Option<&str> {
        let active = self.active.as_deref()?;
        self.categories.get(active).map(Category::label)
    }

    /// Identifier of the active category, if any.
    pub fn active_category(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Menu or item view, depending on the active selection.
    ///
    /// With no active category: all top-level category identifiers. With one
    /// active: its image locations. A stale active identifier yields an
    /// empty vec rather than an error.
    pub fn image_locs(&self) -> Vec<String> {
        match self.active.as_deref() {
            None => self.top_level_categories(),
            Some(active) => match self.categories.get(active) {
                Some(category) => category.image_locs(),
                None => Vec::new(),
            },
        }
    }

    /// All category identifiers regardless of active state.
    pub fn top_level_categories(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// Clears the active selection, returning the board to menu mode.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Resolves one selection path.
    ///
    /// A registered category identifier becomes the active category and
    /// yields an empty caption; any other path is resolved as an item of the
    /// active category and yields its caption.
    ///
    /// # Errors
    /// - `NoCategories` when the board is empty.
    /// - `AlreadyActive` when re-selecting the active category under
    ///   [`ReselectPolicy::Reject`].
    /// - `NoActiveCategory` for an item path with nothing active.
    /// - `ItemNotFound` when the active category lacks the item.
    /// - `ActiveCategoryMissing` when the active identifier is stale.
    pub fn select(&mut self, path: &str) -> BoardResult<String> {
        if self.categories.is_empty() {
            return Err(BoardError::NoCategories);
        }

        if self.categories.contains_key(path) {
            if self.active.as_deref() == Some(path) {
                return match self.reselect_policy {
                    ReselectPolicy::Reject => Err(BoardError::AlreadyActive(path.to_string())),
                    ReselectPolicy::Ignore => Ok(String::new()),
                };
            }
            self.active = Some(path.to_string());
            return Ok(String::new());
        }

        let active = match self.active.as_deref() {
            Some(value) => value,
            None => return Err(BoardError::NoActiveCategory),
        };
        let category = self
            .categories
            .get(active)
            .ok_or_else(|| BoardError::ActiveCategoryMissing(active.to_string()))?;
        match category.caption(path) {
            Some(caption) => Ok(caption.to_string()),
            None => Err(BoardError::ItemNotFound {
                category: active.to_string(),
                image_loc: path.to_string(),
            }),
        }
    }

    /// Whether the active category holds the given image location.
    ///
    /// `false` with nothing active; a stale active identifier also yields
    /// `false`, with a diagnostic, instead of failing.
    pub fn has_image(&self, image_loc: &str) -> bool {
        match self.active.as_deref() {
            None => false,
            Some(active) => match self.categories.get(active) {
                Some(category) => category.has_image(image_loc),
                None => {
                    warn!(
                        "event=board_has_image module=board status=stale_active category={active}"
                    );
                    false
                }
            },
        }
    }

    /// Whether the identifier names a registered category, independent of
    /// the active state.
    pub fn is_category(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    /// One category by identifier.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Mutable access to one category by identifier.
    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.get_mut(id)
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn reselect_policy(&self) -> ReselectPolicy {
        self.reselect_policy
    }

    pub fn set_reselect_policy(&mut self, reselect_policy: ReselectPolicy) {
        self.reselect_policy = reselect_policy;
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
