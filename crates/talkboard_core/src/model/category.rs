//! Category domain model.
//!
//! # Responsibility
//! - Own one named page of image-to-caption entries.
//! - Keep identifier, display label, and item store in a single entity.
//!
//! # Invariants
//! - `name` is immutable after construction.
//! - Item identifiers are unique; re-adding one overwrites its caption in
//!   place without changing its position.

use crate::model::ordered_map::OrderedMap;
use serde::{Deserialize, Serialize};

/// One named group of selectable items on a communication board.
///
/// Identifier, display label, and item store form a single entity; there is
/// no separate label registry to fall out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    label: String,
    items: OrderedMap<String, String>,
}

impl Category {
    /// Creates an empty category with the given identifier and no label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            items: OrderedMap::new(),
        }
    }

    /// Creates an empty category with identifier and display label.
    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            items: OrderedMap::new(),
        }
    }

    /// Adds one image/caption pairing, overwriting any existing caption for
    /// the same image location. Never fails for valid string inputs.
    pub fn add_item(&mut self, image_loc: impl Into<String>, caption: impl Into<String>) {
        self.items.insert(image_loc.into(), caption.into());
    }

    /// All image locations in insertion order; empty store, empty vec.
    pub fn image_locs(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// Caption for one image location, `None` when absent.
    pub fn caption(&self, image_loc: &str) -> Option<&str> {
        self.items.get(image_loc).map(String::as_str)
    }

    /// Whether the given image location is stored here.
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.contains_key(image_loc)
    }

    /// The category's own identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable display name; empty when none was assigned.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the display name. The file format re-declares labels, so
    /// the latest declaration wins.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Entries as `(image_loc, caption)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|(image_loc, caption)| (image_loc.as_str(), caption.as_str()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
