//! Shared page surface over single categories and whole boards.
//!
//! Both levels of the hierarchy can be driven through one object-safe
//! trait: a `Category` is a page of its own items, a `Board` is a page of
//! whatever its navigation state currently exposes.

use crate::model::board::{Board, BoardError, BoardResult};
use crate::model::category::Category;

/// One navigable page of selectable images.
pub trait Page {
    /// Adds or overwrites one image/caption pairing on this page.
    fn add_item(&mut self, image_loc: &str, caption: &str) -> BoardResult<()>;

    /// All selectable image locations, in insertion order.
    fn image_locs(&self) -> Vec<String>;

    /// Display title of the page.
    fn title(&self) -> String;

    /// Resolves one path to the caption to speak; empty for category hops.
    fn select(&mut self, path: &str) -> BoardResult<String>;

    /// Whether this page currently shows the given image.
    fn has_image(&self, image_loc: &str) -> bool;
}

impl Page for Category {
    fn add_item(&mut self, image_loc: &str, caption: &str) -> BoardResult<()> {
        Category::add_item(self, image_loc, caption);
        Ok(())
    }

    fn image_locs(&self) -> Vec<String> {
        Category::image_locs(self)
    }

    fn title(&self) -> String {
        self.name().to_string()
    }

    fn select(&mut self, path: &str) -> BoardResult<String> {
        match self.caption(path) {
            Some(caption) => Ok(caption.to_string()),
            None => Err(BoardError::ItemNotFound {
                category: self.name().to_string(),
                image_loc: path.to_string(),
            }),
        }
    }

    fn has_image(&self, image_loc: &str) -> bool {
        Category::has_image(self, image_loc)
    }
}

impl Page for Board {
    fn add_item(&mut self, image_loc: &str, caption: &str) -> BoardResult<()> {
        Board::add_item(self, image_loc, caption)
    }

    fn image_locs(&self) -> Vec<String> {
        Board::image_locs(self)
    }

    fn title(&self) -> String {
        self.active_label().unwrap_or_default().to_string()
    }

    fn select(&mut self, path: &str) -> BoardResult<String> {
        Board::select(self, path)
    }

    fn has_image(&self, image_loc: &str) -> bool {
        Board::has_image(self, image_loc)
    }
}

#[cfg(test)]
mod tests {
    use super::Page;
    use crate::model::board::{Board, BoardError};
    use crate::model::category::Category;

    #[test]
    fn category_page_resolves_its_own_items() {
        let mut category = Category::with_label("one", "fruit");
        let page: &mut dyn Page = &mut category;

        page.add_item("apple.png", "apple").expect("add never fails");
        assert_eq!(page.title(), "one");
        assert_eq!(page.image_locs(), vec!["apple.png"]);
        assert!(page.has_image("apple.png"));
        assert_eq!(page.select("apple.png").expect("item resolves"), "apple");

        let err = page.select("pear.png").expect_err("unknown item");
        assert!(matches!(err, BoardError::ItemNotFound { .. }));
    }

    #[test]
    fn board_page_walks_the_hierarchy() {
        let mut board = Board::new();
        board.insert_category("one", "fruit");
        if let Some(category) = board.category_mut("one") {
            category.add_item("apple.png", "apple");
        }
        let page: &mut dyn Page = &mut board;

        assert_eq!(page.title(), "");
        assert_eq!(page.image_locs(), vec!["one"]);

        assert_eq!(page.select("one").expect("category hop"), "");
        assert_eq!(page.title(), "fruit");
        assert_eq!(page.select("apple.png").expect("item resolves"), "apple");
    }
}
