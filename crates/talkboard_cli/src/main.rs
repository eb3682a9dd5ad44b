//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `talkboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use talkboard_core::Board;

fn main() {
    let mut board = Board::new();
    board.insert_category("one", "fruit");
    if let Some(category) = board.category_mut("one") {
        category.add_item("apple.png", "apple");
    }

    let mut caption = String::new();
    if board.select("one").is_ok() {
        caption = board.select("apple.png").unwrap_or_default();
    }

    println!("talkboard_core version={}", talkboard_core::core_version());
    println!("talkboard_core categories={}", board.top_level_categories().len());
    println!("talkboard_core caption={caption}");
}
