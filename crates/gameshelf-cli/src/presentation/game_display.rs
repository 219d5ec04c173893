//! Game detail display utilities for CLI output.

use gameshelf_core::{GameDetail, ReferenceData};

use super::tables::format_optional;

/// Format a purchase value with two decimals, or "--" when absent.
pub fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v:.2}"))
}

/// Display a game with its genres, resolving reference IDs to names.
///
/// IDs without a matching reference row are shown as `#<id>`.
pub fn display_game_detail(detail: &GameDetail, refs: &ReferenceData) {
    let console = refs
        .console(detail.console_id)
        .map_or_else(|| format!("#{}", detail.console_id), |c| c.name.clone());
    let developer = refs
        .company(detail.developer_id)
        .map_or_else(|| format!("#{}", detail.developer_id), |c| c.name.clone());
    let publisher = refs
        .company(detail.publisher_id)
        .map_or_else(|| format!("#{}", detail.publisher_id), |c| c.name.clone());

    println!("  ID: {}", detail.id);
    println!("  Name: {}", detail.name);
    println!("  Console: {console}");
    println!("  Developer: {developer}");
    println!("  Publisher: {publisher}");
    println!("  Value: {}", format_value(detail.value));
    println!(
        "  Purchased: {}",
        format_optional(detail.purchase_date.as_ref(), "--")
    );
    println!("  Highscore: {}", format_optional(detail.highscore.as_ref(), "--"));

    let genres = detail.genre_names();
    if genres.is_empty() {
        println!("  Genres: --");
    } else {
        println!("  Genres: {}", genres.join(", "));
    }

    if !detail.image_url.is_empty() {
        println!("  Cover: {}", detail.image_url);
    }
}
