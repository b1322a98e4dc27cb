use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use plotter_cli::commands::RecentListing;
use plotter_window::WindowGeometry;

pub fn print_recent(listing: &RecentListing) {
    println!(
        "Menu: {} ({} of {})",
        listing.label,
        listing.items.len(),
        listing.max_files
    );
    if listing.items.is_empty() {
        println!("No recent files");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Path")]);
    apply_table_style(&mut table);
    for item in &listing.items {
        table.add_row(vec![
            Cell::new(item.index).set_alignment(CellAlignment::Right),
            Cell::new(&item.label),
        ]);
    }
    println!("{table}");
}

pub fn print_window(geometry: &WindowGeometry) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Value")]);
    apply_table_style(&mut table);
    let rows = [
        ("windowWidth", geometry.width.to_string()),
        ("windowHeight", geometry.height.to_string()),
        ("windowX", geometry.x.to_string()),
        ("windowY", geometry.y.to_string()),
        ("isFullscreen", geometry.fullscreen.to_string()),
    ];
    for (key, value) in rows {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
