use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use vendor_cli::commands::{Detail, Listing};
use vendor_cli::settings::LoadedConfig;
use vendor_model::{CatalogStats, Locale, Vendor, VendorStatus};

pub fn print_listing(listing: &Listing, locale: Locale) {
    if let Some(term) = &listing.term {
        println!("Search: {term:?} ({} of {} match)", listing.matched, listing.total);
    }
    if listing.rows.is_empty() {
        println!("No vendors found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Brand"),
        header_cell("Owner"),
        header_cell("Phone"),
        header_cell("Address"),
        header_cell("Status"),
    ]);
    apply_listing_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    if locale.is_rtl() {
        for index in [1, 2, 4] {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for vendor in &listing.rows {
        table.add_row(vec![
            dim_cell(&vendor.id),
            Cell::new(vendor.brand(locale)).add_attribute(Attribute::Bold),
            Cell::new(vendor.owner(locale)),
            Cell::new(&vendor.phone_number),
            Cell::new(vendor.address(locale)),
            status_cell(vendor.status),
        ]);
    }
    println!("{table}");
    println!(
        "Page {}: showing {} of {} ({} more)",
        listing.page,
        listing.rows.len(),
        listing.matched,
        listing.remaining
    );
}

pub fn print_detail(detail: &Detail, locale: Locale) {
    let vendor: &Vendor = &detail.vendor;
    let mut table = Table::new();
    apply_detail_table_style(&mut table);
    let text_alignment = if locale.is_rtl() {
        CellAlignment::Right
    } else {
        CellAlignment::Left
    };
    let rows: Vec<(&str, Cell)> = vec![
        ("ID", Cell::new(&vendor.id)),
        ("Username", Cell::new(&vendor.username)),
        (
            "Brand",
            Cell::new(vendor.brand(locale))
                .add_attribute(Attribute::Bold)
                .set_alignment(text_alignment),
        ),
        ("Owner", Cell::new(vendor.owner(locale)).set_alignment(text_alignment)),
        ("Phone", Cell::new(&vendor.phone_number)),
        (
            "Address",
            Cell::new(vendor.address(locale)).set_alignment(text_alignment),
        ),
        (
            "Coordinates",
            Cell::new(format!("{:.4}, {:.4}", vendor.location.lat, vendor.location.lng)),
        ),
        ("Status", status_cell(vendor.status)),
        ("Logo", Cell::new(or_dash(&vendor.logo_url))),
        ("Created", Cell::new(vendor.created_at.to_rfc3339())),
        ("Updated", Cell::new(vendor.updated_at.to_rfc3339())),
    ];
    for (label, value) in rows {
        table.add_row(vec![header_cell(label), value]);
    }
    println!("{table}");
    println!(
        "Selected from {}; map centered on {:.4}, {:.4} at zoom {}",
        detail.origin.as_str(),
        detail.focus.center.lat,
        detail.focus.center.lng,
        detail.focus.zoom
    );
}

pub fn print_stats(stats: &CatalogStats) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Vendors"),
        header_cell("Active"),
        header_cell("Regions"),
    ]);
    apply_detail_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.total).add_attribute(Attribute::Bold),
        count_cell(stats.active, Color::Green),
        count_cell(stats.unique_regions, Color::Blue),
    ]);
    println!("{table}");
}

pub fn print_config(loaded: &LoadedConfig, rendered: &str) {
    println!("# Source: {}", loaded.source);
    print!("{rendered}");
}

fn apply_listing_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(13)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: VendorStatus) -> Cell {
    match status {
        VendorStatus::Active => Cell::new(status).fg(Color::Green),
        VendorStatus::Pending => Cell::new(status).fg(Color::Yellow),
        VendorStatus::Inactive => dim_cell(status),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
