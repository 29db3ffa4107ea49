//! Run summary table printed after a successful run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use seqmeta_core::RunSummary;
use seqmeta_model::FileOutcome;

pub fn print_summary(summary: &RunSummary) {
    println!("Scanned: {}", summary.scanned_dir.display());
    match &summary.output_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: none (no qualifying files)"),
    }
    if summary.outcomes.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Keys"),
    ]);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for outcome in &summary.outcomes {
        match outcome {
            FileOutcome::Processed {
                filename,
                entry_count,
            } => {
                table.add_row(vec![
                    Cell::new(filename),
                    Cell::new("processed").fg(Color::Green),
                    Cell::new(entry_count),
                ]);
            }
            FileOutcome::Skipped { filename, reason } => {
                table.add_row(vec![
                    Cell::new(filename),
                    Cell::new(format!("skipped: {}", reason.describe())).fg(Color::Yellow),
                    Cell::new("-"),
                ]);
            }
        }
    }
    println!("{table}");
    println!(
        "{} processed, {} skipped",
        summary.processed_count(),
        summary.skipped_count()
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
