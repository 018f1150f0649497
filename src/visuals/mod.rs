mod formatters;

use crate::commands::stats::PatchStats;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use formatters::{format_bytes, format_seconds, format_transition};

pub fn print_summary(stats: &PatchStats) {
    println!(
        "✓ Patched {}: {} steps, total duration {}s ({} written) in {}ms",
        stats.plan.display(),
        stats.step_count(),
        stats.total_duration_seconds,
        format_bytes(stats.bytes_written),
        stats.elapsed.as_millis()
    );
}

pub fn schedule_table(stats: &PatchStats) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Step").add_attribute(Attribute::Bold),
            Cell::new("Load").add_attribute(Attribute::Bold),
            Cell::new("Ramp").add_attribute(Attribute::Bold),
            Cell::new("Hold").add_attribute(Attribute::Bold),
            Cell::new("Ends At").add_attribute(Attribute::Bold),
        ]);

    for step in &stats.steps {
        table.add_row(vec![
            Cell::new(step.index + 1).set_alignment(CellAlignment::Right),
            Cell::new(format_transition(step.from, step.to)),
            Cell::new(format_seconds(step.ramp_up_seconds)),
            Cell::new(format_seconds(step.hold_seconds)),
            Cell::new(format_seconds(step.ends_at())),
        ]);
    }

    table
}

pub fn print_detailed(stats: &PatchStats) {
    let mut summary_table = Table::new();
    summary_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Load Profile")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Left),
            Cell::new(""),
        ]);

    summary_table.add_row(vec!["Plan", &stats.plan.display().to_string()]);
    summary_table.add_row(vec!["Steps", &stats.step_count().to_string()]);
    summary_table.add_row(vec!["Peak Load", &stats.peak_load().to_string()]);
    summary_table.add_row(vec![
        "Hold Field",
        &format!(
            "{}s ({}, {} field(s))",
            stats.total_duration_seconds,
            format_seconds(stats.total_duration_seconds),
            stats.hold_fields
        ),
    ]);

    println!("{summary_table}\n");
    println!("{}", schedule_table(stats));
}
