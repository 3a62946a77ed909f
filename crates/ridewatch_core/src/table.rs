use crate::{RideRecord, COLUMN_HEADERS};

const SEPARATOR: &str = " | ";

/// Render rides as a plain-text table with a header row.
///
/// Column widths count chars, so currency symbols such as `₹` take one cell.
pub fn render_table(rides: &[RideRecord]) -> String {
    let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
    for ride in rides {
        for (width, value) in widths.iter_mut().zip(ride.columns()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, COLUMN_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(rule.join("-+-").trim_end());
    out.push('\n');
    for ride in rides {
        push_row(&mut out, ride.columns(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: [&str; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    out.push_str(line.trim_end());
    out.push('\n');
}
