//! Text rendering of the attendance board.

use crate::models::{DashboardCounts, Roster, Seat, SeatStatus};
use crate::utils::colors::{GREY, RESET, color_for_ratio, color_for_status};
use crate::utils::formatting::{bold, pad_center, pad_right, ratio};

/// Columns reserved for a name: four Hangul syllables.
const NAME_WIDTH: usize = 8;

fn render_cell(index: usize, seat: &Seat) -> String {
    let number = format!("{:02}", index + 1);
    if !seat.is_occupied() {
        let blank = pad_right("", NAME_WIDTH + 2);
        return format!("{}{} {}{}", GREY, number, blank, RESET);
    }

    let color = color_for_status(seat.status);
    format!(
        "{} {}{} {}{}",
        number,
        color,
        pad_right(&seat.name, NAME_WIDTH),
        seat.status.marker(),
        RESET
    )
}

/// Visible width of one cell: "NN " + name + " M".
fn cell_width() -> usize {
    2 + 1 + NAME_WIDTH + 2
}

/// Draw the board as `columns` cells per row, followed by the dashboard.
pub fn render_board(roster: &Roster, columns: usize, separator_char: &str) -> String {
    let columns = columns.max(1);
    let line_width = columns * (cell_width() + 3) + 1;
    let separator = separator_char.repeat(line_width);

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');

    for (row_idx, row) in roster.seats().chunks(columns).enumerate() {
        out.push_str("| ");
        for (col_idx, seat) in row.iter().enumerate() {
            let index = row_idx * columns + col_idx;
            out.push_str(&render_cell(index, seat));
            out.push_str(" | ");
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_dashboard(roster.dashboard_counts()));
    out.push('\n');
    out.push_str(&render_legend());
    out.push('\n');
    out
}

pub fn render_dashboard(counts: DashboardCounts) -> String {
    let color = color_for_ratio(counts.present, counts.total);
    format!(
        "👥 {} {}   ✅ {} {}{}{}",
        bold("Total"),
        counts.total,
        bold("Present"),
        color,
        ratio(counts.present, counts.total),
        RESET
    )
}

fn render_legend() -> String {
    SeatStatus::ALL
        .iter()
        .map(|s| {
            format!(
                "{}{}{}",
                color_for_status(*s),
                pad_center(&format!("{} {}", s.marker(), s.label()), 11),
                RESET
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
