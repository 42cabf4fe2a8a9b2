//! Plain-text rendering for terminals

use std::fmt::Write;

use super::chart::ChartModel;
use super::table::{TableModel, EMPTY_MESSAGE};

/// Width of the longest chart bar, in cells
pub const BAR_WIDTH: usize = 40;

const FULL_BLOCK: char = '█';
/// Partial blocks, one to seven eighths
const PARTIAL_BLOCKS: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Render the county table with its summary line
pub fn render_table(model: &TableModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<6} {:<20} {:<16} {:>12}", "Code", "Name", "Province", "Area (km²)");
    let _ = writeln!(out, "{}", "-".repeat(57));

    if model.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_MESSAGE);
    } else {
        for row in &model.rows {
            let _ = writeln!(
                out,
                "{:<6} {:<20} {:<16} {:>12}",
                row.code, row.name, row.province, row.area
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", model.summary());
    out
}

/// Render a horizontal bar chart
pub fn render_chart(model: &ChartModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", model.title);
    let _ = writeln!(out);

    if model.is_empty() {
        let _ = writeln!(out, "No data");
        return out;
    }

    let name_width = model
        .bars
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(0);

    for bar in &model.bars {
        let _ = writeln!(
            out,
            "{:>2}. {:<width$} {:<bar_width$} {}",
            bar.rank,
            bar.name,
            bar_cells(bar.ratio, BAR_WIDTH),
            bar.label,
            width = name_width,
            bar_width = BAR_WIDTH,
        );
    }
    out
}

/// Unicode bar of `ratio * width` cells, with eighth-cell resolution
pub fn bar_cells(ratio: f64, width: usize) -> String {
    let eighths = (ratio.clamp(0.0, 1.0) * width as f64 * 8.0).round() as usize;
    let mut bar: String = std::iter::repeat(FULL_BLOCK).take(eighths / 8).collect();
    if eighths % 8 > 0 {
        bar.push(PARTIAL_BLOCKS[eighths % 8 - 1]);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{County, IndicatorPoint};

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(0.0, 10), "");
        assert_eq!(bar_cells(1.0, 4), "████");
        assert_eq!(bar_cells(0.5, 4), "██");
        assert_eq!(bar_cells(0.0625, 4), "▎");
        assert_eq!(bar_cells(2.0, 2), "██");
    }

    #[test]
    fn test_render_table() {
        let counties = vec![County::new(1, "001", "Mombasa").province("Coast").area(212.5)];
        let text = render_table(&TableModel::build(&counties, ""));

        assert!(text.contains("Mombasa"));
        assert!(text.contains("212.5"));
        assert!(text.ends_with("Showing 1 of 1 counties\n"));
    }

    #[test]
    fn test_render_empty_table() {
        let counties = vec![County::new(1, "001", "Mombasa")];
        let text = render_table(&TableModel::build(&counties, "xyz"));
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Showing 0 of 1 counties"));
    }

    #[test]
    fn test_render_chart() {
        let points = vec![
            IndicatorPoint::new("Nairobi", 4397073.0),
            IndicatorPoint::new("Kiambu", 2417735.0),
        ];
        let text = render_chart(&ChartModel::from_points("Population (2019)", &points, 10));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Population (2019)");
        assert!(lines[2].starts_with(" 1. Nairobi"));
        assert!(lines[2].ends_with("4,397,073"));
        assert!(lines[3].contains("2,417,735"));
    }
}
