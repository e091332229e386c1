//! Plain-text renderings of the dashboard for the headless CLI commands.

use crate::dataset::DataWindow;
use crate::series::Os;
use crate::stats::StatChange;

const YEAR_WIDTH: usize = 4;
const VALUE_WIDTH: usize = 9;

/// Render `window` as an aligned table with two-decimal values.
pub fn format_table(window: &DataWindow<'_>) -> String {
    let mut out = format!("{:<YEAR_WIDTH$}", "Year");
    for os in Os::ALL {
        out.push_str(&format!("{:>VALUE_WIDTH$}", os.label()));
    }
    out.push('\n');

    for (year, values) in (0..window.len()).filter_map(|i| window.row(i)) {
        out.push_str(&format!("{year:<YEAR_WIDTH$}"));
        for v in values {
            out.push_str(&format!("{v:>VALUE_WIDTH$.2}"));
        }
        out.push('\n');
    }
    out
}

/// One line per series: label, latest value and signed change.
pub fn format_stats(changes: &[StatChange]) -> String {
    changes
        .iter()
        .map(|c| {
            format!(
                "{:<8}{:>8}  ({} vs previous year)\n",
                c.os.label(),
                c.value_label(),
                c.change_label()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::range::TimeRange;

    #[test]
    fn table_has_header_and_one_row_per_year() {
        let data = Dataset::builtin();
        let table = format_table(&data.window(TimeRange::Last(2)));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Year  Windows    Linux    macOS");
        assert_eq!(lines[1], "2023    68.84     3.05    28.11");
        assert_eq!(lines[2], "2024    72.87     4.12    23.01");
    }

    #[test]
    fn stats_lines() {
        let changes = Dataset::builtin().latest_changes().unwrap();
        let text = format_stats(&changes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Windows"));
        assert!(lines[0].contains("72.87%"));
        assert!(lines[2].contains("-5.10%"));
    }

    #[test]
    fn stats_line_layout() {
        let changes = Dataset::builtin().latest_changes().unwrap();
        let text = format_stats(&changes[1..2]);
        assert_eq!(text, "Linux      4.12%  (+1.07% vs previous year)\n");
    }

    #[test]
    fn single_year_table_and_empty_stats() {
        let data = Dataset::new(2024, vec![70.0], vec![4.0], vec![20.0]).unwrap();
        assert_eq!(format_table(&data.window(TimeRange::All)).lines().count(), 2);
        assert_eq!(format_stats(&[]), "");
    }
}
