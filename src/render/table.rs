use crate::stats::format_count;
use crate::view::ViewState;
use console::style;

const NAME_WIDTH: usize = 32;
const COUNT_WIDTH: usize = 14;

/// Render the ranked country table.
///
/// Rows are taken from `state.table`, which is already ranked by case count
/// descending. `rows` limits the output; `0` shows every country.
pub fn render(state: &ViewState, rows: usize) -> String {
    let mut out = String::new();
    out.push_str(&style("Live Cases by Country").bold().to_string());
    out.push('\n');

    let shown: Vec<_> = if rows == 0 {
        state.table.iter().collect()
    } else {
        state.table.iter().take(rows).collect()
    };

    if shown.is_empty() {
        out.push_str("  (no country data)\n");
        return out;
    }

    for (i, country) in shown.iter().enumerate() {
        let name = super::truncate(&country.name, NAME_WIDTH);
        let cases = format_count(country.counts.cases);
        out.push_str(&format!(
            "  {:>3}. {:<NAME_WIDTH$} {:>COUNT_WIDTH$}\n",
            i + 1,
            name,
            cases,
        ));
    }

    let hidden = state.table.len().saturating_sub(shown.len());
    if hidden > 0 {
        out.push_str(&format!("  \u{2026} and {hidden} more\n"));
    }

    out
}
