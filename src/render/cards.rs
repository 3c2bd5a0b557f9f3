use crate::api::Metric;
use crate::stats::{format_compact, format_stat};
use crate::view::ViewState;
use console::style;

const CARD_WIDTH: usize = 22;
const METRICS: [Metric; 3] = [Metric::Cases, Metric::Recovered, Metric::Deaths];

/// Render the three summary cards (cases, recovered, deaths) side by side.
///
/// Each card shows today's delta in long form and the cumulative total in
/// compact form. The card for the active metric is highlighted.
pub fn render(state: &ViewState) -> String {
    let cards: Vec<[String; 4]> = METRICS.iter().map(|&m| card(state, m)).collect();

    let mut out = String::new();
    for row in 0..4 {
        let line = cards
            .iter()
            .map(|card| card[row].clone())
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn card(state: &ViewState, metric: Metric) -> [String; 4] {
    let today = format_stat(state.summary.counts.today(metric).map(|v| v as f64));
    let total = format_compact(state.summary.counts.total(metric));
    let active = state.metric == metric;

    let title = pad(metric.title(), CARD_WIDTH - 4);
    let title = if active {
        style(title).bold().underlined().to_string()
    } else {
        title
    };

    // Recovered counts read green, the rest red, matching the original
    // dashboard's palette.
    let delta = pad(&format!("+{today} today"), CARD_WIDTH - 4);
    let delta = match metric {
        Metric::Recovered => style(delta).green().to_string(),
        Metric::Cases | Metric::Deaths => style(delta).red().to_string(),
    };

    let marker = if active { "\u{25cf}" } else { " " };
    [
        format!("{marker} {title}"),
        format!("  {delta}"),
        format!("  {}", pad(&format!("{total} total"), CARD_WIDTH - 4)),
        " ".repeat(CARD_WIDTH),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        super::truncate(text, width)
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Counts, Snapshot};

    fn state_with_counts(counts: Counts) -> ViewState {
        ViewState::worldwide(Metric::Cases).with_summary(Snapshot {
            counts,
            ..Snapshot::default()
        })
    }

    #[test]
    fn test_cards_show_formatted_today_and_compact_total() {
        let state = state_with_counts(Counts {
            cases: Some(28_400_000),
            today_cases: Some(12_345),
            ..Counts::default()
        });
        let out = render(&state);
        assert!(out.contains("+12,345 today"));
        assert!(out.contains("28.4m total"));
    }

    #[test]
    fn test_cards_placeholder_for_absent_counts() {
        let out = render(&state_with_counts(Counts::default()));
        assert!(out.contains("+0 today"));
        assert!(out.contains("0 total"));
    }

    #[test]
    fn test_cards_include_all_three_titles() {
        let out = render(&state_with_counts(Counts::default()));
        assert!(out.contains("Coronavirus Cases"));
        assert!(out.contains("Recovered"));
        assert!(out.contains("Deaths"));
    }
}
