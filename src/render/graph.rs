use crate::stats::format_count;
use crate::view::ViewState;
use console::style;

const BARS: [char; 8] = [
    '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}',
];

/// Render the history sparkline of daily new counts for the active metric.
pub fn render(state: &ViewState) -> String {
    let title = format!(
        "{} new {}",
        state.selection.label(),
        state.metric.as_str()
    );
    let mut out = String::new();
    out.push_str(&style(title).bold().to_string());
    out.push('\n');

    if state.history.is_empty() {
        out.push_str("  (no history data)\n");
        return out;
    }

    let values = compress(&state.history, super::PANEL_WIDTH);
    let peak = values.iter().copied().max().unwrap_or(0);

    let spark: String = values
        .iter()
        .map(|&v| {
            if peak == 0 {
                BARS[0]
            } else {
                // Map 1..=peak onto the eight bar glyphs; zero stays at the
                // baseline glyph.
                let idx = ((v * 7) + peak / 2) / peak;
                BARS[(idx as usize).min(7)]
            }
        })
        .collect();
    out.push_str("  ");
    out.push_str(&spark);
    out.push('\n');

    let first = state.history.first().map(|p| p.date);
    let last = state.history.last().map(|p| p.date);
    if let (Some(first), Some(last)) = (first, last) {
        out.push_str(&format!(
            "  {first} \u{2192} {last}, peak {}/day\n",
            format_count(Some(peak)),
        ));
    }
    out
}

/// Reduce the series to at most `width` buckets, keeping each bucket's peak
/// so short spikes survive the compression.
fn compress(history: &[crate::api::DailyCount], width: usize) -> Vec<u64> {
    if history.len() <= width {
        return history.iter().map(|p| p.value).collect();
    }
    let bucket = history.len().div_ceil(width);
    history
        .chunks(bucket)
        .map(|chunk| chunk.iter().map(|p| p.value).max().unwrap_or(0))
        .collect()
}
