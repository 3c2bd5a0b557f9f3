use crate::view::ViewState;
use console::style;

const MAP_WIDTH: usize = 72;
const MAP_HEIGHT: usize = 22;

/// Render the country markers on a character-grid world map.
///
/// Countries are projected equirectangularly into the current viewport.
/// Marker glyphs scale with the active metric's magnitude relative to the
/// largest visible value, so hotspots stand out the way the original map's
/// circle radii did. Countries with no reported value for the metric draw
/// no marker.
pub fn render(state: &ViewState) -> String {
    let mut grid = vec![vec![' '; MAP_WIDTH]; MAP_HEIGHT];

    // Viewport span halves with each zoom step past the worldwide default.
    let zoom_steps = state.map.zoom.saturating_sub(crate::view::state::WORLDWIDE_ZOOM);
    let long_span = 360.0 / f64::from(1_u32 << zoom_steps);
    let lat_span = long_span / 2.0;

    let max = state
        .map_countries
        .iter()
        .filter_map(|c| c.counts.total(state.metric))
        .max()
        .unwrap_or(0);

    for country in &state.map_countries {
        let Some(value) = country.counts.total(state.metric) else {
            continue;
        };
        let Some((x, y)) = project(
            country.info.lat,
            country.info.long,
            state.map,
            long_span,
            lat_span,
        ) else {
            continue;
        };
        let glyph = marker(value, max);
        // Bigger markers win contested cells.
        if rank_of(glyph) >= rank_of(grid[y][x]) {
            grid[y][x] = glyph;
        }
    }

    let mut out = String::new();
    out.push_str(&style("World Map").bold().to_string());
    out.push('\n');
    out.push_str(&format!("+{}+\n", "-".repeat(MAP_WIDTH)));
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(&format!("|{line}|\n"));
    }
    out.push_str(&format!("+{}+\n", "-".repeat(MAP_WIDTH)));
    out
}

/// Project a coordinate into the viewport grid; `None` when off-screen.
fn project(
    lat: f64,
    long: f64,
    view: crate::view::MapView,
    long_span: f64,
    lat_span: f64,
) -> Option<(usize, usize)> {
    let dx = (long - view.long) / long_span + 0.5;
    let dy = (view.lat - lat) / lat_span + 0.5;
    if !(0.0..1.0).contains(&dx) || !(0.0..1.0).contains(&dy) {
        return None;
    }
    let x = ((dx * MAP_WIDTH as f64) as usize).min(MAP_WIDTH - 1);
    let y = ((dy * MAP_HEIGHT as f64) as usize).min(MAP_HEIGHT - 1);
    Some((x, y))
}

fn marker(value: u64, max: u64) -> char {
    if max == 0 {
        return '\u{00b7}';
    }
    let share = value as f64 / max as f64;
    if share > 0.5 {
        '@'
    } else if share > 0.1 {
        'O'
    } else if share > 0.01 {
        'o'
    } else {
        '\u{00b7}'
    }
}

fn rank_of(glyph: char) -> u8 {
    match glyph {
        '@' => 4,
        'O' => 3,
        'o' => 2,
        '\u{00b7}' => 1,
        _ => 0,
    }
}
