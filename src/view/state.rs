//! Display state for one dashboard frame.
//!
//! A [`ViewState`] is an immutable snapshot of everything on screen. Each
//! successful fetch produces a whole new state through the `with_*`
//! constructors; nothing is patched in place and nothing outlives the frame
//! it was built for.

use crate::api::{CountryStat, DailyCount, History, Metric, Snapshot};
use crate::stats;
use serde::Serialize;

/// Default map framing when no country is selected.
pub const WORLDWIDE_CENTER: (f64, f64) = (34.80746, -40.4796);
pub const WORLDWIDE_ZOOM: u8 = 3;
/// Zoom applied when the map recenters on a selected country.
pub const COUNTRY_ZOOM: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Worldwide,
    Country(String),
}

impl Selection {
    pub fn label(&self) -> &str {
        match self {
            Selection::Worldwide => "Worldwide",
            Selection::Country(code) => code,
        }
    }
}

/// Map viewport: center coordinates plus a zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub lat: f64,
    pub long: f64,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            lat: WORLDWIDE_CENTER.0,
            long: WORLDWIDE_CENTER.1,
            zoom: WORLDWIDE_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub selection: Selection,
    /// Aggregate shown on the summary cards (worldwide or one country).
    pub summary: Snapshot,
    /// Countries ranked by case count for the table.
    pub table: Vec<CountryStat>,
    /// Countries in source order for the map markers.
    pub map_countries: Vec<CountryStat>,
    pub map: MapView,
    pub metric: Metric,
    /// Daily new counts for the graph, oldest first.
    pub history: Vec<DailyCount>,
}

impl ViewState {
    /// Empty worldwide state, the frame shown before any fetch completes.
    pub fn worldwide(metric: Metric) -> Self {
        Self {
            selection: Selection::Worldwide,
            summary: Snapshot::default(),
            table: Vec::new(),
            map_countries: Vec::new(),
            map: MapView::default(),
            metric,
            history: Vec::new(),
        }
    }

    pub fn with_summary(self, summary: Snapshot) -> Self {
        Self { summary, ..self }
    }

    /// Install the per-country records: ranked for the table, source order
    /// for the map.
    pub fn with_countries(self, countries: &[CountryStat]) -> Self {
        Self {
            table: stats::rank(countries),
            map_countries: countries.to_vec(),
            ..self
        }
    }

    pub fn with_history(self, history: &History) -> Self {
        let daily = history.daily(self.metric);
        Self {
            history: daily,
            ..self
        }
    }

    /// Switch to a single-country view, recentering the map on it.
    pub fn select_country(self, code: &str, snapshot: Snapshot) -> Self {
        let map = snapshot
            .info
            .as_ref()
            .map(|info| MapView {
                lat: info.lat,
                long: info.long,
                zoom: COUNTRY_ZOOM,
            })
            .unwrap_or(self.map);
        Self {
            selection: Selection::Country(code.to_string()),
            summary: snapshot,
            map,
            ..self
        }
    }
}

/// Token identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic request counter that lets the dashboard drop stale responses.
///
/// Fetches are never cancelled once in flight. Instead each one carries the
/// token it was issued with, and a completed response is applied only while
/// its token is still the newest — a response that lost the race to a newer
/// request is discarded, so old data can never overwrite fresh data.
#[derive(Debug, Default)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a fetch about to start, invalidating all earlier
    /// tokens.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether a response carrying `token` may still be applied.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CountryInfo, Counts};

    fn stat(name: &str, cases: u64) -> CountryStat {
        CountryStat {
            name: name.to_string(),
            counts: Counts {
                cases: Some(cases),
                ..Counts::default()
            },
            ..CountryStat::default()
        }
    }

    #[test]
    fn test_with_countries_ranks_table_keeps_map_order() {
        let countries = vec![stat("A", 10), stat("B", 99)];
        let state = ViewState::worldwide(Metric::Cases).with_countries(&countries);
        assert_eq!(state.table[0].name, "B");
        assert_eq!(state.map_countries[0].name, "A");
    }

    #[test]
    fn test_select_country_recenters_map() {
        let snapshot = Snapshot {
            country: Some("India".to_string()),
            info: Some(CountryInfo {
                code: Some("IN".to_string()),
                lat: 20.0,
                long: 77.0,
            }),
            ..Snapshot::default()
        };
        let state = ViewState::worldwide(Metric::Cases).select_country("IN", snapshot);
        assert_eq!(state.selection, Selection::Country("IN".to_string()));
        assert_eq!(state.map.zoom, COUNTRY_ZOOM);
        assert!((state.map.lat - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_select_country_without_coordinates_keeps_viewport() {
        let state = ViewState::worldwide(Metric::Cases)
            .select_country("XX", Snapshot::default());
        assert_eq!(state.map.zoom, WORLDWIDE_ZOOM);
    }

    #[test]
    fn test_generation_discards_stale_response() {
        let mut generation = Generation::new();
        let first = generation.issue();
        let second = generation.issue();

        // The older fetch finished after the newer one was issued.
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_generation_latest_wins_regardless_of_arrival_order() {
        let mut generation = Generation::new();
        let a = generation.issue();
        let b = generation.issue();
        let c = generation.issue();

        assert!(generation.is_current(c));
        assert!(!generation.is_current(a));
        assert!(!generation.is_current(b));
    }
}
