use crate::utils::error::TrackerError;
use crate::view::ViewState;

/// Serialize the whole view state as pretty-printed JSON, for piping into
/// other tools.
pub fn render(state: &ViewState) -> Result<String, TrackerError> {
    Ok(serde_json::to_string_pretty(state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CountryStat, Counts, Metric};

    #[test]
    fn test_json_output_carries_ranked_table() {
        let countries = vec![
            CountryStat {
                name: "A".to_string(),
                counts: Counts {
                    cases: Some(1),
                    ..Counts::default()
                },
                ..CountryStat::default()
            },
            CountryStat {
                name: "B".to_string(),
                counts: Counts {
                    cases: Some(2),
                    ..Counts::default()
                },
                ..CountryStat::default()
            },
        ];
        let state = ViewState::worldwide(Metric::Cases).with_countries(&countries);
        let out = render(&state).expect("state should serialize");

        let parsed: serde_json::Value = serde_json::from_str(&out).expect("output is valid JSON");
        let table = parsed["table"].as_array().expect("table is an array");
        assert_eq!(table[0]["country"], "B");
        assert_eq!(table[1]["country"], "A");
    }

    #[test]
    fn test_json_absent_counts_serialize_as_null() {
        let state = ViewState::worldwide(Metric::Cases);
        let out = render(&state).expect("state should serialize");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert!(parsed["summary"]["cases"].is_null());
    }
}
