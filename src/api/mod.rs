// Copyright (c) 2025-2026 the covtrack contributors
// SPDX-License-Identifier: Apache-2.0

//! Data model and source layer for the disease.sh statistics API.

pub mod client;
pub mod disease_sh;
pub mod source;

use crate::utils::error::TrackerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Which count series the dashboard is focused on (the map markers, the
/// graph, and the highlighted card all follow it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cases,
    Recovered,
    Deaths,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Recovered => "recovered",
            Metric::Deaths => "deaths",
        }
    }

    /// Card title, matching the dashboard headings.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Cases => "Coronavirus Cases",
            Metric::Recovered => "Recovered",
            Metric::Deaths => "Deaths",
        }
    }
}

impl FromStr for Metric {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cases" => Ok(Metric::Cases),
            "recovered" => Ok(Metric::Recovered),
            "deaths" => Ok(Metric::Deaths),
            other => Err(TrackerError::Validation {
                message: format!("Invalid metric: '{other}'"),
                suggestion: "Valid metrics are: cases, recovered, deaths".to_string(),
            }),
        }
    }
}

/// The six count fields shared by the global and per-country payloads.
///
/// Every field is optional: the source omits counts it has no data for, and
/// an absent count must stay distinguishable from a reported zero all the way
/// to the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    #[serde(default)]
    pub cases: Option<u64>,
    #[serde(default, rename = "todayCases")]
    pub today_cases: Option<u64>,
    #[serde(default)]
    pub deaths: Option<u64>,
    #[serde(default, rename = "todayDeaths")]
    pub today_deaths: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
    #[serde(default, rename = "todayRecovered")]
    pub today_recovered: Option<u64>,
}

impl Counts {
    /// Cumulative total for the given metric.
    pub fn total(&self, metric: Metric) -> Option<u64> {
        match metric {
            Metric::Cases => self.cases,
            Metric::Recovered => self.recovered,
            Metric::Deaths => self.deaths,
        }
    }

    /// Today's delta for the given metric.
    pub fn today(&self, metric: Metric) -> Option<u64> {
        match metric {
            Metric::Cases => self.today_cases,
            Metric::Recovered => self.today_recovered,
            Metric::Deaths => self.today_deaths,
        }
    }
}

/// Geographic lookup data nested under `countryInfo` in the source payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 code; null for aggregates like "Diamond Princess".
    #[serde(default, rename = "iso2")]
    pub code: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
}

/// One country's record as returned by `/countries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryStat {
    #[serde(rename = "country")]
    pub name: String,
    #[serde(default, rename = "countryInfo")]
    pub info: CountryInfo,
    #[serde(flatten)]
    pub counts: Counts,
}

/// Aggregate snapshot, the shape of both `/all` and `/countries/{code}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Country name when this is a single-country snapshot; absent for `/all`.
    #[serde(default, rename = "country")]
    pub country: Option<String>,
    #[serde(default, rename = "countryInfo")]
    pub info: Option<CountryInfo>,
    /// Source-side timestamp of the last update, epoch milliseconds.
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(flatten)]
    pub counts: Counts,
}

/// One point of a daily-delta series derived from [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub value: u64,
}

/// Cumulative worldwide history from `/historical/all`.
///
/// Keys are dates in the source's `m/d/yy` format; values are running totals,
/// not per-day deltas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub cases: HashMap<String, u64>,
    #[serde(default)]
    pub deaths: HashMap<String, u64>,
    #[serde(default)]
    pub recovered: HashMap<String, u64>,
}

impl History {
    /// Convert the cumulative series for `metric` into per-day new counts,
    /// ordered by date.
    ///
    /// The first date only seeds the running total, so the result has one
    /// fewer point than the raw series. Occasional downward corrections in
    /// the source data clamp to zero rather than going negative.
    pub fn daily(&self, metric: Metric) -> Vec<DailyCount> {
        let raw = match metric {
            Metric::Cases => &self.cases,
            Metric::Deaths => &self.deaths,
            Metric::Recovered => &self.recovered,
        };

        let mut dated: Vec<(NaiveDate, u64)> = raw
            .iter()
            .filter_map(|(key, &total)| {
                match NaiveDate::parse_from_str(key, "%m/%d/%y") {
                    Ok(date) => Some((date, total)),
                    Err(err) => {
                        tracing::warn!("Skipping unparseable history date '{key}': {err}");
                        None
                    }
                }
            })
            .collect();
        dated.sort_by_key(|(date, _)| *date);

        dated
            .windows(2)
            .map(|pair| DailyCount {
                date: pair[1].0,
                value: pair[1].1.saturating_sub(pair[0].1),
            })
            .collect()
    }
}
