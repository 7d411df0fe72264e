//! Wire types exchanged with the scanner endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolQuery {
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symbols {
    pub tickers: Vec<String>,
    pub query: SymbolQuery,
}

/// Request body: the tickers to scan and the ordered list of columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub symbols: Symbols,
    pub columns: Vec<String>,
}

impl ScanRequest {
    pub fn new(tickers: Vec<String>, columns: Vec<String>) -> Self {
        Self {
            symbols: Symbols {
                tickers,
                query: SymbolQuery::default(),
            },
            columns,
        }
    }
}

/// One row of the response. Cells the scanner cannot compute come back as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRow {
    #[serde(rename = "s")]
    pub symbol: String,
    #[serde(rename = "d", default)]
    pub data: Vec<Option<f64>>,
}

impl ScanRow {
    /// The leading run of numeric cells, up to the first `null`.
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map_while(|cell| *cell).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    #[serde(default)]
    pub data: Vec<ScanRow>,
    #[serde(rename = "totalCount", default)]
    pub total_count: usize,
}

/// Candle interval understood by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
}

impl Interval {
    pub const ALL: [Interval; 8] = [
        Interval::OneMinute,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::OneHour,
        Interval::FourHours,
        Interval::OneDay,
        Interval::OneWeek,
        Interval::OneMonth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
            Interval::OneWeek => "1W",
            Interval::OneMonth => "1M",
        }
    }

    /// Suffix appended to every requested column. Daily data is the
    /// scanner's default and carries no suffix.
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Interval::OneMinute => "|1",
            Interval::FiveMinutes => "|5",
            Interval::FifteenMinutes => "|15",
            Interval::OneHour => "|60",
            Interval::FourHours => "|240",
            Interval::OneDay => "",
            Interval::OneWeek => "|1W",
            Interval::OneMonth => "|1M",
        }
    }

    /// Parse an interval, falling back to one day for empty or unknown input.
    pub fn parse_or_default(value: &str) -> Interval {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(
                interval = value,
                "Interval is empty or not valid, defaulting to 1 day"
            );
            Interval::OneDay
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .iter()
            .copied()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| format!("unknown interval: {:?}", s))
    }
}

/// Pivot calculation family, taken from the column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PivotMethod {
    Classic,
    Fibonacci,
    Camarilla,
    Woodie,
    Demark,
}

impl FromStr for PivotMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Classic" => Ok(PivotMethod::Classic),
            "Fibonacci" => Ok(PivotMethod::Fibonacci),
            "Camarilla" => Ok(PivotMethod::Camarilla),
            "Woodie" => Ok(PivotMethod::Woodie),
            "Demark" => Ok(PivotMethod::Demark),
            other => Err(format!("unknown pivot method: {}", other)),
        }
    }
}

/// Monthly pivot level, e.g. Classic S1. `value` is `None` when the
/// scanner returned `null` for that column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotPoint {
    pub method: PivotMethod,
    pub level: String,
    pub value: Option<f64>,
}
