//! Domain data structures for bins, gas readings, and updates.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Message stored on a gas reading written by an update.
pub const UPDATED_MESSAGE: &str = "Updated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier for a bin known to binwatch.
pub struct BinId(pub i64);

impl fmt::Display for BinId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// How full a bin reports itself to be.
pub enum LoadStatus {
    /// Bin is empty.
    Empty,
    /// Bin is full.
    Full,
    /// Any other value reported by a sensor, kept verbatim.
    Other(String),
}

impl LoadStatus {
    /// Wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            LoadStatus::Empty => "empty",
            LoadStatus::Full => "full",
            LoadStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for LoadStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "empty" => LoadStatus::Empty,
            "full" => LoadStatus::Full,
            _ => LoadStatus::Other(raw),
        }
    }
}

impl From<&str> for LoadStatus {
    fn from(raw: &str) -> Self {
        LoadStatus::from(raw.to_owned())
    }
}

impl From<LoadStatus> for String {
    fn from(status: LoadStatus) -> Self {
        match status {
            LoadStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Safety classification of a gas sensor reading.
pub enum GasLevel {
    /// No harmful gases.
    Safe,
    /// Harmful gases other than methane.
    Dangerous,
    /// Methane above the sensor threshold.
    MethaneDetected,
    /// Sensor-specific classification, kept verbatim.
    Other(String),
}

impl GasLevel {
    /// Wire representation of the level.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            GasLevel::Safe => "safe",
            GasLevel::Dangerous => "dangerous",
            GasLevel::MethaneDetected => "methane_detected",
            GasLevel::Other(raw) => raw,
        }
    }
}

impl From<String> for GasLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "safe" => GasLevel::Safe,
            "dangerous" => GasLevel::Dangerous,
            "methane_detected" => GasLevel::MethaneDetected,
            _ => GasLevel::Other(raw),
        }
    }
}

impl From<&str> for GasLevel {
    fn from(raw: &str) -> Self {
        GasLevel::from(raw.to_owned())
    }
}

impl From<GasLevel> for String {
    fn from(level: GasLevel) -> Self {
        match level {
            GasLevel::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for GasLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Latest gas sensor reading of a bin.
pub struct GasStatus {
    /// Safety classification.
    pub status: GasLevel,
    /// Human-readable description of the reading.
    pub message: String,
    /// Concentration as reported, e.g. "150 ppm".
    pub concentration: String,
    /// When the reading was taken.
    pub last_checked: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether a bin's alert latch has been tripped.
pub enum AlertState {
    /// No alert raised.
    Normal,
    /// Alert raised; no rule ever clears it.
    Alerting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A tracked waste bin with its physical and sensor state.
pub struct Bin {
    /// Unique identifier, fixed at seed time.
    pub id: BinId,
    /// Reported fill level.
    pub load_status: LoadStatus,
    /// Latest gas reading.
    pub gas_status: GasStatus,
    /// Weight of the contents in kilograms.
    pub weight: f64,
    /// Alert flag.
    pub alert: bool,
    /// Warning light on the bin.
    pub light_indicator: bool,
    /// Buzzer on the bin.
    pub buzzer: bool,
    /// Last time an alert rule touched the record.
    pub last_updated: NaiveDateTime,
}

impl Bin {
    /// Current state of the alert latch.
    #[must_use]
    pub fn alert_state(&self) -> AlertState {
        if self.alert {
            AlertState::Alerting
        } else {
            AlertState::Normal
        }
    }

    /// Overwrite the sensor-driven fields with an update.
    ///
    /// The gas reading is replaced wholesale and stamped with `now`. Alert
    /// indicators are left alone; see [`crate::alert::recompute`].
    pub fn apply(&mut self, update: BinUpdate, now: NaiveDateTime) {
        self.load_status = update.load_status;
        self.weight = update.weight;
        self.gas_status = GasStatus {
            status: update.gas_status,
            message: UPDATED_MESSAGE.to_owned(),
            concentration: update.concentration,
            last_checked: now,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// New sensor values for a bin.
pub struct BinUpdate {
    /// New fill level.
    pub load_status: LoadStatus,
    /// New weight in kilograms. Not range checked.
    pub weight: f64,
    /// New gas classification.
    pub gas_status: GasLevel,
    /// New gas concentration text.
    pub concentration: String,
}

/// The three bins every registry starts with.
#[must_use]
pub fn seed_bins() -> Vec<Bin> {
    let noon = seed_time(12, 0);
    let ten_past = seed_time(12, 10);

    vec![
        Bin {
            id: BinId(1),
            load_status: LoadStatus::Empty,
            gas_status: GasStatus {
                status: GasLevel::Safe,
                message: "No harmful gases detected".to_owned(),
                concentration: "0 ppm".to_owned(),
                last_checked: noon,
            },
            weight: 0.0,
            alert: false,
            light_indicator: false,
            buzzer: false,
            last_updated: noon,
        },
        Bin {
            id: BinId(2),
            load_status: LoadStatus::Full,
            gas_status: GasStatus {
                status: GasLevel::Safe,
                message: "No harmful gases detected".to_owned(),
                concentration: "0 ppm".to_owned(),
                last_checked: noon,
            },
            weight: 48.0,
            alert: false,
            light_indicator: true,
            buzzer: true,
            last_updated: noon,
        },
        Bin {
            id: BinId(3),
            load_status: LoadStatus::Full,
            gas_status: GasStatus {
                status: GasLevel::MethaneDetected,
                message: "Methane gas detected".to_owned(),
                concentration: "150 ppm".to_owned(),
                last_checked: ten_past,
            },
            weight: 50.0,
            alert: true,
            light_indicator: true,
            buzzer: true,
            last_updated: ten_past,
        },
    ]
}

// Seed readings were all taken on 2024-11-24.
fn seed_time(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 24)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}
