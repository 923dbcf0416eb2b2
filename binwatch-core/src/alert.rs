//! Threshold rules that trip a bin's alert latch.
//!
//! Two rules are checked independently after every update:
//!
//! - a full bin at or above [`OVERWEIGHT_THRESHOLD_KG`]
//! - a gas reading classified as methane
//!
//! A rule that fires turns the alert, buzzer and light on and stamps
//! `last_updated`. Nothing here turns them off again.

use std::fmt;

use chrono::NaiveDateTime;

use crate::model::{Bin, GasLevel, LoadStatus};

/// Weight at which a full bin raises an alert.
pub const OVERWEIGHT_THRESHOLD_KG: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rule that caused an alert.
pub enum AlertTrigger {
    /// Full bin at or above the weight threshold.
    Overweight,
    /// Methane reported by the gas sensor.
    Methane,
}

impl fmt::Display for AlertTrigger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertTrigger::Overweight => "overweight",
            AlertTrigger::Methane => "methane",
        };
        formatter.write_str(name)
    }
}

/// Rules that fire for the bin in its current state.
#[must_use]
pub fn triggers(bin: &Bin) -> Vec<AlertTrigger> {
    let mut fired = Vec::new();
    if bin.load_status == LoadStatus::Full && bin.weight >= OVERWEIGHT_THRESHOLD_KG {
        fired.push(AlertTrigger::Overweight);
    }
    if bin.gas_status.status == GasLevel::MethaneDetected {
        fired.push(AlertTrigger::Methane);
    }
    fired
}

/// Evaluate the rules and latch the indicators for every rule that fires.
///
/// Returns the rules that fired. When none fire the bin is left untouched.
pub fn recompute(bin: &mut Bin, now: NaiveDateTime) -> Vec<AlertTrigger> {
    let fired = triggers(bin);
    for trigger in &fired {
        latch(bin, now);
        if *trigger == AlertTrigger::Overweight {
            bin.load_status = LoadStatus::Full;
        }
    }
    fired
}

fn latch(bin: &mut Bin, now: NaiveDateTime) {
    bin.alert = true;
    bin.buzzer = true;
    bin.light_indicator = true;
    bin.last_updated = now;
}
