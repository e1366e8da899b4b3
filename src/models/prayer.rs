use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// Canonical order: Fajr, Dhuhr, Asr, Maghrib, Isha.
    pub fn all() -> [PrayerName; 5] {
        [
            PrayerName::Fajr,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    /// Key as it appears in the Aladhan `timings` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Indonesian display name, as shown everywhere in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Subuh",
            PrayerName::Dhuhr => "Dzuhur",
            PrayerName::Asr => "Ashar",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isya",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" | "subuh" => Ok(PrayerName::Fajr),
            "dhuhr" | "dzuhur" | "zuhr" => Ok(PrayerName::Dhuhr),
            "asr" | "ashar" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" | "isya" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer name: {}", s)),
        }
    }
}

/// One day's five prayer times, wall-clock, minute precision.
/// Immutable once fetched; replaced wholesale on the next fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub fajr: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl PrayerTimes {
    pub fn get(&self, name: PrayerName) -> NaiveTime {
        match name {
            PrayerName::Fajr => self.fajr,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    /// (name, time) pairs in canonical order.
    pub fn entries(&self) -> [(PrayerName, NaiveTime); 5] {
        PrayerName::all().map(|p| (p, self.get(p)))
    }
}

/// Formatted calendar strings as returned by the API. Display-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DateInfo {
    pub gregorian: String,
    pub hijri: String,
}

#[derive(Debug, Clone)]
pub struct PrayerData {
    pub times: PrayerTimes,
    pub date: DateInfo,
}
