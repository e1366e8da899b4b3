use chrono::NaiveTime;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::api::ApiError;
use crate::models::{DateInfo, PrayerData, PrayerName, PrayerTimes};

const BASE_URL: &str = "https://api.aladhan.com";

/// Calculation method 20 = KEMENAG (Kementerian Agama RI).
const METHOD: &str = "20";

/// Fetch one day's schedule for a city. The response is untyped JSON;
/// only the five timings and the formatted date strings are projected.
pub fn fetch_prayer_times(
    client: &Client,
    city: &str,
    country: &str,
) -> Result<PrayerData, ApiError> {
    let response = client
        .get(format!("{}/v1/timingsByCity", BASE_URL))
        .query(&[("city", city), ("country", country), ("method", METHOD)])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }

    let body: Value = response.json()?;
    let timings = &body["data"]["timings"];

    let time_of = |prayer: PrayerName| -> Result<NaiveTime, ApiError> {
        let raw = timings[prayer.as_str()]
            .as_str()
            .ok_or_else(|| ApiError::shape(format!("timings.{} missing", prayer.as_str())))?;
        // Some Aladhan editions suffix a timezone label, e.g. "04:38 (WIB)".
        let hhmm = raw.split_whitespace().next().unwrap_or(raw);
        NaiveTime::parse_from_str(hhmm, "%H:%M")
            .map_err(|e| ApiError::shape(format!("timings.{} = '{}': {}", prayer.as_str(), raw, e)))
    };

    let times = PrayerTimes {
        fajr: time_of(PrayerName::Fajr)?,
        dhuhr: time_of(PrayerName::Dhuhr)?,
        asr: time_of(PrayerName::Asr)?,
        maghrib: time_of(PrayerName::Maghrib)?,
        isha: time_of(PrayerName::Isha)?,
    };

    let date = &body["data"]["date"];
    let part = |v: &Value, path: &str| -> Result<String, ApiError> {
        v.as_str()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::shape(format!("date.{} missing", path)))
    };

    let gregorian = format!(
        "{} {} {}",
        part(&date["gregorian"]["day"], "gregorian.day")?,
        part(&date["gregorian"]["month"]["en"], "gregorian.month.en")?,
        part(&date["gregorian"]["year"], "gregorian.year")?,
    );
    let hijri = format!(
        "{} {} {}",
        part(&date["hijri"]["day"], "hijri.day")?,
        part(&date["hijri"]["month"]["en"], "hijri.month.en")?,
        part(&date["hijri"]["year"], "hijri.year")?,
    );

    Ok(PrayerData {
        times,
        date: DateInfo { gregorian, hijri },
    })
}
