use chrono::{NaiveDate, NaiveDateTime};
use notify_rust::{Notification, Timeout};

use crate::models::PrayerName;
use crate::prayer_times::resolver::NextPrayer;

/// Minutes before the scheduled time at which the reminder fires.
const LEAD_MINUTES: i64 = 5;

/// Decides, once per countdown tick, whether to raise the pre-prayer
/// reminder. Fires when the floored minute count to the next prayer
/// equals the lead time AND that (date, prayer) occurrence has not
/// fired before — the tick cadence is one second, so without the
/// occurrence marker the same prayer would fire once per tick for the
/// whole minute. The marker keys on the occurrence date, so it resets
/// at the day boundary.
pub struct ReminderGate {
    enabled: bool,
    last_sent: Option<(NaiveDate, PrayerName)>,
}

impl ReminderGate {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_sent: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Some(prayer) at most once per prayer occurrence.
    pub fn check(&mut self, next: &NextPrayer, now: NaiveDateTime) -> Option<PrayerName> {
        if !self.enabled {
            return None;
        }
        if (next.at - now).num_minutes() != LEAD_MINUTES {
            return None;
        }
        let occurrence = (next.at.date(), next.name);
        if self.last_sent == Some(occurrence) {
            return None;
        }
        self.last_sent = Some(occurrence);
        Some(next.name)
    }
}

/// Raise the desktop notification, auto-dismissed after ten seconds.
/// Emission failure is the caller's to surface; it never aborts the
/// tick loop.
pub fn send_desktop_reminder(prayer: PrayerName) -> Result<(), notify_rust::error::Error> {
    Notification::new()
        .summary("Waktu Sholat 🕌")
        .body(&format!(
            "Waktu {} akan segera tiba. Persiapkan diri untuk sholat.",
            prayer.display_name()
        ))
        .appname("waktusholat")
        .icon("appointment-soon")
        .timeout(Timeout::Milliseconds(10_000))
        .show()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prayer_times::resolver::remaining_hms;
    use chrono::{Duration, NaiveTime};

    fn maghrib_at_1800() -> NextPrayer {
        let at = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        NextPrayer {
            name: PrayerName::Maghrib,
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            at,
            time_remaining: String::new(),
        }
    }

    #[test]
    fn fires_exactly_once_across_the_five_minute_window() {
        let next = maghrib_at_1800();
        let mut gate = ReminderGate::new(true);

        // Ticks walk the floored minute count through 6,5,5,...,5,4.
        let mut fired = 0;
        let mut now = next.at - Duration::seconds(6 * 60 + 30);
        while now < next.at - Duration::seconds(4 * 60) {
            if gate.check(&next, now).is_some() {
                fired += 1;
                assert_eq!(remaining_hms(next.at - now), "0:05:59");
            }
            now += Duration::seconds(1);
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn disabled_gate_never_fires() {
        let next = maghrib_at_1800();
        let mut gate = ReminderGate::new(false);
        let now = next.at - Duration::minutes(5);
        assert_eq!(gate.check(&next, now), None);
    }

    #[test]
    fn toggling_does_not_replay_a_consumed_occurrence() {
        let next = maghrib_at_1800();
        let mut gate = ReminderGate::new(true);
        let now = next.at - Duration::seconds(5 * 60 + 30);

        assert_eq!(gate.check(&next, now), Some(PrayerName::Maghrib));
        gate.set_enabled(false);
        gate.set_enabled(true);
        assert_eq!(gate.check(&next, now + Duration::seconds(1)), None);
    }

    #[test]
    fn next_day_occurrence_fires_again() {
        let today = maghrib_at_1800();
        let mut gate = ReminderGate::new(true);
        assert!(gate
            .check(&today, today.at - Duration::seconds(5 * 60 + 30))
            .is_some());

        let mut tomorrow = today.clone();
        tomorrow.at += Duration::days(1);
        assert!(gate
            .check(&tomorrow, tomorrow.at - Duration::seconds(5 * 60 + 30))
            .is_some());
    }
}
