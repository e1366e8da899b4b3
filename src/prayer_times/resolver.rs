use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::models::{PrayerName, PrayerTimes};

/// The upcoming prayer, derived from a fixed schedule and one reading
/// of the clock. Recomputed every tick, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct NextPrayer {
    pub name: PrayerName,
    /// Scheduled wall-clock time, minute precision.
    pub time: NaiveTime,
    /// The concrete instant the prayer falls on (today or tomorrow).
    pub at: NaiveDateTime,
    /// Remaining duration as `H:MM:SS`, floored components.
    pub time_remaining: String,
}

/// First prayer in canonical order whose instant is strictly later
/// than `now`. Times are compared at minute precision; a prayer time
/// equal to `now` counts as already passed. When all five have passed,
/// wraps to Fajr of the following day.
pub fn resolve(times: &PrayerTimes, now: NaiveDateTime) -> NextPrayer {
    let today = now.date();

    for (name, time) in times.entries() {
        let time = minute_precision(time);
        let at = today.and_time(time);
        if at > now {
            return NextPrayer {
                name,
                time,
                at,
                time_remaining: remaining_hms(at - now),
            };
        }
    }

    let tomorrow = today.succ_opt().unwrap_or(today);
    let time = minute_precision(times.fajr);
    let at = tomorrow.and_time(time);
    NextPrayer {
        name: PrayerName::Fajr,
        time,
        at,
        time_remaining: remaining_hms(at - now),
    }
}

fn minute_precision(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// Floor-decompose a duration into `H:MM:SS` — hours unpadded,
/// minutes and seconds two digits. Negative durations clamp to zero.
pub fn remaining_hms(diff: Duration) -> String {
    let total = diff.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn schedule() -> PrayerTimes {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        PrayerTimes {
            fajr: t(4, 30),
            dhuhr: t(12, 0),
            asr: t(15, 15),
            maghrib: t(18, 0),
            isha: t(19, 15),
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn ten_minutes_before_maghrib() {
        let next = resolve(&schedule(), at(17, 50, 0));
        assert_eq!(next.name, PrayerName::Maghrib);
        assert_eq!(next.time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(next.time_remaining, "0:10:00");
    }

    #[test]
    fn before_fajr_returns_fajr_today() {
        let next = resolve(&schedule(), at(3, 0, 0));
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.at, at(4, 30, 0));
        assert_eq!(next.time_remaining, "1:30:00");
    }

    #[test]
    fn after_isha_wraps_to_fajr_tomorrow() {
        let now = at(19, 20, 0);
        let next = resolve(&schedule(), now);
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.at.date(), now.date().succ_opt().unwrap());
        assert_eq!(next.time_remaining, "9:10:00");

        // Longer than the stretch left until midnight.
        let until_midnight = at(23, 59, 59) - now;
        assert!(next.at - now > until_midnight);
    }

    #[test]
    fn exact_prayer_minute_counts_as_passed() {
        let next = resolve(&schedule(), at(12, 0, 0));
        assert_eq!(next.name, PrayerName::Asr);

        // Any second inside the scheduled minute has also passed.
        let next = resolve(&schedule(), at(12, 0, 30));
        assert_eq!(next.name, PrayerName::Asr);
    }

    #[test]
    fn seconds_are_floored_not_rounded() {
        let next = resolve(&schedule(), at(11, 59, 30));
        assert_eq!(next.name, PrayerName::Dhuhr);
        assert_eq!(next.time_remaining, "0:00:30");
    }

    #[test]
    fn idempotent_for_a_fixed_now() {
        let now = at(9, 41, 7);
        assert_eq!(resolve(&schedule(), now), resolve(&schedule(), now));
    }

    #[test]
    fn remaining_hms_formatting() {
        assert_eq!(remaining_hms(Duration::seconds(10 * 3600 + 5 * 60 + 9)), "10:05:09");
        assert_eq!(remaining_hms(Duration::seconds(59)), "0:00:59");
        assert_eq!(remaining_hms(Duration::seconds(-3)), "0:00:00");
    }
}
