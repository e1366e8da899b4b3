use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::NaiveDateTime;

use crate::models::PrayerTimes;
use crate::prayer_times::resolver::{self, NextPrayer};

/// Cancellation handle for a recurring ticker thread. `cancel` (and
/// drop) disconnects the stop channel and joins the thread, so once it
/// returns no further tick can be observed.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a thread invoking `on_tick` every `period` until cancelled.
    pub fn every(period: Duration, mut on_tick: impl FnMut() + Send + 'static) -> Self {
        let (stop_tx, stop_rx): (Sender<()>, Receiver<()>) = mpsc::channel();
        let thread = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => on_tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        }
    }

    pub fn cancel(&mut self) {
        self.stop_tx.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// No schedule loaded; no timer exists.
    Idle,
    /// Schedule present and the one-second interval is live.
    Running,
}

/// Countdown driver: Idle until a schedule loads, Running while the
/// interval is live. Holds at most one live ticker; replacing the
/// schedule cancels the previous ticker before the new one starts.
pub struct Countdown {
    schedule: Option<PrayerTimes>,
    ticker: Option<Ticker>,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            schedule: None,
            ticker: None,
        }
    }

    pub fn state(&self) -> CountdownState {
        if self.ticker.is_some() {
            CountdownState::Running
        } else {
            CountdownState::Idle
        }
    }

    /// Idle → Running (or restart with a fresh schedule).
    pub fn start(
        &mut self,
        times: PrayerTimes,
        period: Duration,
        on_tick: impl FnMut() + Send + 'static,
    ) {
        self.stop();
        self.schedule = Some(times);
        self.ticker = Some(Ticker::every(period, on_tick));
    }

    /// Running → Idle. The ticker is cancelled and joined.
    pub fn stop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.schedule = None;
    }

    /// One tick's work: re-resolve against the fixed schedule and a
    /// fresh reading of the clock. No drift correction.
    pub fn tick(&self, now: NaiveDateTime) -> Option<NextPrayer> {
        self.schedule
            .as_ref()
            .map(|times| resolver::resolve(times, now))
    }

    pub fn schedule(&self) -> Option<&PrayerTimes> {
        self.schedule.as_ref()
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

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

    #[test]
    fn cancelled_ticker_stops_firing() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let mut ticker = Ticker::every(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        std::thread::sleep(Duration::from_millis(60));
        ticker.cancel();
        let frozen = count.load(Ordering::SeqCst);
        assert!(frozen > 0);

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), frozen);
    }

    #[test]
    fn state_transitions() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.state(), CountdownState::Idle);
        assert!(countdown.tick(chrono::Local::now().naive_local()).is_none());

        countdown.start(schedule(), Duration::from_millis(50), || {});
        assert_eq!(countdown.state(), CountdownState::Running);

        countdown.stop();
        assert_eq!(countdown.state(), CountdownState::Idle);
        assert!(countdown.schedule().is_none());
    }

    #[test]
    fn replacing_the_schedule_cancels_the_old_ticker_first() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let mut countdown = Countdown::new();
        let sink = first.clone();
        countdown.start(schedule(), Duration::from_millis(5), move || {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        std::thread::sleep(Duration::from_millis(40));

        // start() joins the previous ticker before spawning, so the
        // first counter is final as soon as it returns.
        let sink = second.clone();
        countdown.start(schedule(), Duration::from_millis(5), move || {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        let frozen = first.load(Ordering::SeqCst);

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(first.load(Ordering::SeqCst), frozen);
        assert!(second.load(Ordering::SeqCst) > 0);
        assert_eq!(countdown.state(), CountdownState::Running);
    }

    #[test]
    fn tick_resolves_against_the_loaded_schedule() {
        let mut countdown = Countdown::new();
        countdown.start(schedule(), Duration::from_secs(1), || {});

        let now = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(17, 50, 0)
            .unwrap();
        let next = countdown.tick(now).unwrap();
        assert_eq!(next.name, crate::models::PrayerName::Maghrib);
        assert_eq!(next.time_remaining, "0:10:00");
    }
}
