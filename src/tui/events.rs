use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CEvent, KeyEvent};

use crate::api::ApiError;
use crate::auth::AuthChange;
use crate::models::{PrayerData, Session, Surah, SurahDetail};

/// Everything the UI thread reacts to, funneled through one channel:
/// key presses, countdown ticks, fetch results, auth transitions.
pub enum Event {
    Key(KeyEvent),
    /// One-second countdown tick. Emitted only while a schedule is
    /// loaded — idle really means no timer exists.
    Tick,
    /// Result of a schedule fetch. Responses whose generation is no
    /// longer current are stale and get dropped.
    Schedule {
        generation: u64,
        result: Result<PrayerData, ApiError>,
    },
    Surahs(Result<Vec<Surah>, ApiError>),
    SurahDetail {
        number: u32,
        result: Result<SurahDetail, ApiError>,
    },
    /// Outcome of a sign-in worker.
    SignIn(Result<Session, ApiError>),
    /// Forwarded from the auth-state subscription.
    AuthChanged(AuthChange),
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl EventHandler {
    /// Spawn the key-reader thread. Ticker threads and fetch workers
    /// push their events through `sender()` clones.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        let keys_tx = tx.clone();
        thread::spawn(move || loop {
            if event::poll(Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CEvent::Key(key)) => {
                        if keys_tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });

        Self { rx, tx }
    }

    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
