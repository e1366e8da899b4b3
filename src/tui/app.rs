use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::api::{self, aladhan, quran, ApiError};
use crate::auth::{AuthChange, AuthClient, AuthEvents, AuthSubscription};
use crate::config::AppConfig;
use crate::data::{cities, doa};
use crate::models::{PrayerData, Session, Surah, SurahDetail, User};
use crate::prayer_times::{reminder, Countdown, NextPrayer, ReminderGate};
use crate::store::AppState;
use crate::tui::events::{Event, EventHandler};
use crate::tui::widgets::{
    countdown as countdown_card, date as date_card, doa as doa_card, header, login, prayers,
    qibla as qibla_card, quran as quran_view, settings, statusbar,
};
use crate::tui::{theme, Fetch};

const TOAST_SECS: u64 = 4;

/// The web app's routes, rendered as views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Login,
    Home,
    PrayerTimes,
    Qibla,
    Doa,
    QuranList,
    QuranDetail,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ToastKind {
    Success,
    Error,
    Info,
}

struct Toast {
    text: String,
    kind: ToastKind,
    until: Instant,
}

pub struct App {
    pub view: View,
    pub should_quit: bool,
    config: AppConfig,
    state: AppState,

    http: reqwest::blocking::Client,
    auth: AuthClient,
    auth_events: AuthEvents,
    auth_sub: Option<AuthSubscription>,
    tx: std::sync::mpsc::Sender<Event>,

    // Prayer schedule + countdown
    generation: u64,
    schedule: Fetch<PrayerData>,
    countdown: Countdown,
    next: Option<NextPrayer>,
    reminder: ReminderGate,

    // Quran browsing
    surahs: Fetch<Vec<Surah>>,
    surah_list: ListState,
    surah_detail: Fetch<SurahDetail>,
    detail_number: Option<u32>,
    detail_scroll: u16,

    doa: &'static doa::Doa,

    // Transient UI state
    toast: Option<Toast>,
    signing_in: bool,
    oauth_url: Option<String>,
    show_help: bool,
    city_picker: Option<ListState>,
    surah_input: Option<String>,
    surah_input_error: Option<String>,
}

impl App {
    pub fn new(
        config: AppConfig,
        state: AppState,
        tx: std::sync::mpsc::Sender<Event>,
    ) -> Result<Self> {
        let http = api::http_client()?;
        let auth = AuthClient::new(
            http.clone(),
            config.auth.base_url.clone(),
            config.auth.anon_key.clone(),
        );

        // Auth transitions come back through the event channel, so the
        // UI reacts to provider state the same way it reacts to keys.
        let auth_events = AuthEvents::new();
        let forward = tx.clone();
        let auth_sub = auth_events.subscribe(move |change| {
            let _ = forward.send(Event::AuthChanged(change.clone()));
        });

        let view = if state.session.is_some() {
            View::Home
        } else {
            View::Login
        };
        let reminder = ReminderGate::new(state.notifications_enabled);

        Ok(Self {
            view,
            should_quit: false,
            config,
            state,
            http,
            auth,
            auth_events,
            auth_sub: Some(auth_sub),
            tx,
            generation: 0,
            schedule: Fetch::Idle,
            countdown: Countdown::new(),
            next: None,
            reminder,
            surahs: Fetch::Idle,
            surah_list: ListState::default(),
            surah_detail: Fetch::Idle,
            detail_number: None,
            detail_scroll: 0,
            doa: doa::random_doa(),
            toast: None,
            signing_in: false,
            oauth_url: None,
            show_help: false,
            city_picker: None,
            surah_input: None,
            surah_input_error: None,
        })
    }

    pub fn teardown(&mut self) {
        self.countdown.stop();
        if let Some(sub) = self.auth_sub.take() {
            sub.unsubscribe();
        }
    }

    fn user(&self) -> Option<&User> {
        self.state.session.as_ref().map(|s| &s.user)
    }

    fn show_toast(&mut self, kind: ToastKind, text: impl Into<String>) {
        self.toast = Some(Toast {
            text: text.into(),
            kind,
            until: Instant::now() + Duration::from_secs(TOAST_SECS),
        });
    }

    // ─── Fetch workers ───────────────────────────────────────────────────────

    /// Kick off a schedule fetch for the configured city. Bumping the
    /// generation first makes any in-flight response stale; the old
    /// ticker is cancelled before the view goes back to loading.
    pub fn fetch_schedule(&mut self) {
        self.generation += 1;
        self.countdown.stop();
        self.next = None;
        self.schedule = Fetch::Loading;

        let generation = self.generation;
        let client = self.http.clone();
        let city = self.config.prayer.city.clone();
        let country = self.config.prayer.country.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = aladhan::fetch_prayer_times(&client, &city, &country);
            let _ = tx.send(Event::Schedule { generation, result });
        });
    }

    fn fetch_surahs(&mut self) {
        self.surahs = Fetch::Loading;
        let client = self.http.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(Event::Surahs(quran::fetch_surahs(&client)));
        });
    }

    fn fetch_surah_detail(&mut self, number: u32) {
        self.detail_number = Some(number);
        self.detail_scroll = 0;
        self.surah_detail = Fetch::Loading;
        let client = self.http.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(Event::SurahDetail {
                number,
                result: quran::fetch_surah(&client, number),
            });
        });
    }

    // ─── Event handlers ──────────────────────────────────────────────────────

    pub fn on_schedule(&mut self, generation: u64, result: Result<PrayerData, ApiError>) {
        if generation != self.generation {
            log::debug!(
                "dropping stale schedule response (generation {}, current {})",
                generation,
                self.generation
            );
            return;
        }
        match result {
            Ok(data) => {
                let tx = self.tx.clone();
                self.countdown
                    .start(data.times, Duration::from_secs(1), move || {
                        let _ = tx.send(Event::Tick);
                    });
                self.next = self.countdown.tick(Local::now().naive_local());
                self.schedule = Fetch::Ready(data);
            }
            Err(e) => {
                self.schedule = Fetch::Failed(e.to_string());
                self.show_toast(ToastKind::Error, format!("Gagal memuat jadwal: {}", e));
            }
        }
    }

    pub fn on_tick(&mut self) {
        let now = Local::now().naive_local();
        self.next = self.countdown.tick(now);
        if let Some(next) = &self.next {
            if let Some(prayer) = self.reminder.check(next, now) {
                match reminder::send_desktop_reminder(prayer) {
                    Ok(()) => self.show_toast(
                        ToastKind::Info,
                        format!("Pengingat: waktu {} 5 menit lagi", prayer.display_name()),
                    ),
                    Err(e) => {
                        log::warn!("desktop notification failed: {}", e);
                        self.reminder.set_enabled(false);
                        self.show_toast(
                            ToastKind::Info,
                            "Notifikasi desktop tidak tersedia — pengingat dimatikan",
                        );
                    }
                }
            }
        }
    }

    pub fn on_surahs(&mut self, result: Result<Vec<Surah>, ApiError>) {
        match result {
            Ok(surahs) => {
                if self.surah_list.selected().is_none() && !surahs.is_empty() {
                    self.surah_list.select(Some(0));
                }
                self.surahs = Fetch::Ready(surahs);
            }
            Err(e) => {
                self.surahs = Fetch::Failed(e.to_string());
                self.show_toast(ToastKind::Error, format!("Gagal memuat daftar surah: {}", e));
            }
        }
    }

    pub fn on_surah_detail(&mut self, number: u32, result: Result<SurahDetail, ApiError>) {
        // A newer selection may have superseded this response.
        if self.detail_number != Some(number) {
            return;
        }
        match result {
            Ok(detail) => self.surah_detail = Fetch::Ready(detail),
            Err(e) => {
                self.surah_detail = Fetch::Failed(e.to_string());
                self.show_toast(ToastKind::Error, format!("Gagal memuat surah: {}", e));
            }
        }
    }

    pub fn on_sign_in(&mut self, result: Result<Session, ApiError>) {
        self.signing_in = false;
        match result {
            Ok(session) => {
                let user = session.user.clone();
                self.state.session = Some(session);
                if let Err(e) = self.state.save() {
                    log::warn!("could not persist session: {}", e);
                }
                self.auth_events.emit(&AuthChange::SignedIn(user));
            }
            Err(e) => {
                self.show_toast(ToastKind::Error, format!("Gagal masuk: {}", e));
            }
        }
    }

    pub fn on_auth_changed(&mut self, change: AuthChange) {
        match change {
            AuthChange::SignedIn(_) => {
                self.oauth_url = None;
                self.view = View::Home;
                self.show_toast(
                    ToastKind::Success,
                    "Login berhasil! Selamat datang di WaktuSholat",
                );
                self.fetch_schedule();
            }
            AuthChange::SignedOut => {
                self.state.session = None;
                if let Err(e) = self.state.save() {
                    log::warn!("could not persist sign-out: {}", e);
                }
                self.countdown.stop();
                self.next = None;
                self.schedule = Fetch::Idle;
                self.view = View::Login;
                self.show_toast(ToastKind::Info, "Anda telah keluar");
            }
            AuthChange::TokenRefreshed => log::debug!("auth token refreshed"),
        }
    }

    fn sign_in_demo(&mut self) {
        if self.signing_in {
            return;
        }
        self.signing_in = true;
        let auth = self.auth.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(Event::SignIn(auth.sign_in_demo()));
        });
    }

    fn sign_out(&mut self) {
        if let Some(session) = self.state.session.clone() {
            let auth = self.auth.clone();
            thread::spawn(move || {
                if let Err(e) = auth.sign_out(&session.access_token) {
                    log::warn!("provider sign-out failed: {}", e);
                }
            });
        }
        self.auth_events.emit(&AuthChange::SignedOut);
    }

    fn toggle_notifications(&mut self) {
        let enabled = !self.state.notifications_enabled;
        self.state.notifications_enabled = enabled;
        self.reminder.set_enabled(enabled);
        if let Err(e) = self.state.save() {
            log::warn!("could not persist notification preference: {}", e);
        }
        if enabled {
            self.show_toast(
                ToastKind::Success,
                "Notifikasi aktif — pengingat 5 menit sebelum waktu sholat",
            );
        } else {
            self.show_toast(ToastKind::Info, "Notifikasi dimatikan");
        }
    }

    // ─── Key handling ────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ignore release/repeat events from some terminals.
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }
        if self.city_picker.is_some() {
            self.handle_city_picker_key(key);
            return;
        }
        if self.surah_input.is_some() {
            self.handle_surah_input_key(key);
            return;
        }

        if self.view == View::Login {
            self.handle_login_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.view == View::QuranDetail {
                    self.view = View::QuranList;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('h') => self.view = View::Home,
            KeyCode::Char('t') => self.view = View::PrayerTimes,
            KeyCode::Char('q') => self.view = View::Qibla,
            KeyCode::Char('d') => self.view = View::Doa,
            KeyCode::Char('a') => {
                self.view = View::QuranList;
                if matches!(self.surahs, Fetch::Idle | Fetch::Failed(_)) {
                    self.fetch_surahs();
                }
            }
            KeyCode::Char('s') => self.view = View::Settings,
            KeyCode::Char('c') => self.open_city_picker(),
            KeyCode::Char('r') => self.reload_current_view(),
            _ => self.handle_view_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.sign_in_demo(),
            KeyCode::Char('g') => {
                let url = self
                    .auth
                    .oauth_authorize_url("google", "https://waktusholat.com/");
                self.oauth_url = Some(url);
            }
            _ => {}
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.view {
            View::QuranList => match key.code {
                KeyCode::Up => self.move_surah_selection(-1),
                KeyCode::Down => self.move_surah_selection(1),
                KeyCode::PageUp => self.move_surah_selection(-10),
                KeyCode::PageDown => self.move_surah_selection(10),
                KeyCode::Enter => {
                    let number = self
                        .surah_list
                        .selected()
                        .and_then(|i| self.surahs.ready().and_then(|s| s.get(i)))
                        .map(|surah| surah.number);
                    if let Some(number) = number {
                        self.view = View::QuranDetail;
                        self.fetch_surah_detail(number);
                    }
                }
                KeyCode::Char('g') => {
                    self.surah_input = Some(String::new());
                    self.surah_input_error = None;
                }
                _ => {}
            },
            View::QuranDetail => match key.code {
                KeyCode::Up => self.detail_scroll = self.detail_scroll.saturating_sub(1),
                KeyCode::Down => self.detail_scroll = self.detail_scroll.saturating_add(1),
                KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(10),
                KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(10),
                _ => {}
            },
            View::Settings => match key.code {
                KeyCode::Char('n') => self.toggle_notifications(),
                KeyCode::Char('o') => self.sign_out(),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_city_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.city_picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.city_picker = None,
            KeyCode::Up => {
                let i = picker.selected().unwrap_or(0);
                picker.select(Some(i.saturating_sub(1)));
            }
            KeyCode::Down => {
                let i = picker.selected().unwrap_or(0);
                picker.select(Some((i + 1).min(cities::CITIES.len() - 1)));
            }
            KeyCode::Enter => {
                if let Some(city) = picker.selected().and_then(|i| cities::CITIES.get(i)) {
                    let city = (*city).to_string();
                    self.city_picker = None;
                    if city != self.config.prayer.city {
                        self.config.prayer.city = city;
                        if let Err(e) = self.config.save() {
                            log::warn!("could not persist city selection: {}", e);
                        }
                        self.fetch_schedule();
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_surah_input_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.surah_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.surah_input = None;
                self.surah_input_error = None;
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.surah_input_error = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() && buffer.len() < 3 => {
                buffer.push(c);
                self.surah_input_error = None;
            }
            KeyCode::Enter => match buffer.parse::<u32>() {
                Ok(number) if (1..=114).contains(&number) => {
                    self.surah_input = None;
                    self.surah_input_error = None;
                    self.view = View::QuranDetail;
                    self.fetch_surah_detail(number);
                }
                Ok(number) => {
                    self.surah_input_error = Some(format!("Surah {} tidak ada (1-114)", number));
                }
                Err(_) => {
                    self.surah_input_error = Some("Masukkan nomor surah dulu".to_string());
                }
            },
            _ => {}
        }
    }

    fn open_city_picker(&mut self) {
        let mut picker = ListState::default();
        let current = cities::CITIES
            .iter()
            .position(|c| *c == self.config.prayer.city)
            .unwrap_or(0);
        picker.select(Some(current));
        self.city_picker = Some(picker);
    }

    fn move_surah_selection(&mut self, delta: i64) {
        let Some(surahs) = self.surahs.ready() else {
            return;
        };
        if surahs.is_empty() {
            return;
        }
        let current = self.surah_list.selected().unwrap_or(0) as i64;
        let last = surahs.len() as i64 - 1;
        self.surah_list
            .select(Some((current + delta).clamp(0, last) as usize));
    }

    fn reload_current_view(&mut self) {
        match self.view {
            View::Home | View::PrayerTimes => self.fetch_schedule(),
            View::Doa => self.doa = doa::random_doa(),
            View::QuranList => self.fetch_surahs(),
            View::QuranDetail => {
                if let Some(number) = self.detail_number {
                    self.fetch_surah_detail(number);
                }
            }
            _ => {}
        }
    }

    // ─── Drawing ─────────────────────────────────────────────────────────────

    pub fn draw(&mut self, frame: &mut Frame) {
        if let Some(toast) = &self.toast {
            if Instant::now() >= toast.until {
                self.toast = None;
            }
        }

        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        if self.view == View::Login {
            self.draw_login(frame, area);
        } else {
            self.draw_main(frame, area);
        }

        if self.show_help {
            self.draw_help_overlay(frame);
        }
        if self.city_picker.is_some() {
            self.draw_city_picker(frame);
        }
        if self.surah_input.is_some() {
            self.draw_surah_input(frame);
        }
        if self.toast.is_some() {
            self.draw_toast(frame);
        }
    }

    fn draw_login(&self, frame: &mut Frame, area: Rect) {
        let height = if self.oauth_url.is_some() { 17 } else { 13 };
        let card = centered_rect(area, 64, height);
        login::render(frame, card, self.signing_in, self.oauth_url.as_deref());
    }

    fn draw_main(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, chunks[0], &self.config.prayer.city, self.user());
        statusbar::render(frame, chunks[2], self.hints());

        let body = chunks[1];
        match self.view {
            View::Home => self.draw_home(frame, body),
            View::PrayerTimes => self.draw_prayer_times(frame, body),
            View::Qibla => qibla_card::render(frame, body, &self.config.prayer.city),
            View::Doa => doa_card::render(frame, body, self.doa),
            View::QuranList => {
                quran_view::render_list(frame, body, &self.surahs, &mut self.surah_list)
            }
            View::QuranDetail => {
                quran_view::render_detail(frame, body, &self.surah_detail, self.detail_scroll)
            }
            View::Settings => {
                settings::render(frame, body, self.state.notifications_enabled, self.user())
            }
            View::Login => unreachable!(),
        }
    }

    fn draw_home(&self, frame: &mut Frame, body: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // date
                Constraint::Length(8), // countdown
                Constraint::Min(7),    // prayers + doa
            ])
            .split(body);

        let date = self.schedule.ready().map(|d| &d.date);
        date_card::render(frame, rows[0], date, &self.schedule);
        countdown_card::render(frame, rows[1], self.next.as_ref(), &self.schedule);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);

        let times = self.schedule.ready().map(|d| &d.times);
        let today = Local::now().date_naive();
        prayers::render(frame, columns[0], times, self.next.as_ref(), today);
        doa_card::render(frame, columns[1], self.doa);
    }

    fn draw_prayer_times(&self, frame: &mut Frame, body: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(8),
                Constraint::Min(7),
            ])
            .split(body);

        let date = self.schedule.ready().map(|d| &d.date);
        date_card::render(frame, rows[0], date, &self.schedule);
        countdown_card::render(frame, rows[1], self.next.as_ref(), &self.schedule);

        let times = self.schedule.ready().map(|d| &d.times);
        let today = Local::now().date_naive();
        prayers::render(frame, rows[2], times, self.next.as_ref(), today);
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.view {
            View::QuranList => &[
                ("[↑↓]", "pilih"),
                ("[Enter]", "buka"),
                ("[g]", "ke nomor"),
                ("[r]", "muat ulang"),
                ("[h]", "beranda"),
                ("[Esc]", "keluar"),
            ],
            View::QuranDetail => &[
                ("[↑↓]", "gulir"),
                ("[r]", "muat ulang"),
                ("[Esc]", "kembali"),
            ],
            View::Settings => &[
                ("[n]", "notifikasi"),
                ("[o]", "keluar akun"),
                ("[h]", "beranda"),
                ("[Esc]", "keluar"),
            ],
            _ => &[
                ("[t]", "jadwal"),
                ("[q]", "kiblat"),
                ("[d]", "doa"),
                ("[a]", "qur'an"),
                ("[s]", "pengaturan"),
                ("[c]", "kota"),
                ("[?]", "bantuan"),
                ("[Esc]", "keluar"),
            ],
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let popup = centered_rect(frame.area(), 52, 15);
        frame.render_widget(Clear, popup);

        let rows = [
            ("[h]", "Beranda"),
            ("[t]", "Jadwal sholat"),
            ("[q]", "Arah kiblat"),
            ("[d]", "Doa harian"),
            ("[a]", "Al-Qur'an"),
            ("[s]", "Pengaturan"),
            ("[c]", "Ganti kota"),
            ("[r]", "Muat ulang / doa lain"),
            ("[?]", "Bantuan"),
            ("[Esc]", "Keluar"),
        ];
        let mut lines = vec![
            Line::from(Span::styled(
                "  Navigasi",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in rows {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<7}", key), theme::gold()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Bantuan ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }

    fn draw_city_picker(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let popup = centered_rect(area, 36, area.height.saturating_sub(6).min(24));
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(Span::styled(" Pilih Kota ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::emerald())
            .style(theme::surface());

        let items: Vec<ListItem> = cities::CITIES
            .iter()
            .map(|city| {
                let marker = if *city == self.config.prayer.city {
                    "● "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, theme::emerald()),
                    Span::styled(*city, theme::base()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme::emerald().add_modifier(Modifier::BOLD))
            .highlight_symbol("▸ ");
        if let Some(picker) = self.city_picker.as_mut() {
            frame.render_stateful_widget(list, popup, picker);
        }
    }

    fn draw_surah_input(&self, frame: &mut Frame) {
        let area = frame.area();
        let height = if self.surah_input_error.is_some() { 7 } else { 5 };
        let popup = centered_rect(area, 44, height);
        frame.render_widget(Clear, popup);

        let buffer = self.surah_input.as_deref().unwrap_or("");
        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Nomor surah (1-114): ", theme::dim()),
                Span::styled(
                    buffer.to_string(),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()),
            ]),
            Line::from(Span::styled("  [Enter] buka  ·  [Esc] batal", theme::dim())),
        ];
        if let Some(err) = &self.surah_input_error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let border = if self.surah_input_error.is_some() {
            theme::red()
        } else {
            theme::amber()
        };
        let block = Block::default()
            .title(Span::styled(" Ke Surah ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(theme::surface());
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }

    fn draw_toast(&self, frame: &mut Frame) {
        let Some(toast) = &self.toast else {
            return;
        };
        let area = frame.area();
        let width = (toast.text.chars().count() as u16 + 4).min(area.width.saturating_sub(4));
        let popup = Rect {
            x: area.width.saturating_sub(width + 2),
            y: area.height.saturating_sub(5),
            width,
            height: 3,
        };
        frame.render_widget(Clear, popup);

        let style = match toast.kind {
            ToastKind::Success => theme::emerald(),
            ToastKind::Error => theme::red(),
            ToastKind::Info => theme::amber(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(theme::surface());
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", toast.text),
            style,
        )))
        .block(block);
        frame.render_widget(paragraph, popup);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let state = AppState::load()?;
    let events = EventHandler::new();
    let mut app = App::new(config, state, events.sender())?;
    if app.state.session.is_some() {
        app.fetch_schedule();
    }

    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => app.on_tick(),
            Event::Schedule { generation, result } => app.on_schedule(generation, result),
            Event::Surahs(result) => app.on_surahs(result),
            Event::SurahDetail { number, result } => app.on_surah_detail(number, result),
            Event::SignIn(result) => app.on_sign_in(result),
            Event::AuthChanged(change) => app.on_auth_changed(change),
        }
    }

    ratatui::restore();
    app.teardown();
    Ok(())
}
