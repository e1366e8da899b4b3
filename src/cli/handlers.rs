use anyhow::{anyhow, Result};
use chrono::Local;

use crate::api::{self, aladhan, quran};
use crate::auth::AuthClient;
use crate::cli::args::{CityCommands, NotifyCommands};
use crate::config::AppConfig;
use crate::data::{cities, doa, qibla};
use crate::prayer_times::resolver;
use crate::store::AppState;
use crate::utils::format::format_time;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

/// Resolve a CLI city override against the bundled list, falling back
/// to the configured city.
fn resolve_city(config: &AppConfig, city_override: Option<&str>) -> Result<String> {
    match city_override {
        Some(raw) => cities::find(raw).map(str::to_owned).ok_or_else(|| {
            anyhow!(
                "Kota '{}' tidak dikenal. Lihat `waktusholat city list`.",
                raw
            )
        }),
        None => Ok(config.prayer.city.clone()),
    }
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, city_override: Option<&str>) -> Result<()> {
    let city = resolve_city(config, city_override)?;
    let client = api::http_client()?;
    let data = aladhan::fetch_prayer_times(&client, &city, &config.prayer.country)?;

    println!();
    println_colored!(GOLD, "  Jadwal Sholat — {}", city);
    println_colored!(DIM, "  {}  ·  {} H", data.date.gregorian, data.date.hijri);
    println!();

    let now = Local::now().naive_local();
    let next = resolver::resolve(&data.times, now);

    for (name, time) in data.times.entries() {
        let time_str = format_time(time);
        let is_past = time <= now.time();
        if is_past {
            println_colored!(DIM, "  {:<10}  {}", name.display_name(), time_str);
        } else {
            println_colored!(BOLD, "  {:<10}  {}", name.display_name(), time_str);
        }
    }

    println!();
    println_colored!(
        AMBER,
        "  Berikutnya: {} pukul {} — {} lagi",
        next.name.display_name(),
        format_time(next.time),
        next.time_remaining
    );
    println!();
    Ok(())
}

// ─── Qibla ───────────────────────────────────────────────────────────────────

pub fn handle_qibla(config: &AppConfig, city_override: Option<&str>) -> Result<()> {
    let city = resolve_city(config, city_override)?;
    let bearing = qibla::bearing_for(&city);

    println!();
    println_colored!(GOLD, "  Arah Kiblat — {}", city);
    println!();
    println_colored!(BOLD, "  {}° dari Utara", bearing);
    println_colored!(
        DIM,
        "  Hadap Utara, lalu putar searah jarum jam {}°",
        bearing
    );
    println!();
    Ok(())
}

// ─── Doa ─────────────────────────────────────────────────────────────────────

pub fn handle_doa() -> Result<()> {
    let doa = doa::random_doa();
    println!();
    println_colored!(GOLD, "  {}", doa.title);
    println!();
    println_colored!(BOLD, "  {}", doa.arabic);
    println!();
    println_colored!(AMBER, "  {}", doa.latin);
    println!();
    println_colored!(DIM, "  \"{}\"", doa.translation);
    println!();
    Ok(())
}

// ─── Quran ───────────────────────────────────────────────────────────────────

pub fn handle_quran(number: Option<u32>) -> Result<()> {
    let client = api::http_client()?;
    match number {
        None => {
            let surahs = quran::fetch_surahs(&client)?;
            println!();
            println_colored!(GOLD, "  Al-Qur'an — {} surah", surahs.len());
            println!();
            for surah in &surahs {
                println!(
                    "  {:>3}  \x1b[1m{:<22}\x1b[0m {}{:<10} {:>3} ayat\x1b[0m   {}",
                    surah.number,
                    surah.english_name,
                    DIM,
                    surah.revelation_label(),
                    surah.number_of_ayahs,
                    surah.name
                );
            }
            println!();
        }
        Some(number) if !(1..=114).contains(&number) => {
            // Mirrors the web app's not-found route, not a hard error.
            println_colored!(RED, "  Surah {} tidak ditemukan (1-114).", number);
        }
        Some(number) => {
            let surah = quran::fetch_surah(&client, number)?;
            println!();
            println_colored!(
                GOLD,
                "  {}. {} — {}",
                surah.number,
                surah.english_name,
                surah.english_name_translation
            );
            println_colored!(
                DIM,
                "  {} ayat · {}",
                surah.number_of_ayahs,
                surah.revelation_label()
            );
            println!();
            for ayah in &surah.ayahs {
                println!("  {:>3}. {}", ayah.number_in_surah, ayah.text);
            }
            println!();
        }
    }
    Ok(())
}

// ─── City ────────────────────────────────────────────────────────────────────

pub fn handle_city(config: &mut AppConfig, action: &CityCommands) -> Result<()> {
    match action {
        CityCommands::List => {
            println!();
            println_colored!(GOLD, "  Kota tersedia");
            println!();
            for city in cities::CITIES {
                if *city == config.prayer.city {
                    println_colored!(GREEN, "  ● {}", city);
                } else {
                    println!("    {}", city);
                }
            }
            println!();
        }
        CityCommands::Set { name } => {
            let city = cities::find(name).ok_or_else(|| {
                anyhow!(
                    "Kota '{}' tidak dikenal. Lihat `waktusholat city list`.",
                    name
                )
            })?;
            config.prayer.city = city.to_string();
            config.save()?;
            println_colored!(GREEN, "  ✓ Kota diatur ke {}", city);
        }
    }
    Ok(())
}

// ─── Notifications ───────────────────────────────────────────────────────────

pub fn handle_notify(action: &NotifyCommands) -> Result<()> {
    let mut state = AppState::load()?;
    match action {
        NotifyCommands::On => {
            state.notifications_enabled = true;
            state.save()?;
            println_colored!(
                GREEN,
                "  ✓ Notifikasi aktif — pengingat 5 menit sebelum waktu sholat"
            );
        }
        NotifyCommands::Off => {
            state.notifications_enabled = false;
            state.save()?;
            println_colored!(DIM, "  ○ Notifikasi dimatikan");
        }
        NotifyCommands::Status => {
            if state.notifications_enabled {
                println_colored!(GREEN, "  Notifikasi: aktif");
            } else {
                println_colored!(DIM, "  Notifikasi: nonaktif");
            }
        }
    }
    Ok(())
}

// ─── Auth ────────────────────────────────────────────────────────────────────

pub fn handle_login(config: &AppConfig, google: bool) -> Result<()> {
    let client = api::http_client()?;
    let auth = AuthClient::new(client, &config.auth.base_url, &config.auth.anon_key);

    if google {
        let url = auth.oauth_authorize_url("google", "https://waktusholat.com/");
        println!();
        println_colored!(GOLD, "  Masuk dengan Google");
        println_colored!(DIM, "  Buka tautan ini di browser:");
        println!("  {}", url);
        println!();
        return Ok(());
    }

    println_colored!(DIM, "  Masuk sebagai akun demo...");
    match auth.sign_in_demo() {
        Ok(session) => {
            let name = session.user.display_name().to_string();
            let mut state = AppState::load()?;
            state.session = Some(session);
            state.save()?;
            println_colored!(GREEN, "  ✓ Login berhasil — selamat datang, {}", name);
        }
        Err(e) => {
            println_colored!(RED, "  ✗ Gagal masuk: {}", e);
        }
    }
    Ok(())
}

pub fn handle_logout(config: &AppConfig) -> Result<()> {
    let mut state = AppState::load()?;
    let Some(session) = state.session.take() else {
        println_colored!(DIM, "  Belum ada sesi.");
        return Ok(());
    };

    // Local sign-out always wins; the provider call is best-effort.
    state.save()?;

    let client = api::http_client()?;
    let auth = AuthClient::new(client, &config.auth.base_url, &config.auth.anon_key);
    if let Err(e) = auth.sign_out(&session.access_token) {
        log::warn!("provider sign-out failed: {}", e);
    }

    println_colored!(GREEN, "  ✓ Anda telah keluar");
    Ok(())
}
