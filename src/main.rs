mod api;
mod auth;
mod cli;
mod config;
mod data;
mod models;
mod prayer_times;
mod store;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use auth::AuthClient;
use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use store::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;
    AppConfig::ensure_data_dir()?;

    match cli.command {
        // Auth commands manage the session themselves
        Some(Commands::Login { google }) => {
            handlers::handle_login(&config, google)?;
        }
        Some(Commands::Logout) => {
            handlers::handle_logout(&config)?;
        }

        // Explicit subcommands — check the session first
        Some(cmd) => {
            ensure_session(&config)?;
            match cmd {
                Commands::Times { city } => {
                    handlers::handle_times(&config, city.as_deref())?;
                }
                Commands::Qibla { city } => {
                    handlers::handle_qibla(&config, city.as_deref())?;
                }
                Commands::Doa => {
                    handlers::handle_doa()?;
                }
                Commands::Quran { number } => {
                    handlers::handle_quran(number)?;
                }
                Commands::City { action } => {
                    handlers::handle_city(&mut config, &action)?;
                }
                Commands::Notify { action } => {
                    handlers::handle_notify(&action)?;
                }
                Commands::Login { .. } | Commands::Logout => unreachable!(),
            }
        }

        // No subcommand → launch TUI (its login view is the gate)
        None => {
            tui::app::run(config)?;
        }
    }

    Ok(())
}

/// Every page of the original app sits behind the login gate; the CLI
/// equivalent is a cached session. When none exists, provision the demo
/// account the way the login screen's fallback does.
fn ensure_session(config: &AppConfig) -> Result<()> {
    let mut state = AppState::load()?;
    if state.session.is_some() {
        return Ok(());
    }

    eprintln!("Belum ada sesi. Masuk sebagai akun demo...");
    let client = api::http_client()?;
    let auth = AuthClient::new(client, &config.auth.base_url, &config.auth.anon_key);
    match auth.sign_in_demo() {
        Ok(session) => {
            state.session = Some(session);
            state.save()?;
            Ok(())
        }
        Err(e) => {
            // Not fatal: the feature set degrades, like the web app's
            // toast + retry affordance.
            log::warn!("demo sign-in failed: {}", e);
            eprintln!("Gagal masuk: {}. Coba `waktusholat login`.", e);
            Ok(())
        }
    }
}
