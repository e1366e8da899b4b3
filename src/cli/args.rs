use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "waktusholat", version, author, about = "A terminal companion for prayer times, qibla direction, daily duas, and Quran reading")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times and countdown to the next prayer
    Times {
        /// City to query instead of the configured one
        #[arg(long)]
        city: Option<String>,
    },
    /// Show the qibla bearing for a city
    Qibla {
        /// City to look up instead of the configured one
        #[arg(long)]
        city: Option<String>,
    },
    /// Show a random daily supplication
    Doa,
    /// Browse the Quran: list all surahs, or read one
    Quran {
        /// Surah number (1-114); omit to list all surahs
        number: Option<u32>,
    },
    /// City selection
    City {
        #[command(subcommand)]
        action: CityCommands,
    },
    /// Prayer reminder notifications
    Notify {
        #[command(subcommand)]
        action: NotifyCommands,
    },
    /// Sign in (demo account, or print the OAuth link)
    Login {
        /// Print the Google OAuth authorize URL instead of the demo flow
        #[arg(long)]
        google: bool,
    },
    /// Sign out and clear the cached session
    Logout,
}

#[derive(Subcommand, Debug)]
pub enum CityCommands {
    /// List the available cities
    List,
    /// Set the configured city
    Set {
        /// City name (must be in the list)
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotifyCommands {
    /// Enable the 5-minutes-before reminder
    On,
    /// Disable the reminder
    Off,
    /// Show the current setting
    Status,
}
