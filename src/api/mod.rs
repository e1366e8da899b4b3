pub mod aladhan;
pub mod error;
pub mod quran;

pub use error::ApiError;

use std::time::Duration;

/// Shared blocking HTTP client. Fetches run on worker threads so the
/// UI thread never blocks on the network.
pub fn http_client() -> Result<reqwest::blocking::Client, ApiError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(15))
        .user_agent(concat!("waktusholat/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
