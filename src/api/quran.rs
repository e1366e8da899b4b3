use reqwest::blocking::Client;
use serde::Deserialize;

use crate::api::ApiError;
use crate::models::{Surah, SurahDetail};

const BASE_URL: &str = "https://api.alquran.cloud";

/// Indonesian translation edition used for surah detail.
const EDITION: &str = "id.indonesian";

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// All 114 surah metadata records.
pub fn fetch_surahs(client: &Client) -> Result<Vec<Surah>, ApiError> {
    let response = client.get(format!("{}/v1/surah", BASE_URL)).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    let envelope: Envelope<Vec<Surah>> = response
        .json()
        .map_err(|e| ApiError::shape(format!("surah list: {}", e)))?;
    Ok(envelope.data)
}

/// One surah with its translated ayah texts.
pub fn fetch_surah(client: &Client, number: u32) -> Result<SurahDetail, ApiError> {
    let response = client
        .get(format!("{}/v1/surah/{}/{}", BASE_URL, number, EDITION))
        .send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    let envelope: Envelope<SurahDetail> = response
        .json()
        .map_err(|e| ApiError::shape(format!("surah {}: {}", number, e)))?;
    Ok(envelope.data)
}
