use serde::Deserialize;

/// Surah metadata as returned by the alquran.cloud list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u32,
    /// Arabic name.
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    pub revelation_type: String,
}

impl Surah {
    /// Indonesian label for the revelation place.
    pub fn revelation_label(&self) -> &'static str {
        if self.revelation_type == "Meccan" {
            "Makkiyah"
        } else {
            "Madaniyah"
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    pub number_in_surah: u32,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahDetail {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    pub revelation_type: String,
    pub ayahs: Vec<Ayah>,
}

impl SurahDetail {
    pub fn revelation_label(&self) -> &'static str {
        if self.revelation_type == "Meccan" {
            "Makkiyah"
        } else {
            "Madaniyah"
        }
    }
}
