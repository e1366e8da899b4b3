pub mod prayer;
pub mod quran;
pub mod user;

pub use prayer::{DateInfo, PrayerData, PrayerName, PrayerTimes};
pub use quran::{Ayah, Surah, SurahDetail};
pub use user::{Session, User};
