/// Qibla bearing for a city that is not in the table.
pub const DEFAULT_BEARING: u16 = 295;

/// Qibla direction per city, in degrees clockwise from North.
const BEARINGS: &[(&str, u16)] = &[
    // Sumatera
    ("Banda Aceh", 292),
    ("Medan", 294),
    ("Padang", 295),
    ("Pekanbaru", 294),
    ("Jambi", 294),
    ("Palembang", 295),
    ("Bengkulu", 295),
    ("Bandar Lampung", 295),
    ("Batam", 294),
    ("Pangkal Pinang", 295),
    // Jawa
    ("Jakarta", 295),
    ("Bogor", 295),
    ("Depok", 295),
    ("Tangerang", 295),
    ("Bekasi", 295),
    ("Serang", 295),
    ("Bandung", 294),
    ("Cirebon", 294),
    ("Tasikmalaya", 294),
    ("Semarang", 293),
    ("Surakarta", 293),
    ("Tegal", 294),
    ("Yogyakarta", 293),
    ("Surabaya", 292),
    ("Malang", 292),
    ("Kediri", 292),
    ("Madiun", 293),
    ("Probolinggo", 291),
    // Kalimantan
    ("Pontianak", 291),
    ("Palangkaraya", 290),
    ("Banjarmasin", 290),
    ("Balikpapan", 288),
    ("Samarinda", 288),
    ("Tarakan", 286),
    // Sulawesi
    ("Makassar", 286),
    ("Manado", 282),
    ("Palu", 285),
    ("Kendari", 285),
    ("Gorontalo", 283),
    // Bali & Nusa Tenggara
    ("Denpasar", 287),
    ("Mataram", 286),
    ("Kupang", 281),
    // Maluku & Papua
    ("Ambon", 280),
    ("Ternate", 280),
    ("Jayapura", 274),
    ("Manokwari", 276),
    ("Sorong", 278),
];

/// Bearing for a city. Unknown cities fall back to the default, never
/// an error.
pub fn bearing_for(city: &str) -> u16 {
    BEARINGS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, deg)| *deg)
        .unwrap_or(DEFAULT_BEARING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cities_have_bearings() {
        assert_eq!(bearing_for("Jakarta"), 295);
        assert_eq!(bearing_for("Jayapura"), 274);
    }

    #[test]
    fn unknown_city_uses_default() {
        assert_eq!(bearing_for("Atlantis"), DEFAULT_BEARING);
    }

    #[test]
    fn every_listed_city_is_covered() {
        for city in crate::data::cities::CITIES {
            assert!(
                BEARINGS.iter().any(|(name, _)| name == city),
                "no qibla bearing for {}",
                city
            );
        }
    }
}
