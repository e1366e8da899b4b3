/// Available cities: provincial capitals and major cities across
/// Indonesia, alphabetical. City names double as the Aladhan query value.
pub const CITIES: &[&str] = &[
    "Ambon",
    "Balikpapan",
    "Banda Aceh",
    "Bandar Lampung",
    "Bandung",
    "Banjarmasin",
    "Batam",
    "Bekasi",
    "Bengkulu",
    "Bogor",
    "Cirebon",
    "Denpasar",
    "Depok",
    "Gorontalo",
    "Jakarta",
    "Jambi",
    "Jayapura",
    "Kediri",
    "Kendari",
    "Kupang",
    "Madiun",
    "Makassar",
    "Malang",
    "Manado",
    "Manokwari",
    "Mataram",
    "Medan",
    "Padang",
    "Palangkaraya",
    "Palembang",
    "Palu",
    "Pangkal Pinang",
    "Pekanbaru",
    "Pontianak",
    "Probolinggo",
    "Samarinda",
    "Semarang",
    "Serang",
    "Sorong",
    "Surabaya",
    "Surakarta",
    "Tangerang",
    "Tarakan",
    "Tasikmalaya",
    "Tegal",
    "Ternate",
    "Yogyakarta",
];

pub const DEFAULT_CITY: &str = "Jakarta";

/// Membership test, case-insensitive. Returns the canonical spelling.
pub fn find(city: &str) -> Option<&'static str> {
    CITIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(city.trim()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_sorted_and_has_default() {
        let mut sorted = CITIES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, CITIES);
        assert!(CITIES.contains(&DEFAULT_CITY));
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("jakarta"), Some("Jakarta"));
        assert_eq!(find("  BANDA ACEH "), Some("Banda Aceh"));
        assert_eq!(find("Gotham"), None);
    }
}
