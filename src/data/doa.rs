use rand::Rng;

/// A bundled supplication. The list is fixed at build time; the shown
/// entry is replaced in full on refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Doa {
    pub title: &'static str,
    pub arabic: &'static str,
    pub latin: &'static str,
    pub translation: &'static str,
}

pub const DOA_LIST: &[Doa] = &[
    Doa {
        title: "Doa Sebelum Makan",
        arabic: "اَللّٰهُمَّ بَارِكْ لَنَا فِيْمَا رَزَقْتَنَا وَقِنَا عَذَابَ النَّارِ",
        latin: "Allahumma baarik lanaa fiimaa razaqtanaa wa qinaa 'adzaaban naar",
        translation: "Ya Allah, berkahilah rezeki yang Engkau berikan kepada kami, dan peliharalah kami dari siksa api neraka.",
    },
    Doa {
        title: "Doa Sesudah Makan",
        arabic: "اَلْحَمْدُ لِلّٰهِ الَّذِيْ اَطْعَمَنَا وَسَقَانَا وَجَعَلَنَا مِنَ الْمُسْلِمِيْنَ",
        latin: "Alhamdulillahilladzii ath'amanaa wa saqaanaa wa ja'alanaa minal muslimiin",
        translation: "Segala puji bagi Allah yang telah memberi kami makan dan minum serta menjadikan kami termasuk orang-orang muslim.",
    },
    Doa {
        title: "Doa Sebelum Tidur",
        arabic: "بِاسْمِكَ اللّٰهُمَّ اَحْيَا وَبِاسْمِكَ اَمُوْتُ",
        latin: "Bismikallaahumma ahyaa wa bismika amuut",
        translation: "Dengan nama-Mu ya Allah aku hidup dan dengan nama-Mu aku mati.",
    },
    Doa {
        title: "Doa Bangun Tidur",
        arabic: "اَلْحَمْدُ لِلّٰهِ الَّذِيْ اَحْيَانَا بَعْدَ مَا اَمَاتَنَا وَاِلَيْهِ النُّشُوْرُ",
        latin: "Alhamdulillahilladzii ahyaanaa ba'da maa amaatanaa wa ilaihin nusyuur",
        translation: "Segala puji bagi Allah yang menghidupkan kami setelah mematikan kami, dan kepada-Nya kami dibangkitkan.",
    },
    Doa {
        title: "Doa Masuk Masjid",
        arabic: "اَللّٰهُمَّ افْتَحْ لِيْ اَبْوَابَ رَحْمَتِكَ",
        latin: "Allahummaftah lii abwaaba rahmatik",
        translation: "Ya Allah, bukakanlah untukku pintu-pintu rahmat-Mu.",
    },
    Doa {
        title: "Doa Keluar Masjid",
        arabic: "اَللّٰهُمَّ اِنِّيْ اَسْأَلُكَ مِنْ فَضْلِكَ",
        latin: "Allahumma innii as-aluka min fadhlik",
        translation: "Ya Allah, sesungguhnya aku memohon keutamaan dari-Mu.",
    },
    Doa {
        title: "Doa Keluar Rumah",
        arabic: "بِسْمِ اللهِ تَوَكَّلْتُ عَلَى اللهِ لَا حَوْلَ وَلَا قُوَّةَ اِلَّا بِاللهِ",
        latin: "Bismillaahi tawakkaltu 'alallaah, laa haula wa laa quwwata illaa billaah",
        translation: "Dengan nama Allah aku bertawakal kepada Allah, tiada daya dan kekuatan kecuali dengan pertolongan Allah.",
    },
    Doa {
        title: "Doa Kebaikan Dunia dan Akhirat",
        arabic: "رَبَّنَا اٰتِنَا فِى الدُّنْيَا حَسَنَةً وَّفِى الْاٰخِرَةِ حَسَنَةً وَّقِنَا عَذَابَ النَّارِ",
        latin: "Rabbanaa aatinaa fid dunyaa hasanah wa fil aakhirati hasanah wa qinaa 'adzaaban naar",
        translation: "Ya Tuhan kami, berilah kami kebaikan di dunia dan kebaikan di akhirat, dan peliharalah kami dari siksa api neraka.",
    },
    Doa {
        title: "Doa untuk Kedua Orang Tua",
        arabic: "رَبِّ اغْفِرْ لِيْ وَلِوَالِدَيَّ وَارْحَمْهُمَا كَمَا رَبَّيَانِيْ صَغِيْرًا",
        latin: "Rabbighfir lii wa liwaalidayya warhamhumaa kamaa rabbayaanii shaghiiraa",
        translation: "Ya Tuhanku, ampunilah aku dan kedua orang tuaku, dan sayangilah mereka sebagaimana mereka menyayangiku di waktu kecil.",
    },
    Doa {
        title: "Doa Memohon Ilmu yang Bermanfaat",
        arabic: "رَبِّ زِدْنِيْ عِلْمًا وَارْزُقْنِيْ فَهْمًا",
        latin: "Rabbi zidnii 'ilmaa warzuqnii fahmaa",
        translation: "Ya Tuhanku, tambahkanlah ilmuku dan berilah aku pemahaman yang baik.",
    },
];

/// Uniform-random entry from the bundled list.
pub fn random_doa() -> &'static Doa {
    let idx = rand::thread_rng().gen_range(0..DOA_LIST.len());
    &DOA_LIST[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_doa_comes_from_the_list() {
        for _ in 0..32 {
            let doa = random_doa();
            assert!(DOA_LIST.iter().any(|d| d == doa));
        }
    }
}
