use std::collections::BTreeSet;

/// One contiguous run of ayat that a juz takes from a surah, in the
/// surah's own 1-based numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JuzMapping {
    pub juz_number: u8,
    pub surah_name: &'static str,
    pub ayah_start: u32,
    pub ayah_end: u32,
}

impl JuzMapping {
    pub fn ayah_count(&self) -> u32 {
        self.ayah_end - self.ayah_start + 1
    }
}

const fn row(juz_number: u8, surah_name: &'static str, ayah_start: u32, ayah_end: u32) -> JuzMapping {
    JuzMapping {
        juz_number,
        surah_name,
        ayah_start,
        ayah_end,
    }
}

/// Madani-mushaf juz boundaries over the Kufan surah lengths (6236 ayat).
/// Ordered by juz, then by position within the juz.
pub const JUZ_TABLE: &[JuzMapping] = &[
    // Juz 1
    row(1, "Al-Fatihah", 1, 7),
    row(1, "Al-Baqarah", 1, 141),
    // Juz 2
    row(2, "Al-Baqarah", 142, 252),
    // Juz 3
    row(3, "Al-Baqarah", 253, 286),
    row(3, "Ali 'Imran", 1, 92),
    // Juz 4
    row(4, "Ali 'Imran", 93, 200),
    row(4, "An-Nisa'", 1, 23),
    // Juz 5
    row(5, "An-Nisa'", 24, 147),
    // Juz 6
    row(6, "An-Nisa'", 148, 176),
    row(6, "Al-Ma'idah", 1, 81),
    // Juz 7
    row(7, "Al-Ma'idah", 82, 120),
    row(7, "Al-An'am", 1, 110),
    // Juz 8
    row(8, "Al-An'am", 111, 165),
    row(8, "Al-A'raf", 1, 87),
    // Juz 9
    row(9, "Al-A'raf", 88, 206),
    row(9, "Al-Anfal", 1, 40),
    // Juz 10
    row(10, "Al-Anfal", 41, 75),
    row(10, "At-Taubah", 1, 92),
    // Juz 11
    row(11, "At-Taubah", 93, 129),
    row(11, "Yunus", 1, 109),
    row(11, "Hud", 1, 5),
    // Juz 12
    row(12, "Hud", 6, 123),
    row(12, "Yusuf", 1, 52),
    // Juz 13
    row(13, "Yusuf", 53, 111),
    row(13, "Ar-Ra'd", 1, 43),
    row(13, "Ibrahim", 1, 52),
    // Juz 14
    row(14, "Al-Hijr", 1, 99),
    row(14, "An-Nahl", 1, 128),
    // Juz 15
    row(15, "Al-Isra'", 1, 111),
    row(15, "Al-Kahf", 1, 74),
    // Juz 16
    row(16, "Al-Kahf", 75, 110),
    row(16, "Maryam", 1, 98),
    row(16, "Taha", 1, 135),
    // Juz 17
    row(17, "Al-Anbiya'", 1, 112),
    row(17, "Al-Hajj", 1, 78),
    // Juz 18
    row(18, "Al-Mu'minun", 1, 118),
    row(18, "An-Nur", 1, 64),
    row(18, "Al-Furqan", 1, 20),
    // Juz 19
    row(19, "Al-Furqan", 21, 77),
    row(19, "Ash-Shu'ara'", 1, 227),
    row(19, "An-Naml", 1, 55),
    // Juz 20
    row(20, "An-Naml", 56, 93),
    row(20, "Al-Qasas", 1, 88),
    row(20, "Al-'Ankabut", 1, 45),
    // Juz 21
    row(21, "Al-'Ankabut", 46, 69),
    row(21, "Ar-Rum", 1, 60),
    row(21, "Luqman", 1, 34),
    row(21, "As-Sajdah", 1, 30),
    row(21, "Al-Ahzab", 1, 30),
    // Juz 22
    row(22, "Al-Ahzab", 31, 73),
    row(22, "Saba'", 1, 54),
    row(22, "Fatir", 1, 45),
    row(22, "Ya-Sin", 1, 27),
    // Juz 23
    row(23, "Ya-Sin", 28, 83),
    row(23, "As-Saffat", 1, 182),
    row(23, "Sad", 1, 88),
    row(23, "Az-Zumar", 1, 31),
    // Juz 24
    row(24, "Az-Zumar", 32, 75),
    row(24, "Ghafir", 1, 85),
    row(24, "Fussilat", 1, 46),
    // Juz 25
    row(25, "Fussilat", 47, 54),
    row(25, "Ash-Shura", 1, 53),
    row(25, "Az-Zukhruf", 1, 89),
    row(25, "Ad-Dukhan", 1, 59),
    row(25, "Al-Jathiyah", 1, 37),
    // Juz 26
    row(26, "Al-Ahqaf", 1, 35),
    row(26, "Muhammad", 1, 38),
    row(26, "Al-Fath", 1, 29),
    row(26, "Al-Hujurat", 1, 18),
    row(26, "Qaf", 1, 45),
    row(26, "Adh-Dhariyat", 1, 30),
    // Juz 27
    row(27, "Adh-Dhariyat", 31, 60),
    row(27, "At-Tur", 1, 49),
    row(27, "An-Najm", 1, 62),
    row(27, "Al-Qamar", 1, 55),
    row(27, "Ar-Rahman", 1, 78),
    row(27, "Al-Waqi'ah", 1, 96),
    row(27, "Al-Hadid", 1, 29),
    // Juz 28
    row(28, "Al-Mujadilah", 1, 22),
    row(28, "Al-Hashr", 1, 24),
    row(28, "Al-Mumtahanah", 1, 13),
    row(28, "As-Saff", 1, 14),
    row(28, "Al-Jumu'ah", 1, 11),
    row(28, "Al-Munafiqun", 1, 11),
    row(28, "At-Taghabun", 1, 18),
    row(28, "At-Talaq", 1, 12),
    row(28, "At-Tahrim", 1, 12),
    // Juz 29
    row(29, "Al-Mulk", 1, 30),
    row(29, "Al-Qalam", 1, 52),
    row(29, "Al-Haqqah", 1, 52),
    row(29, "Al-Ma'arij", 1, 44),
    row(29, "Nuh", 1, 28),
    row(29, "Al-Jinn", 1, 28),
    row(29, "Al-Muzzammil", 1, 20),
    row(29, "Al-Muddaththir", 1, 56),
    row(29, "Al-Qiyamah", 1, 40),
    row(29, "Al-Insan", 1, 31),
    row(29, "Al-Mursalat", 1, 50),
    // Juz 30
    row(30, "An-Naba'", 1, 40),
    row(30, "An-Nazi'at", 1, 46),
    row(30, "'Abasa", 1, 42),
    row(30, "At-Takwir", 1, 29),
    row(30, "Al-Infitar", 1, 19),
    row(30, "Al-Mutaffifin", 1, 36),
    row(30, "Al-Inshiqaq", 1, 25),
    row(30, "Al-Buruj", 1, 22),
    row(30, "At-Tariq", 1, 17),
    row(30, "Al-A'la", 1, 19),
    row(30, "Al-Ghashiyah", 1, 26),
    row(30, "Al-Fajr", 1, 30),
    row(30, "Al-Balad", 1, 20),
    row(30, "Ash-Shams", 1, 15),
    row(30, "Al-Lail", 1, 21),
    row(30, "Ad-Duha", 1, 11),
    row(30, "Ash-Sharh", 1, 8),
    row(30, "At-Tin", 1, 8),
    row(30, "Al-'Alaq", 1, 19),
    row(30, "Al-Qadr", 1, 5),
    row(30, "Al-Bayyinah", 1, 8),
    row(30, "Az-Zalzalah", 1, 8),
    row(30, "Al-'Adiyat", 1, 11),
    row(30, "Al-Qari'ah", 1, 11),
    row(30, "At-Takathur", 1, 8),
    row(30, "Al-'Asr", 1, 3),
    row(30, "Al-Humazah", 1, 9),
    row(30, "Al-Fil", 1, 5),
    row(30, "Quraish", 1, 4),
    row(30, "Al-Ma'un", 1, 7),
    row(30, "Al-Kauthar", 1, 3),
    row(30, "Al-Kafirun", 1, 6),
    row(30, "An-Nasr", 1, 3),
    row(30, "Al-Masad", 1, 5),
    row(30, "Al-Ikhlas", 1, 4),
    row(30, "Al-Falaq", 1, 5),
    row(30, "An-Nas", 1, 6),
];

/// Read-only view over the compiled-in juz table. Built once at startup and
/// shared by reference; lookups never fail, unknown keys yield empty/zero.
pub struct QuranTable {
    rows: &'static [JuzMapping],
}

impl QuranTable {
    pub fn new() -> Self {
        Self { rows: JUZ_TABLE }
    }

    /// All runs belonging to `surah_name`, in ascending juz order.
    pub fn lookup_by_surah(&self, surah_name: &str) -> Vec<&'static JuzMapping> {
        self.rows
            .iter()
            .filter(|m| m.surah_name == surah_name)
            .collect()
    }

    /// All runs of one juz, in mushaf order. Empty outside 1..=30.
    pub fn lookup_by_juz(&self, juz_number: u8) -> Vec<&'static JuzMapping> {
        self.rows
            .iter()
            .filter(|m| m.juz_number == juz_number)
            .collect()
    }

    /// Full length of a surah in its local numbering; 0 for unknown names.
    pub fn total_ayah_count_of_surah(&self, surah_name: &str) -> u32 {
        self.rows
            .iter()
            .filter(|m| m.surah_name == surah_name)
            .map(|m| m.ayah_end)
            .max()
            .unwrap_or(0)
    }

    pub fn total_ayah_count_of_juz(&self, juz_number: u8) -> u32 {
        self.rows
            .iter()
            .filter(|m| m.juz_number == juz_number)
            .map(|m| m.ayah_count())
            .sum()
    }

    pub fn all_juz_numbers(&self) -> Vec<u8> {
        let set: BTreeSet<u8> = self.rows.iter().map(|m| m.juz_number).collect();
        set.into_iter().collect()
    }

    /// Surah names in mushaf order, each once.
    pub fn all_surah_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for m in self.rows {
            if !names.contains(&m.surah_name) {
                names.push(m.surah_name);
            }
        }
        names
    }
}

impl Default for QuranTable {
    fn default() -> Self {
        Self::new()
    }
}
