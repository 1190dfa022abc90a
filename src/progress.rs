use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::quran::QuranTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Newly memorized material; the only kind that counts toward progress.
    #[serde(alias = "newMemorization")]
    Ziyadah,
    /// Revision of already-memorized material; informational only.
    #[serde(alias = "review")]
    Murajaah,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorizationEntry {
    pub surah: String,
    pub ayah_start: u32,
    pub ayah_end: u32,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionState {
    NotStarted,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JuzProgress {
    pub juz: u8,
    pub memorized_ayah_count: u32,
    pub total_ayah_count: u32,
    pub percent: u32,
    pub completion_state: CompletionState,
    pub contributing_surahs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahProgress {
    pub surah: String,
    pub memorized_ayah_count: u32,
    pub total_ayah_count: u32,
    pub percent: u32,
    pub related_juz: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahTarget {
    pub surah: String,
    pub required_ayah_count: u32,
    pub total_ayah_count: u32,
    pub percent_of_surah: u32,
    pub related_juz: Vec<u8>,
}

/// Ayat common to two inclusive ranges. Degenerate ranges clamp to 0.
pub fn overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> u32 {
    let lo = i64::from(a_start.max(b_start));
    let hi = i64::from(a_end.min(b_end));
    (hi - lo + 1).max(0) as u32
}

fn percent_of(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(whole)) * 100.0).round() as u32
}

fn completion_state(percent: u32) -> CompletionState {
    if percent >= 100 {
        CompletionState::Complete
    } else if percent > 0 {
        CompletionState::InProgress
    } else {
        CompletionState::NotStarted
    }
}

/// Attribute ziyadah entries to the 30 juz. An entry straddling a juz
/// boundary splits across the runs of its surah, so each ayah lands in the
/// juz that owns it. Repeated entries add up; the contribution notes are
/// deduplicated by text.
pub fn juz_progress(table: &QuranTable, entries: &[MemorizationEntry]) -> Vec<JuzProgress> {
    let mut memorized: BTreeMap<u8, u32> = BTreeMap::new();
    let mut notes: BTreeMap<u8, Vec<String>> = BTreeMap::new();

    for entry in entries {
        if entry.kind != EntryKind::Ziyadah {
            continue;
        }
        for run in table.lookup_by_surah(&entry.surah) {
            let got = overlap(entry.ayah_start, entry.ayah_end, run.ayah_start, run.ayah_end);
            if got == 0 {
                continue;
            }
            *memorized.entry(run.juz_number).or_insert(0) += got;
            let note = format!("{} ({} ayat)", run.surah_name, got);
            let juz_notes = notes.entry(run.juz_number).or_default();
            if !juz_notes.contains(&note) {
                juz_notes.push(note);
            }
        }
    }

    table
        .all_juz_numbers()
        .into_iter()
        .map(|juz| {
            let total = table.total_ayah_count_of_juz(juz);
            let done = memorized.get(&juz).copied().unwrap_or(0);
            let percent = percent_of(done, total);
            JuzProgress {
                juz,
                memorized_ayah_count: done,
                total_ayah_count: total,
                percent,
                completion_state: completion_state(percent),
                contributing_surahs: notes.remove(&juz).unwrap_or_default(),
            }
        })
        .collect()
}

/// Per-surah view of the same entries. Unlike the per-juz sum, this unions
/// individual ayah numbers, so overlapping entries for one surah never
/// count an ayah twice. Surahs absent from the table contribute nothing.
pub fn surah_progress(table: &QuranTable, entries: &[MemorizationEntry]) -> Vec<SurahProgress> {
    let mut memorized: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();

    for entry in entries {
        if entry.kind != EntryKind::Ziyadah {
            continue;
        }
        let total = table.total_ayah_count_of_surah(&entry.surah);
        if total == 0 {
            continue;
        }
        // Clamp to the surah's real range so the union stays bounded.
        let start = entry.ayah_start.max(1);
        let end = entry.ayah_end.min(total);
        let ayat = memorized.entry(entry.surah.clone()).or_default();
        if start <= end {
            ayat.extend(start..=end);
        }
    }

    memorized
        .into_iter()
        .map(|(surah, ayat)| {
            let total = table.total_ayah_count_of_surah(&surah);
            let related_juz: Vec<u8> = table
                .lookup_by_surah(&surah)
                .iter()
                .map(|m| m.juz_number)
                .collect();
            let done = ayat.len() as u32;
            SurahProgress {
                memorized_ayah_count: done,
                total_ayah_count: total,
                percent: percent_of(done, total),
                related_juz,
                surah,
            }
        })
        .collect()
}

/// Expand a set of target juz into the surah portions that cover them.
/// The inverse direction of [`surah_progress`]: which ayat, per surah, a
/// student must memorize to hold exactly these juz.
pub fn juz_to_surah_target(table: &QuranTable, juz_numbers: &[u8]) -> Vec<SurahTarget> {
    let mut required: BTreeMap<&'static str, BTreeSet<u32>> = BTreeMap::new();
    let mut related: BTreeMap<&'static str, BTreeSet<u8>> = BTreeMap::new();

    for &juz in juz_numbers {
        for run in table.lookup_by_juz(juz) {
            required
                .entry(run.surah_name)
                .or_default()
                .extend(run.ayah_start..=run.ayah_end);
            related.entry(run.surah_name).or_default().insert(run.juz_number);
        }
    }

    required
        .into_iter()
        .map(|(surah, ayat)| {
            let total = table.total_ayah_count_of_surah(surah);
            let needed = ayat.len() as u32;
            SurahTarget {
                surah: surah.to_string(),
                required_ayah_count: needed,
                total_ayah_count: total,
                percent_of_surah: percent_of(needed, total),
                related_juz: related
                    .get(surah)
                    .map(|s| s.iter().copied().collect())
                    .unwrap_or_default(),
            }
        })
        .collect()
}
