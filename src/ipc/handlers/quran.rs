use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::quran::JuzMapping;
use serde_json::json;

fn required_str(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

fn required_juz(req: &Request, key: &str) -> Result<u8, serde_json::Value> {
    let Some(n) = req.params.get(key).and_then(|v| v.as_i64()) else {
        return Err(err(
            &req.id,
            "bad_params",
            format!("{} must be an integer juz number", key),
            None,
        ));
    };
    // Integers outside 1..=30 are legal and answer with an empty detail.
    Ok(u8::try_from(n).unwrap_or(0))
}

fn section_json(m: &JuzMapping) -> serde_json::Value {
    json!({
        "surah": m.surah_name,
        "ayahStart": m.ayah_start,
        "ayahEnd": m.ayah_end,
        "ayahCount": m.ayah_count(),
    })
}

fn handle_surahs(state: &AppState, req: &Request) -> serde_json::Value {
    let surahs: Vec<serde_json::Value> = state
        .quran
        .all_surah_names()
        .into_iter()
        .map(|name| {
            let juz: Vec<u8> = state
                .quran
                .lookup_by_surah(name)
                .iter()
                .map(|m| m.juz_number)
                .collect();
            json!({
                "name": name,
                "totalAyah": state.quran.total_ayah_count_of_surah(name),
                "juz": juz,
            })
        })
        .collect();
    ok(&req.id, json!({ "surahs": surahs }))
}

fn handle_juz_list(state: &AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "juz": state.quran.all_juz_numbers() }))
}

fn handle_juz_detail(state: &AppState, req: &Request) -> serde_json::Value {
    let juz = match required_juz(req, "juz") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let sections: Vec<serde_json::Value> = state
        .quran
        .lookup_by_juz(juz)
        .iter()
        .map(|m| section_json(m))
        .collect();
    ok(
        &req.id,
        json!({
            "juz": juz,
            "totalAyah": state.quran.total_ayah_count_of_juz(juz),
            "sections": sections,
        }),
    )
}

fn handle_surah_detail(state: &AppState, req: &Request) -> serde_json::Value {
    let surah = match required_str(req, "surah") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let sections: Vec<serde_json::Value> = state
        .quran
        .lookup_by_surah(&surah)
        .iter()
        .map(|m| section_json(m))
        .collect();
    ok(
        &req.id,
        json!({
            "surah": surah,
            "totalAyah": state.quran.total_ayah_count_of_surah(&surah),
            "sections": sections,
        }),
    )
}

pub fn try_handle(state: &AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "quran.surahs" => Some(handle_surahs(state, req)),
        "quran.juzList" => Some(handle_juz_list(state, req)),
        "quran.juzDetail" => Some(handle_juz_detail(state, req)),
        "quran.surahDetail" => Some(handle_surah_detail(state, req)),
        _ => None,
    }
}
