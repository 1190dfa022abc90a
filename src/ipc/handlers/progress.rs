use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::progress::{self, MemorizationEntry};
use serde_json::json;

fn parse_entries(req: &Request) -> Result<Vec<MemorizationEntry>, serde_json::Value> {
    let Some(raw) = req.params.get("entries") else {
        return Err(err(&req.id, "bad_params", "missing entries", None));
    };
    serde_json::from_value(raw.clone()).map_err(|e| {
        err(
            &req.id,
            "bad_params",
            format!("entries malformed: {}", e),
            None,
        )
    })
}

fn parse_juz_numbers(req: &Request) -> Result<Vec<u8>, serde_json::Value> {
    let Some(raw) = req.params.get("juzNumbers").and_then(|v| v.as_array()) else {
        return Err(err(&req.id, "bad_params", "missing juzNumbers", None));
    };
    let mut out = Vec::with_capacity(raw.len());
    for v in raw {
        let Some(n) = v.as_i64() else {
            return Err(err(
                &req.id,
                "bad_params",
                "juzNumbers must contain only integers",
                None,
            ));
        };
        // Values outside 1..=30 are legal input and expand to nothing.
        if let Ok(n) = u8::try_from(n) {
            out.push(n);
        }
    }
    Ok(out)
}

fn handle_juz_summary(state: &AppState, req: &Request) -> serde_json::Value {
    let entries = match parse_entries(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let rows = progress::juz_progress(&state.quran, &entries);
    ok(&req.id, json!({ "juz": rows }))
}

fn handle_surah_summary(state: &AppState, req: &Request) -> serde_json::Value {
    let entries = match parse_entries(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let rows = progress::surah_progress(&state.quran, &entries);
    ok(&req.id, json!({ "surahs": rows }))
}

fn handle_juz_target(state: &AppState, req: &Request) -> serde_json::Value {
    let juz_numbers = match parse_juz_numbers(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let rows = progress::juz_to_surah_target(&state.quran, &juz_numbers);
    ok(&req.id, json!({ "targets": rows }))
}

pub fn try_handle(state: &AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "progress.juzSummary" => Some(handle_juz_summary(state, req)),
        "progress.surahSummary" => Some(handle_surah_summary(state, req)),
        "progress.juzTarget" => Some(handle_juz_target(state, req)),
        _ => None,
    }
}
