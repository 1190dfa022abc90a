use serde::Deserialize;

use crate::quran::QuranTable;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    /// Built once at startup; read-only for the process lifetime.
    pub quran: QuranTable,
}
