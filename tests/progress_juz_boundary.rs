use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_tahfizd");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn tahfizd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn juz_rows(result: &serde_json::Value) -> Vec<serde_json::Value> {
    result
        .get("juz")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("juz rows")
}

#[test]
fn entry_across_juz_boundary_splits_over_the_wire() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "progress.juzSummary",
        json!({ "entries": [
            { "surah": "Al-Baqarah", "ayahStart": 140, "ayahEnd": 150, "kind": "ziyadah" }
        ] }),
    );
    let rows = juz_rows(&result);
    assert_eq!(rows.len(), 30);
    assert_eq!(rows[0]["memorizedAyahCount"], 2);
    assert_eq!(rows[1]["memorizedAyahCount"], 9);
    assert_eq!(rows[2]["memorizedAyahCount"], 0);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn fatihah_and_baqarah_summary_states() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "progress.juzSummary",
        json!({ "entries": [
            { "surah": "Al-Fatihah", "ayahStart": 1, "ayahEnd": 7, "kind": "ziyadah" },
            { "surah": "Al-Baqarah", "ayahStart": 1, "ayahEnd": 200, "kind": "ziyadah" }
        ] }),
    );
    let rows = juz_rows(&result);

    assert_eq!(rows[0]["percent"], 100);
    assert_eq!(rows[0]["completionState"], "complete");
    assert_eq!(
        rows[0]["contributingSurahs"],
        json!(["Al-Fatihah (7 ayat)", "Al-Baqarah (141 ayat)"])
    );
    assert_eq!(rows[1]["memorizedAyahCount"], 59);
    assert_eq!(rows[1]["totalAyahCount"], 111);
    assert_eq!(rows[1]["percent"], 53);
    assert_eq!(rows[1]["completionState"], "inProgress");
    assert_eq!(rows[2]["percent"], 0);
    assert_eq!(rows[2]["completionState"], "notStarted");

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn murajaah_and_english_alias_kinds() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    // A review entry is accepted but moves nothing; the alias spellings
    // decode to the same kinds.
    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "progress.juzSummary",
        json!({ "entries": [
            { "surah": "Al-Baqarah", "ayahStart": 1, "ayahEnd": 286, "kind": "murajaah" },
            { "surah": "Al-Fatihah", "ayahStart": 1, "ayahEnd": 7, "kind": "review" },
            { "surah": "An-Nas", "ayahStart": 1, "ayahEnd": 6, "kind": "newMemorization" }
        ] }),
    );
    let rows = juz_rows(&result);
    assert_eq!(rows[0]["memorizedAyahCount"], 0);
    assert_eq!(rows[1]["memorizedAyahCount"], 0);
    assert_eq!(rows[29]["memorizedAyahCount"], 6);

    let surahs = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "progress.surahSummary",
        json!({ "entries": [
            { "surah": "Al-Fatihah", "ayahStart": 1, "ayahEnd": 7, "kind": "murajaah" }
        ] }),
    );
    assert_eq!(surahs["surahs"], json!([]));

    drop(stdin);
    let _ = child.wait();
}
