use std::fs;
use std::path::PathBuf;

use punchline_engine::cards::{Card, Template};
use punchline_engine::dealer::Submission;
use punchline_engine::logger::{format_round_id, RoundLogger, RoundRecord};
use uuid::Uuid;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample_record(round_id: &str) -> RoundRecord {
    let player = Uuid::new_v4();
    RoundRecord {
        round_id: round_id.to_string(),
        seed: Some(42),
        template: Some(Template::new("The prompt: ____.")),
        judge: Some(Uuid::new_v4()),
        submissions: vec![Submission {
            player,
            cards: vec![Card::new(3, "a very formal apology")],
        }],
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("roundlog");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample_record("20250102-000001")).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn id_format_is_date_dash_sequence() {
    assert_eq!(format_round_id("20251231", 42), "20251231-000042");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("roundlog_ts");
    let mut logger = RoundLogger::create(&path).expect("create logger");

    logger.write(&sample_record("20250102-000010")).expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec = RoundRecord {
        ts: Some(preset.clone()),
        ..sample_record("20250102-000011")
    };
    logger.write(&rec).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn round_record_serializes_and_deserializes() {
    let rec = sample_record("20250102-000123");
    let s = serde_json::to_string(&rec).expect("serialize");
    let back: RoundRecord = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(rec, back);
}
