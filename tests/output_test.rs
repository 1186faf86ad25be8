//! Integration tests for result rendering: the inline/file threshold and
//! the lengths report.

use std::fs;
use tempfile::TempDir;
use tokpack::output::{RenderOptions, Rendered, lengths_report, render_constructs, to_json};
use tokpack::packer::pack;

fn toks(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn small_result_stays_inline() {
    let constructs = toks(&["(a)*(x)", "(a)*(y)"]);
    let options = RenderOptions::default();

    let rendered = render_constructs(&constructs, &options).unwrap();
    assert_eq!(
        rendered,
        Rendered::Inline("(a)*(x), (a)*(y)".to_string())
    );
}

#[test]
fn oversized_result_is_written_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("result.txt");

    let constructs: Vec<String> = (0..50).map(|i| format!("(left)*(tok{i})")).collect();
    let options = RenderOptions {
        file_threshold: 100,
        output_path: Some(out_path.clone()),
    };

    let rendered = render_constructs(&constructs, &options).unwrap();
    assert_eq!(rendered, Rendered::File(out_path.clone()));

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, constructs.join(", "));
}

#[test]
fn threshold_is_exclusive() {
    // Joined length exactly at the threshold still renders inline.
    let constructs = toks(&["aaaa", "bbbb"]); // joined: 10 chars
    let options = RenderOptions {
        file_threshold: 10,
        output_path: None,
    };

    let rendered = render_constructs(&constructs, &options).unwrap();
    assert!(matches!(rendered, Rendered::Inline(_)));
}

#[test]
fn lengths_report_matches_pack_output() {
    let constructs = pack(
        &toks(&["a", "b"]),
        &toks(&["x", "y", "z", "w"]),
        8,
        12,
        ")*(",
    )
    .unwrap();

    let report = lengths_report(&constructs);
    assert_eq!(
        report,
        "#1: 9 chars\n#2: 9 chars\n#3: 9 chars\n#4: 9 chars"
    );
}

#[test]
fn json_output_carries_constructs_and_lengths() {
    let constructs = pack(&toks(&["team"]), &toks(&["alpha", "beta"]), 0, 100, ")-(").unwrap();

    let json = to_json(&constructs).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["constructs"][0], "(team)-(alpha)");
    assert_eq!(value["constructs"][1], "(team)-(beta)");
    assert_eq!(value["lengths"][0], 14);
    assert_eq!(
        value["total_len"],
        serde_json::json!("(team)-(alpha), (team)-(beta)".chars().count())
    );
}
