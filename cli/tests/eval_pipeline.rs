//! End-to-end runs of the `sqleval` binary over a small CSV dataset.

use std::fs;
use std::path::Path;
use std::process::Command;

const SAMPLE: &str = "\
db_id,query,query_toks,generated_query
concert_singer,SELECT count(*) FROM singer,\"['SELECT', 'count', '(', '*', ')', 'FROM', 'singer']\",SELECT count(*) FROM singer
concert_singer,SELECT name FROM singer WHERE age > 20,\"['SELECT', 'name', 'FROM', 'singer', 'WHERE', 'age', '>', '20']\",SELECT name FROM singer
concert_singer,SELECT name FROM singer,\"['SELECT', 'name', 'FROM', 'singer']\",
";

fn sqleval() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sqleval"))
}

fn write_sample(dir: &Path) -> String {
    let input = dir.join("outputs.csv");
    fs::write(&input, SAMPLE).unwrap();
    input.to_str().unwrap().to_string()
}

#[test]
fn accuracy_pass_writes_detailed_and_summary_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("detailed.csv");
    let summary = dir.path().join("summary.csv");

    let status = sqleval()
        .args([
            "accuracy",
            "--file",
            &input,
            "--output",
            output.to_str().unwrap(),
            "--summary",
            summary.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let mut rdr = csv::Reader::from_path(&output).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert!(headers.iter().any(|h| h == "partial_match_percentage"));
    assert!(headers.iter().any(|h| h == "match_details"));

    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    let column = |name: &str| headers.iter().position(|h| h == name).unwrap();

    // row 1: the generated query is a token-set superset of the reference
    assert_eq!(records[0].get(column("partial_match_percentage")), Some("100"));
    assert_eq!(records[0].get(column("exact_match")), Some("1"));
    // row 2: 4 of 8 reference tokens survive
    assert_eq!(records[1].get(column("partial_match_percentage")), Some("50"));
    assert_eq!(records[1].get(column("exact_match")), Some("0"));
    // row 3: no generated text
    assert_eq!(records[2].get(column("partial_match_percentage")), Some("0"));
    assert_eq!(records[2].get(column("match_details")), Some("{}"));

    let mut rdr = csv::Reader::from_path(&summary).unwrap();
    let record = rdr.records().next().unwrap().unwrap();
    let average: f64 = record.get(0).unwrap().parse().unwrap();
    let exact: f64 = record.get(1).unwrap().parse().unwrap();
    assert!((average - 50.0).abs() < 1e-9);
    assert!((exact - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn length_pass_writes_bucket_tables_and_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let status = sqleval()
        .args([
            "length",
            "--file",
            &input,
            "--output-dir",
            dir.path().to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());

    for stem in ["short", "medium", "long"] {
        assert!(dir.path().join(format!("queries_{stem}.csv")).exists());
        assert!(
            dir.path()
                .join(format!("evaluation_results_{stem}.csv"))
                .exists()
        );
    }

    // every sample query is at most 10 words
    let mut rdr = csv::Reader::from_path(dir.path().join("queries_short.csv")).unwrap();
    assert_eq!(rdr.records().count(), 3);
    let mut rdr = csv::Reader::from_path(dir.path().join("queries_long.csv")).unwrap();
    assert_eq!(rdr.records().count(), 0);

    let chart = dir.path().join("match_percentages_by_length.svg");
    let svg = fs::read_to_string(&chart).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Match Percentage by Query Length"));
}

#[test]
fn rouge_pass_writes_scores_and_averages() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("rouge.csv");
    let averages = dir.path().join("rouge_avg.csv");

    let status = sqleval()
        .args([
            "rouge",
            "--file",
            &input,
            "--output",
            output.to_str().unwrap(),
            "--averages",
            averages.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let mut rdr = csv::Reader::from_path(&output).unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    // row 1 is a verbatim match
    assert_eq!(records[0].get(2), Some("SELECT count(*) FROM singer"));
    assert_eq!(records[0].get(5), Some("1"));
    // row 3 has no generated text: empty cells, excluded from averages
    assert_eq!(records[2].get(1), Some(""));
    assert_eq!(records[2].get(3), Some(""));

    let mut rdr = csv::Reader::from_path(&averages).unwrap();
    let record = rdr.records().next().unwrap().unwrap();
    // averages over the two scored rows only
    let f_score: f64 = record.get(2).unwrap().parse().unwrap();
    assert!(f_score > 0.5 && f_score <= 1.0);
}

#[test]
fn malformed_token_literal_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "query,query_toks\nSELECT 1,not a list\n").unwrap();

    let status = sqleval()
        .args(["accuracy", "--file", input.to_str().unwrap()])
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(!status.success());
}
