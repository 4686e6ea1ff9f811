use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

const SAMPLE: &str = r#"
[
  {"cca2": "FR", "flag": "🇫🇷", "name": {"common": "France"},
   "translations": {"deu": {"common": "Frankreich"}},
   "region": "Europe", "subregion": "Western Europe", "continents": ["Europe"],
   "idd": {"root": "+3", "suffixes": ["3"]}},
  {"cca2": "DE", "name": {"common": "Germany"},
   "region": "Europe", "subregion": "Western Europe", "continents": ["Europe"],
   "idd": {"root": "+4", "suffixes": ["9"]}},
  {"cca2": "JP", "name": {"common": "Japan"},
   "region": "Asia", "subregion": "Eastern Asia", "continents": ["Asia"],
   "idd": {"root": "+8", "suffixes": ["1"]}},
  {"cca2": "", "name": {"common": "Nowhere"}}
]
"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("country-json").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("country-json"))
        .stdout(predicate::str::contains("--input"));
}

#[test]
fn cli_converts_saved_response() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("all.json");
    let out = dir.path().join("countries.json");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("country-json").unwrap();
    cmd.arg("--input").arg(&input).arg("--out").arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Europe: 2 countries"))
        .stdout(predicate::str::contains("Asia: 1 countries"))
        .stderr(predicate::str::contains("Total countries: 3"));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    let codes: Vec<&str> = arr.iter().map(|c| c["code"].as_str().unwrap()).collect();
    assert_eq!(codes, ["FR", "DE", "JP"]);
    assert_eq!(arr[0]["names"]["german"], "Frankreich");
    assert_eq!(arr[1]["flag"], "🇩🇪");
    assert_eq!(arr[2]["regions"]["subRegion"]["german"], "Ostasien");
}

#[test]
fn cli_localizes_statistics() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("all.json");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("country-json").unwrap();
    cmd.arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("countries.csv"))
        .args(["--language", "de", "--top", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Europa: 2 countries"))
        .stdout(predicate::str::contains("Asien").not());

    let csv_txt = fs::read_to_string(dir.path().join("countries.csv")).unwrap();
    assert!(csv_txt.starts_with("code,flag,phone_code,"));
    assert_eq!(csv_txt.lines().count(), 4);
}

#[test]
fn cli_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("countries.json");

    let mut cmd = Command::cargo_bin("country-json").unwrap();
    cmd.arg("--input")
        .arg(dir.path().join("does-not-exist.json"))
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
    assert!(!out.exists());
}

#[test]
fn cli_unreachable_api_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("countries.json");
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let mut cmd = Command::cargo_bin("country-json").unwrap();
    cmd.arg("--url")
        .arg(format!("http://127.0.0.1:{port}"))
        .arg("--timeout")
        .arg("5")
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Statistics").not())
        .stderr(predicate::str::contains("Error"));
    assert!(!out.exists());
}

#[test]
fn cli_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("all.json");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("country-json").unwrap();
    cmd.arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("countries.xml"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn cli_input_conflicts_with_url() {
    let mut cmd = Command::cargo_bin("country-json").unwrap();
    cmd.args(["--input", "x.json", "--url", "http://localhost"]);
    cmd.assert().failure();
}
