//! Tests for the `calculus-tutor` binary:
//! - ask      one question, flags before or after the question
//! - chat     one answer per stdin line, stops at a blank line or EOF
//! - topics   keys and titles in matching order
//! - export   writes a knowledge file, never overwrites
//! - config   file values, default location, and flag precedence

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::tempdir;

const DERIVATIVE_TITLE: &str = "Definition and Rules of Differentiation";

/// A command isolated from the user's own config directory and log filter.
fn tutor(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_calculus-tutor"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn calculus-tutor");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "calculus-tutor failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn json_stream(stdout: &str) -> Vec<Value> {
    serde_json::Deserializer::from_str(stdout)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn ask_renders_text_by_default() {
    let home = tempdir().unwrap();
    let output = tutor(home.path()).args(["ask", "What is a derivative?"]).output().unwrap();

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with(&format!("# {DERIVATIVE_TITLE}\n")), "unexpected output: {stdout}");
    assert!(stdout.contains("## Worked example"));
    assert!(stdout.contains("## Exercise"));
}

#[test]
fn ask_accepts_format_flag_after_question() {
    let home = tempdir().unwrap();
    let output = tutor(home.path())
        .args(["ask", "What is a series?", "--format", "json"])
        .output()
        .unwrap();

    let answer: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(answer["question"], "What is a series?");
    assert_eq!(answer["topic"], "series");
}

#[test]
fn ask_accepts_format_flag_before_question() {
    let home = tempdir().unwrap();
    let output = tutor(home.path())
        .args(["ask", "-f", "json", "What is a series?"])
        .output()
        .unwrap();

    let answer: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(answer["topic"], "series");
}

#[test]
fn ask_joins_unquoted_words() {
    let home = tempdir().unwrap();
    let output = tutor(home.path())
        .args(["ask", "What", "is", "a", "derivative", "--format", "json"])
        .output()
        .unwrap();

    let answer: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(answer["question"], "What is a derivative");
    assert_eq!(answer["record"]["title"], DERIVATIVE_TITLE);
}

#[test]
fn ask_without_question_falls_back() {
    let home = tempdir().unwrap();
    let output = tutor(home.path()).args(["ask", "--format", "json"]).output().unwrap();

    let answer: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(answer["question"], "");
    assert!(answer["topic"].is_null());
    assert_eq!(answer["record"]["example"], "");
    assert_eq!(answer["record"]["exercise"], "");
}

#[test]
fn chat_stops_at_blank_line() {
    let home = tempdir().unwrap();
    let mut cmd = tutor(home.path());
    cmd.args(["chat", "--format", "json"]);

    let output = run_with_stdin(cmd, "What is a limit?\n\nWhat is a series?\n");
    let answers = json_stream(&stdout_of(&output));

    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0]["topic"], "limit");
}

#[test]
fn chat_answers_every_line_until_eof() {
    let home = tempdir().unwrap();
    let mut cmd = tutor(home.path());
    cmd.args(["chat", "--format", "json"]);

    let output = run_with_stdin(cmd, "What is a derivative?\nTell me about vectors");
    let answers = json_stream(&stdout_of(&output));

    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0]["topic"], "derivative");
    assert!(answers[1]["topic"].is_null());
}

#[test]
fn topics_lists_keys_in_matching_order() {
    let home = tempdir().unwrap();
    let output = tutor(home.path()).arg("topics").output().unwrap();

    let stdout = stdout_of(&output);
    let lines: Vec<(&str, &str)> = stdout
        .lines()
        .map(|line| line.split_once('\t').expect("key and title separated by a tab"))
        .collect();

    assert_eq!(
        lines,
        vec![
            ("limit", "Definition and Properties of Limits"),
            ("derivative", DERIVATIVE_TITLE),
            ("integral", "Definite and Indefinite Integrals"),
            ("series", "Numerical Series and Power Series"),
        ]
    );
}

#[test]
fn export_then_answer_from_exported_file() {
    let home = tempdir().unwrap();
    let path = home.path().join("calculus.json");

    let export = tutor(home.path()).arg("export").arg(&path).output().unwrap();
    stdout_of(&export);
    assert!(path.is_file());

    let output = tutor(home.path())
        .arg("--knowledge-base")
        .arg(&path)
        .args(["ask", "What is a derivative?", "--format", "json"])
        .output()
        .unwrap();
    let answer: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(answer["record"]["title"], DERIVATIVE_TITLE);
}

#[test]
fn export_refuses_to_overwrite() {
    let home = tempdir().unwrap();
    let path = home.path().join("calculus.json");
    fs::write(&path, "keep me").unwrap();

    let output = tutor(home.path()).arg("export").arg(&path).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
}

#[test]
fn explicit_config_sets_format_and_flag_overrides_it() {
    let home = tempdir().unwrap();
    let config = home.path().join("tutor.toml");
    fs::write(&config, "format = \"json\"\n").unwrap();

    let from_config = tutor(home.path())
        .arg("--config")
        .arg(&config)
        .args(["ask", "What is a derivative?"])
        .output()
        .unwrap();
    let answer: Value = serde_json::from_str(&stdout_of(&from_config)).unwrap();
    assert_eq!(answer["topic"], "derivative");

    let overridden = tutor(home.path())
        .arg("--config")
        .arg(&config)
        .args(["ask", "What is a derivative?", "--format", "text"])
        .output()
        .unwrap();
    assert!(stdout_of(&overridden).starts_with(&format!("# {DERIVATIVE_TITLE}\n")));
}

#[test]
fn config_in_default_location_is_loaded() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join(".config").join("calculus-tutor");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "format = \"json\"\n").unwrap();

    let output = tutor(home.path()).args(["ask", "What is an integral?"]).output().unwrap();
    let answer: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(answer["topic"], "integral");
}

#[test]
fn knowledge_base_flag_overrides_config() {
    let home = tempdir().unwrap();
    let exported = home.path().join("calculus.json");
    stdout_of(&tutor(home.path()).arg("export").arg(&exported).output().unwrap());

    let config = home.path().join("tutor.toml");
    fs::write(
        &config,
        format!("knowledge_base = {:?}\n", home.path().join("missing.json").display().to_string()),
    )
    .unwrap();

    let broken = tutor(home.path())
        .arg("--config")
        .arg(&config)
        .args(["ask", "What is a limit?"])
        .output()
        .unwrap();
    assert!(!broken.status.success(), "missing knowledge file must be an error");

    let fixed = tutor(home.path())
        .arg("--config")
        .arg(&config)
        .arg("--knowledge-base")
        .arg(&exported)
        .args(["ask", "What is a limit?", "--format", "json"])
        .output()
        .unwrap();
    let answer: Value = serde_json::from_str(&stdout_of(&fixed)).unwrap();
    assert_eq!(answer["topic"], "limit");
}

#[test]
fn segmenter_flag_selects_dictionary_segmentation() {
    let home = tempdir().unwrap();
    let path = home.path().join("zh.json");
    fs::write(
        &path,
        r#"{ "topics": [
            { "key": "极限", "title": "Limits", "content": "c", "example": "", "exercise": "" },
            { "key": "导数", "title": "Derivatives", "content": "c", "example": "", "exercise": "" }
        ] }"#,
    )
    .unwrap();

    let word = tutor(home.path())
        .arg("--knowledge-base")
        .arg(&path)
        .args(["ask", "什么是导数？", "--format", "json"])
        .output()
        .unwrap();
    let answer: Value = serde_json::from_str(&stdout_of(&word)).unwrap();
    assert!(answer["topic"].is_null());

    let dictionary = tutor(home.path())
        .arg("--knowledge-base")
        .arg(&path)
        .args(["--segmenter", "dictionary", "ask", "什么是导数？", "--format", "json"])
        .output()
        .unwrap();
    let answer: Value = serde_json::from_str(&stdout_of(&dictionary)).unwrap();
    assert_eq!(answer["topic"], "导数");
}
