use assert_cmd::Command;
use predicates::prelude::*;

fn markdown2html() -> Command {
    Command::cargo_bin("markdown2html").unwrap()
}

#[test]
fn converts_file() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("README.md");
    let output = tmp.path().join("README.html");
    std::fs::write(&input, "# Title\nSome **bold** text.\n\n* item\n").unwrap();

    markdown2html()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<h1>Title</h1>\n<p>\nSome <strong>bold</strong> text.\n</p>\n<ul>\n<li>item</li>\n</ul>"
    );
}

#[test]
fn no_arguments_prints_usage() {
    markdown2html()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn one_argument_prints_usage() {
    markdown2html()
        .arg("only.md")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_input_file() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("absent.md");
    let output = tmp.path().join("out.html");

    markdown2html()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("Missing {}", input.display())));

    assert!(!output.exists());
}

#[test]
fn help_exits_zero() {
    markdown2html()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert Markdown files to HTML"));
}

#[test]
fn config_file_is_applied() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("in.md");
    let output = tmp.path().join("out.html");
    let config = tmp.path().join("config.toml");
    std::fs::write(&input, "- a\n## H\n").unwrap();
    std::fs::write(
        &config,
        "[headings]\nclose_open_lists = true\n\n[output]\ntrailing_newline = true\n",
    )
    .unwrap();

    markdown2html()
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<ul>\n<li>a</li>\n</ul>\n<h2>H</h2>\n"
    );
}

#[test]
fn invalid_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("in.md");
    let output = tmp.path().join("out.html");
    let config = tmp.path().join("config.toml");
    std::fs::write(&input, "text\n").unwrap();
    std::fs::write(&config, "headings = [").unwrap();

    markdown2html()
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));

    assert!(!output.exists());
}
