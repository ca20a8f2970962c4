//! End-to-end tests for the `textsub` binary.

use std::process::{Command, Output};

use figment::Jail;

const BROKEN_CONFIG: &str = "[filter\nsearchterm = \n";

const GOOD_CONFIG: &str = r#"
[filter]
searchterm = "Moodle"
substituteterm = "Workplace"
formats = "1,2"
"#;

fn textsub(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textsub"))
        .args(args)
        .output()
        .expect("failed to run textsub")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_config_path_ignores_broken_config() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", BROKEN_CONFIG)?;

        let output = textsub(&["-c", "broken.toml", "config", "path"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output).trim(), "broken.toml");
        Ok(())
    });
}

#[test]
fn test_validate_other_file_ignores_broken_config() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", BROKEN_CONFIG)?;
        jail.create_file("good.toml", GOOD_CONFIG)?;

        let output = textsub(&["-c", "broken.toml", "config", "validate", "--file", "good.toml"]);
        assert!(output.status.success());
        assert!(stdout(&output).contains("Configuration is valid."));
        Ok(())
    });
}

#[test]
fn test_validate_reports_broken_config() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", BROKEN_CONFIG)?;

        let output = textsub(&["config", "validate", "--file", "broken.toml"]);
        assert!(!output.status.success());
        Ok(())
    });
}

#[test]
fn test_formats_ignores_broken_config() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", BROKEN_CONFIG)?;

        let output = textsub(&["-c", "broken.toml", "formats"]);
        assert!(output.status.success());
        assert!(stdout(&output).contains("markdown"));
        Ok(())
    });
}

#[test]
fn test_apply_fails_on_broken_config() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", BROKEN_CONFIG)?;

        let output = textsub(&["-c", "broken.toml", "apply", "--format", "html", "Moodle"]);
        assert!(!output.status.success());
        Ok(())
    });
}

#[test]
fn test_apply_substitutes_with_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file("good.toml", GOOD_CONFIG)?;

        let output = textsub(&[
            "-c",
            "good.toml",
            "apply",
            "--format",
            "html",
            "Moodle is a popular LMS. MOODLE 4.2 is out now.",
        ]);
        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            "Workplace is a popular LMS. MOODLE 4.2 is out now.\n"
        );
        Ok(())
    });
}

#[test]
fn test_apply_leaves_disallowed_format_unchanged() {
    Jail::expect_with(|jail| {
        jail.create_file("good.toml", GOOD_CONFIG)?;

        let output = textsub(&["-c", "good.toml", "apply", "--format", "markdown", "Moodle"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "Moodle\n");
        Ok(())
    });
}
