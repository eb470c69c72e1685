use assert_cmd::Command as AssertCommand;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn adreach() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_adreach"));
    // Keep output free of color codes and unaffected by the developer's setup
    cmd.env("NO_COLOR", "1").env_remove("ADREACH_LOG");
    cmd
}

#[test]
fn test_interactive_prompt_prints_estimate() {
    let assert = AssertCommand::new(env!("CARGO_BIN_EXE_adreach"))
        .write_stdin("10\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("---------- Calculadora de Anúncios ----------"));
    assert!(stdout.contains("Informe o valor a ser investido no anúncio: R$ "));
    assert!(stdout.ends_with(">> Previsão de visualizações para 10.0 reais investidos: 700\n"));
}

#[test]
fn test_interactive_zero_investment() {
    let assert = AssertCommand::new(env!("CARGO_BIN_EXE_adreach"))
        .write_stdin("0\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.ends_with("para 0.0 reais investidos: 0\n"));
}

#[test]
fn test_interactive_rejects_non_numeric_input() {
    let assert = AssertCommand::new(env!("CARGO_BIN_EXE_adreach"))
        .write_stdin("abc\n")
        .assert()
        .failure();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains(">>"));
    assert!(stderr.contains("Invalid investment 'abc'"), "stderr: {}", stderr);
}

#[test]
fn test_estimate_subcommand_terminal() {
    let temp = TempDir::new().unwrap();
    let output = adreach()
        .current_dir(temp.path())
        .args(["estimate", "10"])
        .output()
        .expect("Failed to execute estimate command");

    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        ">> Previsão de visualizações para 10.0 reais investidos: 700\n"
    );
}

#[test]
fn test_estimate_subcommand_json() {
    let temp = TempDir::new().unwrap();
    let output = adreach()
        .current_dir(temp.path())
        .args(["estimate", "10", "--format", "json"])
        .output()
        .expect("Failed to execute estimate command");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_views"], 700);
    assert_eq!(json["initial_views"], 300);
    assert_eq!(json["rounds"].as_array().unwrap().len(), 3);
}

#[test]
fn test_estimate_uses_config_file_format() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".adreach.toml"),
        "[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    let output = adreach()
        .current_dir(temp.path())
        .args(["estimate", "10"])
        .output()
        .expect("Failed to execute estimate command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Ad View Estimate"));
    assert!(stdout.contains("**Total views: 700**"));
}

#[test]
fn test_estimate_rejects_nan() {
    let temp = TempDir::new().unwrap();
    let output = adreach()
        .current_dir(temp.path())
        .args(["estimate", "nan"])
        .output()
        .expect("Failed to execute estimate command");

    assert!(!output.status.success());
}

#[test]
fn test_init_then_refuse_overwrite() {
    let temp = TempDir::new().unwrap();

    let first = adreach()
        .current_dir(temp.path())
        .arg("init")
        .output()
        .expect("Failed to execute init command");
    assert!(first.status.success());
    assert!(temp.path().join(".adreach.toml").exists());

    let second = adreach()
        .current_dir(temp.path())
        .arg("init")
        .output()
        .expect("Failed to execute init command");
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));
}
