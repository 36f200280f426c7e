//! Integration tests for the geekbot-mcp binary

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

const ENV_VARS: [&str; 4] = [
    "GB_API_KEY",
    "GB_API_BASE_URL",
    "GB_API_TIMEOUT_SECS",
    "GB_REPORTS_LIMIT",
];

fn geekbot_mcp() -> Result<Command> {
    let mut cmd = Command::cargo_bin("geekbot-mcp")?;
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    Ok(cmd)
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    geekbot_mcp()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("standups"))
        .stdout(predicate::str::contains("reports"));
    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    geekbot_mcp()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn test_missing_api_key_is_a_configuration_error() -> Result<()> {
    geekbot_mcp()?
        .arg("standups")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("GB_API_KEY is not set"));
    Ok(())
}

#[test]
fn test_serve_without_api_key_exits() -> Result<()> {
    geekbot_mcp()?
        .arg("serve")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("GB_API_KEY"));
    Ok(())
}

#[test]
fn test_invalid_timeout_is_rejected() -> Result<()> {
    geekbot_mcp()?
        .env("GB_API_KEY", "test-key")
        .env("GB_API_TIMEOUT_SECS", "soon")
        .arg("standups")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("GB_API_TIMEOUT_SECS"));
    Ok(())
}

#[test]
fn test_reports_invalid_date_fails_without_network() -> Result<()> {
    geekbot_mcp()?
        .env("GB_API_KEY", "test-key")
        .env("GB_API_BASE_URL", "http://127.0.0.1:9/v1")
        .args(["reports", "--after", "2024-13-45"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("2024-13-45"));
    Ok(())
}

#[test]
fn test_unreachable_upstream_is_a_general_error() -> Result<()> {
    geekbot_mcp()?
        .env("GB_API_KEY", "test-key")
        .env("GB_API_BASE_URL", "http://127.0.0.1:9/v1")
        .env("GB_API_TIMEOUT_SECS", "2")
        .arg("standups")
        .assert()
        .failure()
        .code(1);
    Ok(())
}

#[test]
fn test_prompt_needs_no_configuration() -> Result<()> {
    geekbot_mcp()?
        .args(["prompt", "--standup-id", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<instructions>"))
        .stdout(predicate::str::contains("standup_id 42"));

    geekbot_mcp()?
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch_standups"));
    Ok(())
}
