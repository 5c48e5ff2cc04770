use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const ENV_VARS: [&str; 10] = [
    "ANYPOINT_CLIENT_ID",
    "ANYPOINT_CLIENT_SECRET",
    "ANYPOINT_ORG_ID",
    "ANYPOINT_ENV_ID",
    "ANYPOINT_CONTROL_PLANE",
    "ENABLE_ENDPOINT_LOGGING",
    "CLOUDHUB_FETCH_OUTPUT_DIR",
    "CLOUDHUB_FETCH_API_HOST",
    "CLOUDHUB_FETCH_FORMAT",
    "CLOUDHUB_FETCH_DEBUG",
];

/// Binary invocation isolated from the caller's environment and `.env`
fn command(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cloudhub-fetch"));
    cmd.current_dir(cwd);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn with_credentials(cmd: &mut Command) -> &mut Command {
    cmd.env("ANYPOINT_CLIENT_ID", "cid")
        .env("ANYPOINT_CLIENT_SECRET", "csecret")
        .env("ANYPOINT_ORG_ID", "org-1")
        .env("ANYPOINT_ENV_ID", "env-1")
}

#[test]
fn fetch_reports_every_missing_variable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    command(temp.path())
        .env("ANYPOINT_CLIENT_ID", "cid")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing environment variables"))
        .stderr(predicate::str::contains("ANYPOINT_CLIENT_SECRET"))
        .stderr(predicate::str::contains("ANYPOINT_ORG_ID"))
        .stderr(predicate::str::contains("ANYPOINT_ENV_ID"))
        .stderr(predicate::str::contains("ANYPOINT_CLIENT_ID,").not());

    // Nothing is written before configuration is valid
    assert_eq!(fs::read_dir(temp.path())?.count(), 0);
    Ok(())
}

#[test]
fn fetch_rejects_unknown_control_plane() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    with_credentials(&mut command(temp.path()))
        .env("ANYPOINT_CONTROL_PLANE", "apac")
        .assert()
        .failure()
        .stderr(predicate::str::contains("apac"));

    assert_eq!(fs::read_dir(temp.path())?.count(), 0);
    Ok(())
}

#[test]
fn dotenv_file_supplies_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(
        temp.path().join(".env"),
        "ANYPOINT_CLIENT_ID=from-dotenv\nANYPOINT_CLIENT_SECRET=s\nANYPOINT_ORG_ID=o\nANYPOINT_ENV_ID=e\n",
    )?;

    command(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-dotenv"))
        .stdout(predicate::str::contains("Ready to fetch."));

    Ok(())
}

#[test]
fn status_masks_secret_and_needs_no_network() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    with_credentials(&mut command(temp.path()))
        .arg("status")
        .env("ANYPOINT_CONTROL_PLANE", "EU1")
        // Unroutable host: status must not touch it
        .env("CLOUDHUB_FETCH_API_HOST", "http://127.0.0.1:9")
        .assert()
        .success()
        .stdout(predicate::str::contains("eu1.anypoint.mulesoft.com"))
        .stdout(predicate::str::contains("ANYPOINT_CLIENT_SECRET configured"))
        .stdout(predicate::str::contains("csecret").not());

    Ok(())
}

#[test]
fn status_json_reports_invalid_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = command(temp.path())
        .args(["status", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["valid"], false);
    assert!(value["error"].as_str().unwrap().contains("ANYPOINT_CLIENT_ID"));
    Ok(())
}

#[test]
fn completion_emits_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    command(temp.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudhub-fetch"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn authentication_failure_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _token = server
        .mock("POST", "/accounts/api/v2/oauth2/token")
        .with_status(401)
        .create();

    let temp = tempdir()?;
    with_credentials(&mut command(temp.path()))
        .env("CLOUDHUB_FETCH_API_HOST", server.url())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error during authentication"));

    assert_eq!(fs::read_dir(temp.path())?.count(), 0);
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn fetch_downloads_artifacts_and_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _token = server
        .mock("POST", "/accounts/api/v2/oauth2/token")
        .with_status(200)
        .with_body(r#"{"access_token": "tok", "token_type": "bearer", "expires_in": 3600}"#)
        .create();
    let _list = server
        .mock("GET", "/cloudhub/api/applications")
        .match_header("authorization", "Bearer tok")
        .match_header("x-anypnt-org-id", "org-1")
        .match_header("x-anypnt-env-id", "env-1")
        .with_status(200)
        .with_body(r#"[{"domain": "orders"}, {"domain": "billing"}, {"status": "STARTED"}]"#)
        .create();
    let _orders = server
        .mock(
            "GET",
            "/cloudhub/api/organizations/org-1/environments/env-1/applications/orders",
        )
        .with_status(200)
        .with_body(r#"{"domain": "orders", "filename": "orders-1.0.jar"}"#)
        .create();
    let _billing = server
        .mock(
            "GET",
            "/cloudhub/api/organizations/org-1/environments/env-1/applications/billing",
        )
        .with_status(200)
        .with_body(r#"{"domain": "billing"}"#)
        .create();
    let download = server
        .mock(
            "GET",
            "/cloudhub/api/organizations/org-1/environments/env-1/applications/orders/download/orders-1.0.jar",
        )
        .with_status(200)
        .with_body("jar-bytes")
        .expect(1)
        .create();

    let temp = tempdir()?;
    let assert = with_credentials(&mut command(temp.path()))
        .env("CLOUDHUB_FETCH_API_HOST", server.url())
        .env("ENABLE_ENDPOINT_LOGGING", "false")
        .args(["fetch", "--format", "json"])
        .assert()
        .success();

    download.assert();

    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(summary["data"]["total"], 3);
    assert_eq!(summary["data"]["items"].as_array().unwrap().len(), 3);

    let run_dirs: Vec<_> = fs::read_dir(temp.path())?.collect::<Result<_, _>>()?;
    assert_eq!(run_dirs.len(), 1);
    let run_dir = run_dirs[0].path();
    let dir_name = run_dir.file_name().unwrap().to_string_lossy().to_string();
    assert!(dir_name.starts_with("downloads_"));

    let stamp = dir_name.trim_start_matches("downloads_");
    let snapshot = fs::read_to_string(run_dir.join(format!("applications_list_{}.json", stamp)))?;
    let snapshot: serde_json::Value = serde_json::from_str(&snapshot)?;
    assert_eq!(snapshot.as_array().unwrap().len(), 3);

    assert_eq!(
        fs::read(run_dir.join("orders").join("orders-1.0.jar"))?,
        b"jar-bytes"
    );
    assert!(!run_dir.join("orders-1.0.jar").exists());
    assert!(!run_dir.join("billing").exists());

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn fetch_prints_endpoints_when_logging_enabled() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _token = server
        .mock("POST", "/accounts/api/v2/oauth2/token")
        .with_status(200)
        .with_body(r#"{"access_token": "tok"}"#)
        .create();
    let _list = server
        .mock("GET", "/cloudhub/api/applications")
        .with_status(200)
        .with_body("[]")
        .create();

    let temp = tempdir()?;
    with_credentials(&mut command(temp.path()))
        .env("CLOUDHUB_FETCH_API_HOST", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Calling authentication endpoint:"))
        .stdout(predicate::str::contains("Calling applications list endpoint:"))
        .stdout(predicate::str::contains("x-anypnt-org-id: org-1"))
        .stdout(predicate::str::contains("Process completed successfully!"));

    Ok(())
}
