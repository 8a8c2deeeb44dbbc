#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::PathBuf;

use velocity_gateway::config::{self, GatewayConfig};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("velocity-{}-{name}", std::process::id()))
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
cors:
  allowed_originz: ["*"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.cors.allowed_origins, vec!["*"]);
    assert_eq!(
        cfg.cors.allowed_methods,
        vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"]
    );
    assert_eq!(
        cfg.cors.allowed_headers,
        vec!["Accept", "Authorization", "Content-Type", "X-CSRF-Token"]
    );
    assert_eq!(cfg.cors.exposed_headers, vec!["X-Count"]);
    assert!(cfg.cors.allow_credentials);
    assert_eq!(cfg.cors.max_age_secs, 300);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_empty_origin_list() {
    let bad = r#"
version: 1
cors:
  allowed_origins: []
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = config::load(Some("/nonexistent/velocity.yaml")).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    // Tests run from the crate directory, which has no velocity.yaml.
    let cfg = config::load(None).expect("defaults");
    assert_eq!(cfg, GatewayConfig::default());

    let absent = scratch_path("absent.yaml");
    let cfg = config::load_or_default(None, absent.to_str().unwrap()).expect("defaults");
    assert_eq!(cfg, GatewayConfig::default());
}

#[test]
fn present_default_file_is_loaded() {
    let path = scratch_path("present.yaml");
    fs::write(&path, "version: 1\nserver:\n  listen: \"127.0.0.1:9090\"\n").unwrap();

    let cfg = config::load_or_default(None, path.to_str().unwrap());
    fs::remove_file(&path).unwrap();

    let cfg = cfg.expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:9090");
    assert_eq!(cfg.cors, GatewayConfig::default().cors);
}

#[test]
fn invalid_default_file_is_an_error() {
    let path = scratch_path("invalid.yaml");
    fs::write(&path, "version: 1\nbogus: true\n").unwrap();

    let res = config::load_or_default(None, path.to_str().unwrap());
    fs::remove_file(&path).unwrap();

    assert_eq!(res.expect_err("must fail").client_code().as_str(), "BAD_REQUEST");
}
