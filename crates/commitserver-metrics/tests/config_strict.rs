#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use commitserver_core::CommitServerError;
use commitserver_metrics::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8087"
  metrics_pathh: "/metrics" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, CommitServerError::Config(_)));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8087");
    assert_eq!(cfg.server.metrics_path, "/metrics");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.is_fatal());
}

#[test]
fn rejects_bad_listen_and_path() {
    let bad_listen = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    assert!(config::load_from_str(bad_listen).is_err());

    let relative = "version: 1\nserver:\n  metrics_path: \"metrics\"\n";
    assert!(config::load_from_str(relative).is_err());

    let shadow = "version: 1\nserver:\n  metrics_path: \"/healthz\"\n";
    assert!(config::load_from_str(shadow).is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("/nonexistent/commitserver-metrics.yaml").unwrap();
    assert_eq!(cfg.server.metrics_path, "/metrics");

    assert!(config::load_from_file("/nonexistent/commitserver-metrics.yaml").is_err());
}
