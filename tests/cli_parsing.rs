//! Tests for command-line parsing and the derived library configuration.

use clap::Parser;
use node_ipinfo::config::Opt;
use node_ipinfo::{Config, LogFormat, LogLevel, OutputFormat};

const REQUIRED: [&str; 7] = [
    "node_ipinfo",
    "--node-name",
    "HK 01",
    "--node-address",
    "hk1.example.net",
    "--proxy",
    "socks5h://127.0.0.1:1080",
];

fn parse_with(extra: &[&str]) -> Result<Opt, clap::Error> {
    Opt::try_parse_from(REQUIRED.iter().chain(extra.iter()))
}

#[test]
fn test_required_arguments_only() {
    let opt = parse_with(&[]).unwrap();
    assert_eq!(opt.node_name, "HK 01");
    assert_eq!(opt.node_address, "hk1.example.net");
    assert_eq!(opt.proxy, "socks5h://127.0.0.1:1080");
    assert_eq!(opt.argument, None);
    assert_eq!(opt.format, OutputFormat::Html);
    assert!(matches!(opt.log_level, LogLevel::Warn));
    assert!(matches!(opt.log_format, LogFormat::Plain));
}

#[test]
fn test_missing_proxy_is_rejected() {
    let result = Opt::try_parse_from([
        "node_ipinfo",
        "--node-name",
        "HK 01",
        "--node-address",
        "hk1.example.net",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_value_enums() {
    let opt = parse_with(&[
        "--format",
        "json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert_eq!(opt.format, OutputFormat::Json);
    assert!(matches!(opt.log_level, LogLevel::Debug));
    assert!(matches!(opt.log_format, LogFormat::Json));

    assert!(parse_with(&["--format", "markdown"]).is_err());
    assert!(parse_with(&["--log-level", "verbose"]).is_err());
}

#[test]
fn test_argument_drives_masking() {
    let opt = parse_with(&["--argument", "[true]", "--format", "text"]).unwrap();
    let config = Config::from(&opt);
    assert!(config.mask);
    assert_eq!(config.output_format, OutputFormat::Text);

    let opt = parse_with(&["--argument", "mask=off"]).unwrap();
    assert!(!Config::from(&opt).mask);

    let opt = parse_with(&[]).unwrap();
    assert!(!Config::from(&opt).mask);
}

#[test]
fn test_config_keeps_default_timeouts() {
    let config = Config::from(&parse_with(&[]).unwrap());
    assert_eq!(config.lookup_timeout.as_secs(), 5);
    assert_eq!(config.resolve_timeout.as_secs(), 5);
}
