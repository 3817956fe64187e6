use clap::Parser;
use gostrap::cli::Args;
use gostrap::context::DatabaseType;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("gostrap")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["myapp"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "myapp");
    assert_eq!(parsed.module_path, None);
    assert_eq!(parsed.database, DatabaseType::Mysql);
    assert_eq!(parsed.target, PathBuf::from("."));
    assert!(!parsed.no_redis);
    assert!(!parsed.no_metrics);
    assert!(!parsed.no_pprof);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_options() {
    let args = make_args(&[
        "myapp",
        "--module-path",
        "github.com/acme/myapp",
        "--author",
        "Jane Doe",
        "--email",
        "jane@example.com",
        "--description",
        "demo service",
        "--database",
        "postgres",
        "--no-redis",
        "--no-metrics",
        "--no-pprof",
        "--target",
        "/tmp/projects",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.module_path.as_deref(), Some("github.com/acme/myapp"));
    assert_eq!(parsed.author.as_deref(), Some("Jane Doe"));
    assert_eq!(parsed.email.as_deref(), Some("jane@example.com"));
    assert_eq!(parsed.description.as_deref(), Some("demo service"));
    assert_eq!(parsed.database, DatabaseType::Postgres);
    assert_eq!(parsed.target, PathBuf::from("/tmp/projects"));
    assert!(parsed.no_redis);
    assert!(parsed.no_metrics);
    assert!(parsed.no_pprof);
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_database_is_rejected() {
    let args = make_args(&["myapp", "--database", "oracle"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_name() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["myapp", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
