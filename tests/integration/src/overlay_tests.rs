//! Multiple resource roots and deploy-time secrets

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use wrench_core::{ClientResolver, GroupId, InstanceResolver, NodeExt, Value};
use wrench_fs::DirectoryResources;
use wrench_test_utils::TestResources;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn group() -> GroupId {
    GroupId::new("com.example.shop").unwrap()
}

#[test]
fn test_overlay_root_wins_for_files_it_provides() {
    let resources = DirectoryResources::with_roots([fixtures().join("overlay"), fixtures().join("resources")]);

    let resolved = InstanceResolver::new(group(), resources).resolve().unwrap();
    let production = resolved.context("production-web").unwrap();

    assert_eq!(
        production.lookup_dotted("host1.address").and_then(Value::as_str),
        Some("10.9.0.12")
    );
    assert_eq!(
        production.lookup_dotted("host0.address").and_then(Value::as_str),
        Some("10.1.0.11")
    );
}

#[test]
fn test_base_root_first_ignores_overlay() {
    let resources = DirectoryResources::with_roots([fixtures().join("resources"), fixtures().join("overlay")]);

    let resolved = InstanceResolver::new(group(), resources).resolve().unwrap();
    let production = resolved.context("production-web").unwrap();

    assert_eq!(
        production.lookup_dotted("host1.address").and_then(Value::as_str),
        Some("10.1.0.12")
    );
}

#[test]
fn test_secrets_found_above_the_working_directory() {
    let deploy = TestResources::new().with(
        "secrets.properties",
        "com.example.shop.environments.production.url=https://internal.shop.example.com\n",
    );
    let work = deploy.dir("releases/2.4.1.7/bin");

    let resolved = InstanceResolver::new(group(), DirectoryResources::new(fixtures().join("resources")))
        .with_secrets_dir(&work)
        .resolve()
        .unwrap();

    let db = resolved.context("production-db").unwrap();
    assert_eq!(
        db.lookup_dotted("environment.url").and_then(Value::as_str),
        Some("https://internal.shop.example.com")
    );
    assert!(resolved.loaded_resources().last().unwrap().ends_with("secrets.properties"));
}

#[test]
fn test_client_properties_skip_instance_resources() {
    let resources = DirectoryResources::new(fixtures().join("resources"));

    let properties = ClientResolver::for_group(group(), resources).resolve().unwrap();

    assert_eq!(properties.get("com.example.shop.name"), Some("shop"));
    assert_eq!(properties.get("com.example.shop.hosts.db1.role"), Some("database"));
    assert!(!properties.contains("com.example.shop.targets.listing"));
    assert!(!properties.contains("com.example.shop.timeout"));
}
