//! End-to-end resolution of the on-disk shop deployment
//!
//! Exercises the full flow: application defaults -> instance cascade ->
//! tree -> target contexts, against `test-fixtures/resources`.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use wrench_core::{GroupId, InstanceResolver, Node, NodeExt, ResolvedInstance, Value, shorten_version};
use wrench_fs::{DirectoryResources, OutputFormat, render};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn resolve() -> ResolvedInstance {
    let group = GroupId::new("com.example.shop").unwrap();
    InstanceResolver::new(group, DirectoryResources::new(fixtures().join("resources")))
        .resolve()
        .unwrap()
}

fn text<'a>(node: &'a Node, dotted: &str) -> Option<&'a str> {
    node.lookup_dotted(dotted).and_then(Value::as_str)
}

#[test]
fn test_targets_follow_listing_order() {
    let resolved = resolve();
    // production-db is defined last but listed first
    assert_eq!(
        resolved.target_names(),
        vec!["production-db", "staging-web", "production-web"]
    );
    let keys: Vec<_> = resolved.contexts().keys().copied().collect();
    assert_eq!(keys, vec!["production-db", "staging-web", "production-web"]);
}

#[test]
fn test_plural_hosts_are_indexed_per_target() {
    let resolved = resolve();

    let staging = resolved.context("staging-web").unwrap();
    assert_eq!(text(staging, "host0.address"), Some("10.1.0.11"));
    assert!(!staging.contains_key("host1"));
    assert_eq!(text(staging, "environment.url"), Some("https://staging.shop.example.com"));

    let production = resolved.context("production-web").unwrap();
    assert_eq!(text(production, "host0.name"), Some("web1"));
    assert_eq!(text(production, "host1.name"), Some("web2"));
    assert!(!production.contains_key("host"));
    assert_eq!(text(production, "environment.replicas"), Some("3"));
}

#[test]
fn test_singular_host_overrides_target_stub() {
    let resolved = resolve();

    let db = resolved.context("production-db").unwrap();
    assert_eq!(text(db, "host.address"), Some("10.1.0.21"));
    assert_eq!(text(db, "host.role"), Some("database"));
    // db1 defines its own port, which replaces the target's stub
    assert_eq!(text(db, "host.port"), Some("5433"));
}

#[test]
fn test_application_defaults_and_target_overrides() {
    let resolved = resolve();
    let properties = resolved.properties();

    assert_eq!(properties.get("com.example.shop.timeout"), Some("30"));
    assert_eq!(properties.get("com.example.shop.log.level"), Some("warn"));
    assert_eq!(properties.get_integer("com.example.shop.timeout", 0).unwrap(), 30);

    let db = resolved.context("production-db").unwrap();
    assert_eq!(text(db, "timeout"), Some("30"));
    assert_eq!(text(db, "log.level"), Some("warn"));
}

#[test]
fn test_contexts_do_not_leak_between_targets() {
    let resolved = resolve();

    let staging = resolved.context("staging-web").unwrap();
    let production = resolved.context("production-web").unwrap();
    assert_eq!(text(staging, "environment.name"), Some("staging"));
    assert_eq!(text(production, "environment.name"), Some("production"));
    assert!(!staging.contains_key("targets"));
    assert!(!production.contains_key("targets"));
}

#[test]
fn test_version_code_from_resolved_properties() {
    let resolved = resolve();
    let version = resolved.system().scalar("version").unwrap();
    assert_eq!(shorten_version(version).unwrap(), "24107");
}

#[test]
fn test_rendered_context_reads_back_as_the_same_tree() {
    let resolved = resolve();
    let context = resolved.context("production-web").unwrap();

    let yaml = render(context, OutputFormat::Yaml).unwrap();
    let back: Node = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(&back, context);
}
