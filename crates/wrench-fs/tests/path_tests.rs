use rstest::rstest;
use std::path::Path;
use wrench_fs::ResourcePath;

#[rstest]
#[case("com/example/app", "com/example/app")]
#[case("com\\example\\app", "com/example/app")]
#[case("/com/example/app/", "com/example/app")]
#[case("com//example/./app", "com/example/app")]
#[case("", "")]
fn test_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(ResourcePath::new(input).as_str(), expected);
}

#[rstest]
#[case("com.example.app", "com/example/app")]
#[case("com.example.app.hosts.listing", "com/example/app/hosts/listing")]
#[case("hosts", "hosts")]
fn test_from_dotted(#[case] dotted: &str, #[case] expected: &str) {
    assert_eq!(ResourcePath::from_dotted(dotted).as_str(), expected);
}

#[test]
fn test_properties_appends_suffix() {
    let path = ResourcePath::new("com/example/app/hosts").properties("h1");
    assert_eq!(path.as_str(), "com/example/app/hosts/h1.properties");
    assert_eq!(path.extension(), Some("properties"));
    assert_eq!(path.file_name(), Some("h1.properties"));
}

#[test]
fn test_parent_chain_reaches_root() {
    let path = ResourcePath::new("a/b");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "a");
    let root = parent.parent().unwrap();
    assert!(root.is_empty());
    assert!(root.parent().is_none());
}

#[test]
fn test_to_native_under_root() {
    let native = ResourcePath::new("com/example/client.properties").to_native_under(Path::new("/res"));
    assert_eq!(native, Path::new("/res").join("com").join("example").join("client.properties"));
}
