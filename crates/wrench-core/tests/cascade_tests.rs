//! Tests for the resource cascade

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use rstest::rstest;
use wrench_core::{Cascade, Error, GroupId, ListStage, Profile, PropertyStore};
use wrench_fs::{MemoryResources, Properties, ResourceLoader, ResourcePath, SecretsLocator};
use wrench_test_utils::TestResources;

/// Wraps a loader and records every path requested from it.
struct RecordingLoader {
    inner: MemoryResources,
    requests: RefCell<Vec<String>>,
}

impl RecordingLoader {
    fn new(inner: MemoryResources) -> Self {
        Self {
            inner,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ResourceLoader for RecordingLoader {
    fn load(&self, path: &ResourcePath) -> wrench_fs::Result<Properties> {
        self.requests.borrow_mut().push(path.to_string());
        self.inner.load(path)
    }
}

fn group() -> GroupId {
    GroupId::new("g").unwrap()
}

mod ordering_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn later_stages_override_earlier_ones() {
        let resources = MemoryResources::new()
            .with("g/client.properties", "who=client\nclient.only=1\ng.hosts=h\ng.environments=e\n")
            .with("g/instance.properties", "who=instance\ninstance.only=1\n")
            .with("g/hosts/h.properties", "who=host\n")
            .with("g/environments/e.properties", "who=environment\n")
            .with("g/target.properties", "who=target\n");

        let mut store = PropertyStore::new();
        let loaded = Cascade::new(&resources, Profile::Instance)
            .with_group(group())
            .load(&mut store)
            .unwrap();

        assert_eq!(store.get("who"), Some("target"));
        assert_eq!(store.get("client.only"), Some("1"));
        assert_eq!(store.get("instance.only"), Some("1"));
        assert_eq!(
            loaded,
            vec![
                "g/client.properties",
                "g/instance.properties",
                "g/hosts/h.properties",
                "g/environments/e.properties",
                "g/target.properties",
            ]
        );
    }

    #[test]
    fn list_elements_load_in_listed_order() {
        let loader = RecordingLoader::new(
            MemoryResources::new()
                .with("g/client.properties", "g.hosts=a,b\n")
                .with("g/hosts/a.properties", "pick=a\nonly.a=1\n")
                .with("g/hosts/b.properties", "pick=b\n"),
        );

        let mut store = PropertyStore::new();
        Cascade::new(&loader, Profile::Client)
            .with_group(group())
            .load(&mut store)
            .unwrap();

        assert_eq!(
            loader.requests(),
            vec!["g/client.properties", "g/hosts/a.properties", "g/hosts/b.properties"]
        );
        assert_eq!(store.get("pick"), Some("b"));
        assert_eq!(store.get("only.a"), Some("1"));
    }

    #[test]
    fn list_key_declared_by_an_earlier_list_stage_is_honoured() {
        let resources = MemoryResources::new()
            .with("g/client.properties", "g.hosts=h\n")
            .with("g/hosts/h.properties", "g.applications=web\n")
            .with("g/applications/web.properties", "app=web\n");

        let mut store = PropertyStore::new();
        Cascade::new(&resources, Profile::Client)
            .with_group(group())
            .load(&mut store)
            .unwrap();

        assert_eq!(store.get("app"), Some("web"));
    }

    #[test]
    fn listing_suffix_is_used_when_bare_key_is_absent() {
        let resources = MemoryResources::new()
            .with("g/client.properties", "g.environments.listing=dev\n")
            .with("g/environments/dev.properties", "g.environments.dev.url=https://dev\n");

        let mut store = PropertyStore::new();
        let cascade = Cascade::new(&resources, Profile::Client).with_group(group());
        cascade.load(&mut store).unwrap();

        assert_eq!(cascade.list_key(&store, ListStage::Environments), "g.environments.listing");
        assert_eq!(store.get("g.environments.dev.url"), Some("https://dev"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(" , ,")]
    fn blank_listing_loads_nothing(#[case] listing: &str) {
        let loader = RecordingLoader::new(
            MemoryResources::new().with("g/client.properties", format!("g.hosts={listing}\n")),
        );

        let mut store = PropertyStore::new();
        Cascade::new(&loader, Profile::Client)
            .with_group(group())
            .load(&mut store)
            .unwrap();

        assert_eq!(loader.requests(), vec!["g/client.properties"]);
    }

    #[test]
    fn cascade_merges_over_defaults() {
        let resources = MemoryResources::new().with("g/client.properties", "b=client\n");
        let defaults: PropertyStore = [("a", "default"), ("b", "default")].into_iter().collect();

        let mut store = PropertyStore::with_defaults(defaults);
        Cascade::new(&resources, Profile::Client)
            .with_group(group())
            .load(&mut store)
            .unwrap();

        assert_eq!(store.get("a"), Some("default"));
        assert_eq!(store.get("b"), Some("client"));
    }
}

mod anchor_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn client_profile_requires_client_anchor() {
        let err = Cascade::new(MemoryResources::new(), Profile::Client)
            .with_group(group())
            .load(&mut PropertyStore::new())
            .unwrap_err();

        assert!(err.is_resource_not_found());
        assert!(err.to_string().contains("g/client.properties"));
    }

    #[test]
    fn instance_profile_skips_missing_client_and_target() {
        let resources = MemoryResources::new().with("g/instance.properties", "x=1\n");

        let mut store = PropertyStore::new();
        let loaded = Cascade::new(&resources, Profile::Instance)
            .with_group(group())
            .load(&mut store)
            .unwrap();

        assert_eq!(loaded, vec!["g/instance.properties"]);
        assert_eq!(store.get("x"), Some("1"));
    }

    #[test]
    fn instance_profile_requires_instance_anchor() {
        let resources = MemoryResources::new().with("g/client.properties", "x=1\n");

        let err = Cascade::new(&resources, Profile::Instance)
            .with_group(group())
            .load(&mut PropertyStore::new())
            .unwrap_err();

        assert!(err.to_string().contains("g/instance.properties"));
    }

    #[test]
    fn missing_list_element_is_fatal() {
        let resources = MemoryResources::new().with("g/client.properties", "g.hosts=present,absent\n")
            .with("g/hosts/present.properties", "x=1\n");

        let err = Cascade::new(&resources, Profile::Client)
            .with_group(group())
            .load(&mut PropertyStore::new())
            .unwrap_err();

        assert!(matches!(err, Error::Fs(wrench_fs::Error::ResourceNotFound { ref path }) if path == "g/hosts/absent.properties"));
    }

    #[test]
    fn parse_errors_in_optional_anchor_are_not_swallowed() {
        let resources = MemoryResources::new()
            .with("g/instance.properties", "x=1\n")
            .with("g/target.properties", "bad=\\u12\n");

        let err = Cascade::new(&resources, Profile::Instance)
            .with_group(group())
            .load(&mut PropertyStore::new())
            .unwrap_err();

        assert!(matches!(err, Error::Fs(wrench_fs::Error::PropertiesParse { .. })));
    }

    #[test]
    fn ungrouped_cascade_uses_resource_path_and_bare_list_keys() {
        let resources = MemoryResources::new()
            .with("custom/settings.properties", "hosts=h\n")
            .with("hosts/h.properties", "host.loaded=yes\n");

        let mut store = PropertyStore::new();
        Cascade::new(&resources, Profile::Client)
            .with_resource_path("custom/settings.properties")
            .load(&mut store)
            .unwrap();

        assert_eq!(store.get("host.loaded"), Some("yes"));
    }

    #[test]
    fn ungrouped_cascade_without_resource_path_fails() {
        let err = Cascade::new(MemoryResources::new(), Profile::Client)
            .load(&mut PropertyStore::new())
            .unwrap_err();

        assert!(err.is_resource_not_found());
        assert!(err.to_string().contains("<unset>"));
    }
}

mod secrets_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECRETS_NAME: &str = "wrench-cascade-secrets-5b21e0.properties";

    #[test]
    fn secrets_override_every_other_stage() {
        let fixture = TestResources::new()
            .with("res/g/client.properties", "db.password=changeme\ndb.user=app\n")
            .with(&format!("deploy/{SECRETS_NAME}"), "db.password=s3cret\n");
        let work = fixture.dir("deploy/releases/current");

        let mut store = PropertyStore::new();
        let loaded = Cascade::new(wrench_fs::DirectoryResources::new(fixture.path("res")), Profile::Client)
            .with_group(group())
            .with_secrets_dir(&work)
            .with_secrets_locator(SecretsLocator::with_file_name(SECRETS_NAME))
            .load(&mut store)
            .unwrap();

        assert_eq!(store.get("db.password"), Some("s3cret"));
        assert_eq!(store.get("db.user"), Some("app"));
        assert_eq!(loaded.len(), 2);
        assert!(loaded[1].ends_with(SECRETS_NAME));
    }

    #[test]
    fn no_secrets_file_is_not_an_error() {
        let fixture = TestResources::new().with("g/client.properties", "db.password=changeme\n");
        let work = fixture.dir("work");

        let mut store = PropertyStore::new();
        Cascade::new(fixture.loader(), Profile::Client)
            .with_group(group())
            .with_secrets_dir(&work)
            .with_secrets_locator(SecretsLocator::with_file_name(SECRETS_NAME))
            .load(&mut store)
            .unwrap();

        assert_eq!(store.get("db.password"), Some("changeme"));
    }
}
