//! The `com.example.app` deployment.
//!
//! Two environments (`dev`, `prod`), one host (`h1`) and one target (`t1`)
//! that references `dev` and `h1`. The target declares a `port` stub on
//! its host reference and a `user` stub that the `h1` definition overrides.

use crate::TestResources;

/// Group identifier of the scenario.
pub const GROUP: &str = "com.example.app";

pub const CLIENT: &str = "\
# Client defaults shared by every instance
com.example.app.name=example
com.example.app.environments.listing=dev,prod
com.example.app.hosts.listing=h1
";

pub const INSTANCE: &str = "\
com.example.app.version=10.1.2.3
com.example.app.targets.listing=t1
com.example.app.targets.t1.environment.name=dev
com.example.app.targets.t1.host.name=h1
com.example.app.targets.t1.host.port=22
com.example.app.targets.t1.host.user=stub
";

pub const TARGET: &str = "\
com.example.app.deploy.strategy=rolling
";

pub const DEV: &str = "\
com.example.app.environments.dev.name=dev
com.example.app.environments.dev.url=https://dev.example.com
com.example.app.environments.dev.debug=true
";

pub const PROD: &str = "\
com.example.app.environments.prod.name=prod
com.example.app.environments.prod.url=https://example.com
com.example.app.environments.prod.debug=false
";

pub const H1: &str = "\
com.example.app.hosts.h1.name=h1
com.example.app.hosts.h1.address=10.0.0.1
com.example.app.hosts.h1.user=deploy
";

/// Write the scenario into a fresh resource root.
pub fn scenario() -> TestResources {
    TestResources::new()
        .with("com/example/app/client.properties", CLIENT)
        .with("com/example/app/instance.properties", INSTANCE)
        .with("com/example/app/target.properties", TARGET)
        .with("com/example/app/environments/dev.properties", DEV)
        .with("com/example/app/environments/prod.properties", PROD)
        .with("com/example/app/hosts/h1.properties", H1)
}
