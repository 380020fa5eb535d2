//! The resource cascade
//!
//! A cascade fills one [`PropertyStore`](crate::PropertyStore) by loading
//! resources in a fixed order, each stage overriding the ones before it:
//!
//! 1. **Client** - `<group>/client.properties`
//! 2. **Instance** - `<group>/instance.properties` (instance profile only)
//! 3. **Hosts** - one resource per element of the hosts list key
//! 4. **Applications** - one resource per element of the applications list key
//! 5. **Environments** - one resource per element of the environments list key
//! 6. **Target** - `<group>/target.properties` (instance profile, optional)
//! 7. **Secrets** - the nearest `secrets.properties` above the secrets directory
//!
//! List stages read their list key after the earlier stages are merged, so
//! a client resource can declare which hosts to load.

mod loader;
mod stage;

pub use loader::{Cascade, list_resource_dir};
pub use stage::{ListStage, Profile};
