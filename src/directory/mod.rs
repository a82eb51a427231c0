//! Service provider directory: the fixed listings, free-text/category filtering with
//! distance or rating ordering, and contact launching.

pub mod contact;
pub mod query;
pub mod seed;

pub use contact::{ContactChannel, Launcher, SystemLauncher, contact_target, open_contact};
pub use query::{find_provider, query_providers, sort_providers};
pub use seed::seed_providers;
