//! Configuration: package lists and settings resolution

pub mod packages;
pub mod settings;

pub use packages::{PackageList, PackagesFile};
pub use settings::{Overrides, Settings, DEFAULT_MAX_DELAY};
