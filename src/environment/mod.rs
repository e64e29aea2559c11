//! Facts about the machine a verification runs on.
//!
//! - [`platform`] - Operating-system classification
//! - [`version`] - Runtime version parsing

pub mod platform;
pub mod version;

pub use platform::Platform;
pub use version::RuntimeVersion;
