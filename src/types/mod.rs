//! Type definitions

pub mod attendance;
pub mod credentials;
pub mod permission;
pub mod profile;
pub mod ui;

pub use attendance::*;
pub use credentials::*;
pub use permission::*;
pub use profile::*;
pub use ui::*;
