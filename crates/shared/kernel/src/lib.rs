//! Kernel utilities shared across slices and front ends.
//! Keep this crate lightweight: layered config loading and the slice [`workspace::Workspace`].
//!
//! ## Config loading
//! ```rust,no_run
//! use inv_kernel::config::load_config;
//! use inv_kernel::domain::config::DashboardConfig;
//!
//! let cfg: DashboardConfig = load_config(Some("inventra.toml")).unwrap();
//! ```
pub mod config;
pub mod prelude;
pub mod workspace;

pub use inv_domain as domain;
pub use inv_notify as notify;
