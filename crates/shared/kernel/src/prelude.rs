pub use crate::config::{ConfigError, load_config};
pub use crate::workspace::{Workspace, WorkspaceBuilder, WorkspaceError};
pub use inv_domain::config::DashboardConfig;
pub use inv_domain::features::Page;
pub use inv_domain::registry::{FeatureSlice, InitializedSlice};
pub use inv_notify::{Notifications, Toast, ToastReceiverExt, ToastVariant};
