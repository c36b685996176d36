use fxhash::FxHashMap;
use inv_domain::config::DashboardConfig;
use inv_domain::registry::{FeatureSlice, InitializedSlice};
use inv_notify::Notifications;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[inv_derive::inv_error]
pub enum WorkspaceError {
    #[error("Workspace validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Workspace missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct WorkspaceInner {
    pub config: DashboardConfig,
    pub notifications: Notifications,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared state of a running front end: config, notifications and feature slices.
#[derive(Debug, Clone)]
pub struct Workspace {
    inner: Arc<WorkspaceInner>,
}

impl Workspace {
    #[must_use]
    pub fn builder() -> WorkspaceBuilder {
        WorkspaceBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, WorkspaceError> {
        self.get_slice::<T>().ok_or_else(|| WorkspaceError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(InitializedSlice::name)
    }

    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.inner.slices.len()
    }
}

impl Deref for Workspace {
    type Target = WorkspaceInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct WorkspaceBuilder {
    config: Option<DashboardConfig>,
    notifications: Option<Notifications>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl WorkspaceBuilder {
    #[must_use]
    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn notifications(mut self, notifications: Notifications) -> Self {
        self.notifications = Some(notifications);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// # Errors
    /// Returns [`WorkspaceError::Validation`] when no config was provided.
    pub fn build(self) -> Result<Workspace, WorkspaceError> {
        let config = self.config.ok_or_else(|| WorkspaceError::Validation {
            message: "DashboardConfig not provided".into(),
            context: None,
        })?;
        let notifications = self.notifications.unwrap_or_default();

        Ok(Workspace {
            inner: Arc::new(WorkspaceInner { config, notifications, slices: self.slices }),
        })
    }
}
