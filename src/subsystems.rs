//! Collaborator contracts consumed during logout.
//!
//! Each trait covers exactly the operation the coordinator invokes at
//! teardown time; the subsystems behind them live elsewhere and are out of
//! scope here. Async operations return a boxed future so the traits stay
//! object-safe and can be held as `Arc<dyn …>`.

use anyhow::Result;
use std::{future::Future, pin::Pin, sync::Arc};

/// Future returned by async teardown operations.
pub type TeardownFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Manager for background workers and their execution contexts.
pub trait WorkerManager: Send + Sync {
    /// Stops all background workers. Runs before anything else so no worker
    /// races against the storage teardown of the later steps.
    fn terminate(&self) -> TeardownFuture<'_>;
}

/// Remote authentication service owning the persisted session.
pub trait SessionService: Send + Sync {
    /// Revokes credentials and clears the primary persisted session state.
    fn invalidate_session(&self) -> TeardownFuture<'_>;
}

/// Session-scoped cache of feature flag state.
pub trait FeatureFlagCache: Send + Sync {
    /// # Errors
    /// Returns an error if the cached session state cannot be cleared.
    fn clear_session_state(&self) -> Result<()>;
}

/// Download and cache manager for remote content.
pub trait DownloadManager: Send + Sync {
    /// # Errors
    /// Returns an error if cached downloads cannot be released.
    fn logout(&self) -> Result<()>;
}

/// Content-similarity / embedding service.
pub trait SimilarityService: Send + Sync {
    fn logout(&self) -> TeardownFuture<'_>;
}

/// ML subsystem hosted by the desktop shell.
pub trait MlSubsystem: Send + Sync {
    fn logout_ml(&self) -> TeardownFuture<'_>;
}

/// Manager for the continuous background export process.
pub trait ExportManager: Send + Sync {
    /// # Errors
    /// Returns an error if the continuous export cannot be disabled.
    fn disable_continuous_export(&self) -> Result<()>;
}

/// Bridge to the desktop host shell itself.
pub trait HostBridge: Send + Sync {
    fn logout(&self) -> TeardownFuture<'_>;
}

/// Collaborators that exist only when running inside a desktop host.
///
/// Passing `Some` of this to the coordinator is what enables the
/// desktop-only teardown steps; there is no ambient capability flag.
#[derive(Clone)]
pub struct DesktopSubsystems {
    pub ml: Arc<dyn MlSubsystem>,
    pub export: Arc<dyn ExportManager>,
    pub bridge: Arc<dyn HostBridge>,
}

impl DesktopSubsystems {
    #[must_use]
    pub fn new(
        ml: Arc<dyn MlSubsystem>,
        export: Arc<dyn ExportManager>,
        bridge: Arc<dyn HostBridge>,
    ) -> Self {
        Self { ml, export, bridge }
    }
}
