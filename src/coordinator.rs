//! Ordered, failure-isolated logout sequence.

use crate::{
    diagnostics::{DiagnosticSink, TracingSink},
    subsystems::{
        DesktopSubsystems, DownloadManager, FeatureFlagCache, SessionService, SimilarityService,
        TeardownFuture, WorkerManager,
    },
};
use anyhow::Result;
use std::sync::Arc;
use tracing::error;

/// One teardown step: a label for diagnostics plus the deferred operation.
///
/// The action is a thunk rather than a future so no step starts any work
/// before every step ahead of it has fully resolved.
struct Step<'a> {
    label: &'static str,
    action: Box<dyn FnOnce() -> TeardownFuture<'a> + Send + 'a>,
}

impl<'a> Step<'a> {
    fn new<F>(label: &'static str, action: F) -> Self
    where
        F: FnOnce() -> TeardownFuture<'a> + Send + 'a,
    {
        Self {
            label,
            action: Box::new(action),
        }
    }
}

/// Adapts a synchronous teardown call to the step future shape.
fn sync_step<'a>(f: impl FnOnce() -> Result<()> + Send + 'a) -> TeardownFuture<'a> {
    Box::pin(async move { f() })
}

/// Runs the logout teardown sequence against the injected collaborators.
///
/// The coordinator is stateless between runs; each call to
/// [`perform_logout`](Self::perform_logout) is independent.
#[derive(Clone)]
pub struct LogoutCoordinator {
    worker: Arc<dyn WorkerManager>,
    session: Arc<dyn SessionService>,
    feature_flags: Arc<dyn FeatureFlagCache>,
    downloads: Arc<dyn DownloadManager>,
    similarity: Arc<dyn SimilarityService>,
    desktop: Option<DesktopSubsystems>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl LogoutCoordinator {
    /// Builds a coordinator over the always-present subsystems, plus the
    /// desktop-only ones when running inside a desktop host. Step failures
    /// are reported through [`TracingSink`] unless
    /// [`with_diagnostics`](Self::with_diagnostics) overrides it.
    #[must_use]
    pub fn new(
        worker: Arc<dyn WorkerManager>,
        session: Arc<dyn SessionService>,
        feature_flags: Arc<dyn FeatureFlagCache>,
        downloads: Arc<dyn DownloadManager>,
        similarity: Arc<dyn SimilarityService>,
        desktop: Option<DesktopSubsystems>,
    ) -> Self {
        Self {
            worker,
            session,
            feature_flags,
            downloads,
            similarity,
            desktop,
            diagnostics: Arc::new(TracingSink),
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Runs the logout sequence. Guaranteed not to surface a failure.
    ///
    /// Every step failure is forwarded to the diagnostic sink under that
    /// step's label and then discarded, and the sequence itself runs inside
    /// a spawned task so even a panicking collaborator cannot propagate out
    /// of this call. Steps run strictly in order, each awaited to completion
    /// before the next begins; once started the sequence cannot be
    /// cancelled.
    pub async fn perform_logout(&self) {
        let coordinator = self.clone();
        let sequence = tokio::spawn(async move { coordinator.run_steps().await });
        if let Err(err) = sequence.await {
            error!("Logout sequence aborted: {err}");
        }
    }

    async fn run_steps(&self) {
        // Workers go first: later steps clear persistent storage a worker
        // could still be reading or writing.
        let mut steps = vec![
            Step::new("worker", move || self.worker.terminate()),
            Step::new("session", move || self.session.invalidate_session()),
            Step::new("feature-flag", move || {
                sync_step(move || self.feature_flags.clear_session_state())
            }),
            Step::new("download", move || sync_step(move || self.downloads.logout())),
            Step::new("similarity", move || self.similarity.logout()),
        ];

        if let Some(desktop) = &self.desktop {
            steps.push(Step::new("ml", move || desktop.ml.logout_ml()));
            steps.push(Step::new("export", move || {
                sync_step(move || desktop.export.disable_continuous_export())
            }));
            steps.push(Step::new("host-bridge", move || desktop.bridge.logout()));
        }

        for step in steps {
            if let Err(err) = (step.action)().await {
                self.diagnostics.error(step.label, &err);
            }
        }
    }
}
