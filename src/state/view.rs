//! Dashboard view lifecycle
//!
//! Every dashboard runs the same cycle: load its state from the API, apply
//! server-acknowledged mutations locally, and report each outcome through
//! the notification service. [`Dashboard`] implements that cycle once; the
//! concrete views only supply the request futures and the reconcile step.
//!
//! ```text
//! Idle -> Loading -> Loaded | LoadFailed
//! Loaded -> Mutating -> Loaded (reconciled) | Loaded (unchanged, error shown)
//! ```
//!
//! Each dashboard owns a [`CancellationToken`]. After [`Dashboard::teardown`]
//! any in-flight operation resolves to [`Outcome::Discarded`]: no state is
//! touched and no notification is shown.

use std::fmt;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use crate::services::NotificationService;
use crate::utils::errors::{HostelMateError, Result};
use crate::utils::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
    Mutating,
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewPhase::Idle => "idle",
            ViewPhase::Loading => "loading",
            ViewPhase::Loaded => "loaded",
            ViewPhase::LoadFailed => "load_failed",
            ViewPhase::Mutating => "mutating",
        };
        f.write_str(name)
    }
}

/// What became of one load or mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Acknowledged and applied to local state
    Applied,
    /// Failed; local state unchanged, the message was shown to the user
    Failed(String),
    /// The view was torn down before the result arrived
    Discarded,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// User-facing texts for one operation
#[derive(Debug, Clone, Copy)]
pub struct OperationMessages {
    pub success: Option<&'static str>,
    /// Shown when the server gives no message of its own
    pub failure: &'static str,
    /// Shown instead of `failure` for network and malformed-response errors
    pub transport: Option<&'static str>,
}

impl OperationMessages {
    pub const fn new(success: Option<&'static str>, failure: &'static str) -> Self {
        Self {
            success,
            failure,
            transport: None,
        }
    }

    pub const fn with_transport(mut self, transport: &'static str) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Text for a failed operation
    pub fn error_text(&self, error: &HostelMateError) -> String {
        if error.is_transport() {
            self.transport.unwrap_or(self.failure).to_string()
        } else {
            error.user_message(self.failure)
        }
    }
}

/// Generic fetch / reconcile / notify state holder for one view instance
#[derive(Debug)]
pub struct Dashboard<S> {
    name: &'static str,
    phase: ViewPhase,
    data: S,
    lifetime: CancellationToken,
    notifications: NotificationService,
}

impl<S: Default> Dashboard<S> {
    pub fn new(name: &'static str, notifications: NotificationService) -> Self {
        Self {
            name,
            phase: ViewPhase::Idle,
            data: S::default(),
            lifetime: CancellationToken::new(),
            notifications,
        }
    }
}

impl<S> Dashboard<S> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn data(&self) -> &S {
        &self.data
    }

    /// Token tied to this view's lifetime; cancel it to tear the view down
    pub fn lifetime(&self) -> CancellationToken {
        self.lifetime.clone()
    }

    pub fn teardown(&self) {
        self.lifetime.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    /// Run `operation` unless the view is torn down first
    pub async fn guard<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        guarded(&self.lifetime, operation).await
    }

    /// Load (or reload) the view state
    pub async fn load<F>(&mut self, fetch: F, messages: &OperationMessages) -> Outcome
    where
        F: Future<Output = Result<S>>,
    {
        if self.is_torn_down() {
            logging::log_discarded(self.name, "load");
            return Outcome::Discarded;
        }

        self.begin_load();
        let result = self.guard(fetch).await;
        self.complete_load(result, messages)
    }

    /// Enter `Loading`; used directly by views that assemble several fetches
    pub fn begin_load(&mut self) {
        self.phase = ViewPhase::Loading;
    }

    /// Finish a load started with [`Dashboard::begin_load`]
    pub fn complete_load(&mut self, result: Result<S>, messages: &OperationMessages) -> Outcome {
        match result {
            Err(HostelMateError::Cancelled) => {
                logging::log_discarded(self.name, "load");
                Outcome::Discarded
            }
            Ok(data) => {
                self.data = data;
                self.phase = ViewPhase::Loaded;
                if let Some(success) = messages.success {
                    self.notifications.success(success);
                }
                Outcome::Applied
            }
            Err(error) => {
                self.phase = ViewPhase::LoadFailed;
                let text = messages.error_text(&error);
                logging::log_view_error(self.name, &error, Some("load"));
                self.notifications.error(text.clone());
                Outcome::Failed(text)
            }
        }
    }

    /// Record a failed load whose errors were already reported piecemeal
    pub fn mark_load_failed(&mut self) {
        if !self.is_torn_down() {
            self.phase = ViewPhase::LoadFailed;
        }
    }

    /// Send a mutation and, once acknowledged, apply `reconcile` to the state.
    ///
    /// Only allowed from `Loaded`. On failure the state is left exactly as it
    /// was and an error notification is shown.
    pub async fn mutate<R, F>(
        &mut self,
        operation: F,
        messages: &OperationMessages,
        reconcile: impl FnOnce(&mut S, R),
    ) -> Result<Outcome>
    where
        F: Future<Output = Result<R>>,
    {
        if self.is_torn_down() {
            logging::log_discarded(self.name, "mutate");
            return Ok(Outcome::Discarded);
        }

        if self.phase != ViewPhase::Loaded {
            return Err(HostelMateError::InvalidStateTransition {
                from: self.phase.to_string(),
                to: ViewPhase::Mutating.to_string(),
            });
        }

        let mutating = MutatingPhase::enter(&mut self.phase);
        let result = guarded(&self.lifetime, operation).await;
        drop(mutating);

        Ok(match result {
            Err(HostelMateError::Cancelled) => {
                logging::log_discarded(self.name, "mutate");
                Outcome::Discarded
            }
            Ok(acknowledged) => {
                reconcile(&mut self.data, acknowledged);
                if let Some(success) = messages.success {
                    self.notifications.success(success);
                }
                Outcome::Applied
            }
            Err(error) => {
                let text = messages.error_text(&error);
                logging::log_view_error(self.name, &error, Some("mutate"));
                self.notifications.error(text.clone());
                Outcome::Failed(text)
            }
        })
    }

    /// Run an operation that does not change list state, e.g. an export.
    ///
    /// Allowed in any phase. Returns the acknowledged value when applied.
    pub async fn run<R, F>(&self, operation: F, messages: &OperationMessages) -> (Outcome, Option<R>)
    where
        F: Future<Output = Result<R>>,
    {
        match self.guard(operation).await {
            Err(HostelMateError::Cancelled) => {
                logging::log_discarded(self.name, "run");
                (Outcome::Discarded, None)
            }
            Ok(value) => {
                if let Some(success) = messages.success {
                    self.notifications.success(success);
                }
                (Outcome::Applied, Some(value))
            }
            Err(error) => {
                let text = messages.error_text(&error);
                logging::log_view_error(self.name, &error, Some("run"));
                self.notifications.error(text.clone());
                (Outcome::Failed(text), None)
            }
        }
    }

    /// Show an error unless the view is gone
    pub fn notify_error(&self, message: impl Into<String>) {
        if self.is_torn_down() {
            logging::log_discarded(self.name, "notify");
            return;
        }
        self.notifications.error(message);
    }
}

async fn guarded<T, F>(lifetime: &CancellationToken, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if lifetime.is_cancelled() {
        return Err(HostelMateError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = lifetime.cancelled() => Err(HostelMateError::Cancelled),
        result = operation => {
            if lifetime.is_cancelled() {
                Err(HostelMateError::Cancelled)
            } else {
                result
            }
        }
    }
}

/// Holds a view in `Mutating`; returns it to `Loaded` when dropped, even if
/// the mutation future itself is dropped mid-flight
struct MutatingPhase<'a>(&'a mut ViewPhase);

impl<'a> MutatingPhase<'a> {
    fn enter(phase: &'a mut ViewPhase) -> Self {
        *phase = ViewPhase::Mutating;
        Self(phase)
    }
}

impl Drop for MutatingPhase<'_> {
    fn drop(&mut self) {
        *self.0 = ViewPhase::Loaded;
    }
}
