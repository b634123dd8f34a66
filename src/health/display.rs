// src/health/display.rs
use super::{CheckFailure, HealthApi, HealthStatus};
use crate::ui::{Node, Tone};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

pub const DISPLAY_HEADING: &str = "Backend Health Check";

/// `Idle -> Success | Errored`. Both terminal states are final for the
/// lifetime of one mounted display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Success(HealthStatus),
    Errored(CheckFailure),
}

impl DisplayState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DisplayState::Idle)
    }
}

/// Renders the status heading followed by whatever the state allows.
pub fn render_state(state: &DisplayState) -> Node {
    let mut children = vec![Node::heading(2, DISPLAY_HEADING)];

    match state {
        DisplayState::Idle => {}
        DisplayState::Success(health) => children.push(Node::group(
            Tone::Success,
            vec![
                Node::text(format!("Status: {}", health.status)),
                Node::text(format!("Message: {}", health.message)),
            ],
        )),
        DisplayState::Errored(failure) => {
            children.push(Node::toned(Tone::Error, failure.user_message()))
        }
    }

    Node::group(Tone::Plain, children)
}

/// Shows backend health. Mounting issues exactly one health request;
/// unmounting (or dropping) cancels it if it is still in flight.
pub struct StatusDisplay {
    state_rx: watch::Receiver<DisplayState>,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl StatusDisplay {
    /// Must be called from within a tokio runtime.
    pub fn mount(api: Arc<dyn HealthApi>) -> Self {
        let (state_tx, state_rx) = watch::channel(DisplayState::Idle);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let request_id = Uuid::new_v4();
        let span = info_span!("health_check", %request_id);
        let task = tokio::spawn(
            run_check(api, request_id, state_tx, shutdown_rx).instrument(span),
        );

        Self {
            state_rx,
            shutdown_tx,
            task: Some(task),
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state_rx.borrow().clone()
    }

    /// A receiver that changes once, when the check reaches a terminal state.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.state_rx.clone()
    }

    /// Waits for a terminal state. Returns the current state if the check
    /// was cancelled before it resolved.
    pub async fn settled(&mut self) -> DisplayState {
        let settled = self
            .state_rx
            .wait_for(DisplayState::is_terminal)
            .await
            .map(|state| state.clone());

        settled.unwrap_or_else(|_| self.state())
    }

    pub fn render(&self) -> Node {
        render_state(&self.state_rx.borrow())
    }

    pub async fn unmount(mut self) {
        let _ = self.shutdown_tx.send(true);

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(%e, "health check task ended abnormally");
            }
        }
    }
}

impl Drop for StatusDisplay {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

async fn run_check(
    api: Arc<dyn HealthApi>,
    request_id: Uuid,
    state_tx: watch::Sender<DisplayState>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    debug!("starting health check");

    let result = tokio::select! {
        biased;
        _ = shutdown_requested(&mut shutdown_rx) => {
            debug!("display unmounted before the health check resolved");
            return;
        }
        result = api.fetch_health(request_id) => result,
    };

    // Teardown may have raced the response.
    if *shutdown_rx.borrow() {
        debug!("display unmounted, dropping health check result");
        return;
    }

    let next = match result {
        Ok(health) => {
            info!(status = %health.status, message = %health.message, "health check succeeded");
            DisplayState::Success(health)
        }
        Err(e) => {
            error!(error = %e, kind = %e.kind(), "health check failed");
            DisplayState::Errored(CheckFailure::from(&e))
        }
    };

    state_tx.send_replace(next);
}

// Resolves on an explicit shutdown or when the display is gone.
async fn shutdown_requested(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}
