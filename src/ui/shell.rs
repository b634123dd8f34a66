// src/ui/shell.rs
use super::{Node, Tone};
use crate::config::DisplayConfig;
use crate::health::{DisplayState, HealthApi, StatusDisplay};
use std::sync::Arc;

/// Page frame: a title heading with the status display underneath.
pub struct App {
    title: String,
    status: StatusDisplay,
}

impl App {
    pub fn mount(config: &DisplayConfig, api: Arc<dyn HealthApi>) -> Self {
        Self {
            title: config.title.clone(),
            status: StatusDisplay::mount(api),
        }
    }

    pub fn status(&self) -> &StatusDisplay {
        &self.status
    }

    pub async fn settled(&mut self) -> DisplayState {
        self.status.settled().await
    }

    pub fn render(&self) -> Node {
        Node::group(
            Tone::Plain,
            vec![Node::heading(1, self.title.as_str()), self.status.render()],
        )
    }

    pub async fn unmount(self) {
        self.status.unmount().await;
    }
}
