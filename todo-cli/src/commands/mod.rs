pub mod completion;
pub mod config;
pub mod session;
pub mod todos;

use anyhow::{Result, anyhow, bail};
use shared::{
    api::TodoClient, config::ClientConfig, controller::Controller, session::SessionStore,
};

use crate::terminal::TerminalView;
use session::FileSessionStore;

pub type CliController = Controller<TodoClient, FileSessionStore, TerminalView>;

pub fn controller(config: &ClientConfig) -> CliController {
    Controller::new(
        TodoClient::new(&config.api_base_url),
        FileSessionStore::for_config(config),
        TerminalView::new(),
    )
}

/// Turns the first error notification of the last action into a failure.
pub fn finish(controller: &CliController) -> Result<()> {
    match controller.view().take_error() {
        Some(message) => Err(anyhow!(message)),
        None => Ok(()),
    }
}

/// Restores the saved session and fails unless it is still valid.
pub async fn signed_in(controller: &CliController) -> Result<()> {
    if controller.session().get_token().is_none() {
        bail!("not logged in; run `todo login` first");
    }
    controller.start().await;
    finish(controller)?;
    if !controller.state().is_authenticated() {
        bail!("session expired; run `todo login` to sign in again");
    }
    Ok(())
}
