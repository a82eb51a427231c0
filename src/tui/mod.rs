// Interactive terminal front-end: Assistant, Training Log, Providers and Profile tabs
mod app;
mod events;
mod form;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::{App, Tab};
use tracing::info;

use self::terminal::TerminalGuard;
use crate::config::AppConfig;
use crate::directory::SystemLauncher;
use crate::training::FilesystemLibrary;

/// Run the interactive TUI until the user quits
pub fn run_interactive(config: &AppConfig) -> Result<()> {
    info!(delay_ms = config.search.delay_ms, "starting interactive session");
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(config, Box::new(SystemLauncher), Box::new(FilesystemLibrary));

    let result = app.run(guard.terminal_mut());
    info!("interactive session ended");
    result
}
