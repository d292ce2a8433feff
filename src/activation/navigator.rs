// src/activation/navigator.rs - Opening links outside the hub

use std::process::{Command, ExitStatus, Stdio};
use tokio::process::{Child, Command as AsyncCommand};

use crate::error::{LinkHubError, Result};
use crate::log_debug;

/// Handle to a context a link was opened in.
pub trait BrowsingContext: Send {
    /// `None` when the handle cannot report its status.
    fn is_closed(&mut self) -> Option<bool>;
}

/// Host capability for opening a URL in a new, unrelated context.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// `Ok(None)` means the host refused to hand out a context at all.
    fn open_in_new_context(&self, url: &str) -> Result<Option<Box<dyn BrowsingContext>>>;
}

/// Opens links in the platform's default browser.
///
/// The launcher is spawned detached from the terminal: no inherited stdio, its
/// own process, nothing linking it back to the hub.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for SystemBrowser {
    fn open_in_new_context(&self, url: &str) -> Result<Option<Box<dyn BrowsingContext>>> {
        spawn_first(open::commands(url), url)
    }
}

/// Spawn the first launcher that exists. Launchers that are all missing, or
/// no launcher at all, mean there is nowhere to open the link.
fn spawn_first(launchers: Vec<Command>, url: &str) -> Result<Option<Box<dyn BrowsingContext>>> {
    let mut last_error = None;
    for launcher in launchers {
        let program = launcher.get_program().to_string_lossy().into_owned();
        let mut command = AsyncCommand::from(launcher);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false);

        match command.spawn() {
            Ok(child) => {
                log_debug!("Spawned {} for {}", program, url);
                return Ok(Some(Box::new(LauncherProcess { child })));
            }
            Err(e) => {
                log_debug!("Launcher {} unavailable: {}", program, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Some(e) => Err(LinkHubError::Navigation(format!("failed to launch browser: {}", e))),
        None => Ok(None),
    }
}

/// A spawned launcher. It is closed once it has exited unsuccessfully; a
/// launcher that exits cleanly has handed the URL over to the browser.
struct LauncherProcess {
    child: Child,
}

impl BrowsingContext for LauncherProcess {
    fn is_closed(&mut self) -> Option<bool> {
        closed_from(self.child.try_wait())
    }
}

fn closed_from(status: std::io::Result<Option<ExitStatus>>) -> Option<bool> {
    match status {
        Ok(Some(status)) => Some(!status.success()),
        Ok(None) => Some(false),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_classification() {
        assert_eq!(closed_from(Ok(None)), Some(false));
        assert_eq!(closed_from(Err(io::Error::new(io::ErrorKind::Other, "wait failed"))), None);
    }

    #[tokio::test]
    async fn test_no_launchers_means_no_context() {
        let context = spawn_first(Vec::new(), "https://github.com/Chdwtm").unwrap();
        assert!(context.is_none());
    }

    #[tokio::test]
    async fn test_missing_launchers_mean_no_context() {
        let launchers = vec![
            Command::new("linkhub-no-such-launcher"),
            Command::new("linkhub-no-such-launcher-either"),
        ];
        let context = spawn_first(launchers, "https://github.com/Chdwtm").unwrap();
        assert!(context.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_status_decides_closed() {
        let mut failed = AsyncCommand::new("false").spawn().unwrap();
        failed.wait().await.unwrap();
        assert_eq!(LauncherProcess { child: failed }.is_closed(), Some(true));

        let mut handed_over = AsyncCommand::new("true").spawn().unwrap();
        handed_over.wait().await.unwrap();
        assert_eq!(LauncherProcess { child: handed_over }.is_closed(), Some(false));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_running_launcher_is_open() {
        let child = AsyncCommand::new("sleep").arg("5").kill_on_drop(true).spawn().unwrap();
        let mut context = LauncherProcess { child };
        assert_eq!(context.is_closed(), Some(false));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawned_launcher_becomes_a_context() {
        let mut context = spawn_first(vec![Command::new("true")], "https://github.com/Chdwtm")
            .unwrap()
            .expect("launcher spawned");
        // Either still starting up or already handed over; never closed
        assert_ne!(context.is_closed(), Some(true));
    }
}
