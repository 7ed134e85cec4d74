//! Platform viewer dispatch

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Capability to open a saved image with the host's preferred application.
///
/// The session takes this as a seam so tests can observe launch requests
/// without spawning real processes.
pub trait Viewer {
    /// Ask the host to open `path`.
    fn open(&self, path: &Path) -> Result<Launch>;
}

/// What a viewer did with an open request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// A viewer process was spawned
    Spawned,
    /// The current platform has no known open command
    Unsupported,
}

/// Opens files through the platform's native open mechanism.
///
/// macOS uses `open`, Windows `cmd /C start`, Linux `xdg-open`. Any other
/// platform reports [`Launch::Unsupported`]. The child process is not
/// waited on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl SystemViewer {
    fn command(path: &Path) -> Option<Command> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            Some(cmd)
        } else if cfg!(target_os = "windows") {
            // The empty argument fills the title slot; without it `start`
            // treats a quoted path as the window title.
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg("start").arg("").arg(path);
            Some(cmd)
        } else if cfg!(target_os = "linux") {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            Some(cmd)
        } else {
            None
        }
    }
}

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<Launch> {
        let Some(mut cmd) = Self::command(path) else {
            return Ok(Launch::Unsupported);
        };

        // Fire and forget, the viewer outlives this process
        match cmd.spawn() {
            Ok(_) => Ok(Launch::Spawned),
            Err(e) => Err(Error::Viewer(format!(
                "{}: {}",
                cmd.get_program().to_string_lossy(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn command_targets_the_output_file() {
        let cmd = SystemViewer::command(Path::new("qr_code.png")).unwrap();
        assert_eq!(cmd.get_args().last(), Some(OsStr::new("qr_code.png")));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_uses_xdg_open() {
        let cmd = SystemViewer::command(Path::new("qr_code.png")).unwrap();
        assert_eq!(cmd.get_program(), OsStr::new("xdg-open"));
    }
}
