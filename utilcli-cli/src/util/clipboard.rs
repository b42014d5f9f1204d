//! 系统剪贴板

use std::io::{self, Write};
use std::process::{Command, Stdio};

pub trait Clipboard {
    fn copy(&self, text: &str) -> io::Result<()>;
}

/// Pipes text into the platform clipboard command.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: &'static str,
    args: &'static [&'static str],
}

impl SystemClipboard {
    pub fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    /// `clip` on Windows, `pbcopy` on macOS, `wl-copy` under Wayland, `xclip` elsewhere.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Self::new("clip", &[])
        } else if cfg!(target_os = "macos") {
            Self::new("pbcopy", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", &[])
        } else {
            Self::new("xclip", &["-selection", "clipboard"])
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> io::Result<()> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{} exited with {status}", self.program)))
        }
    }
}
