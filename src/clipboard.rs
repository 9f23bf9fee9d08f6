//! Best-effort clipboard writes.
//!
//! One backend is picked per host platform: `pbcopy` on macOS, the native
//! clipboard API (through `arboard`) on Windows, and `xclip -selection c`
//! everywhere else. Failures never escape as panics; callers get a
//! [`ClipboardOutcome`] and decide what to print.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

/// Errors raised by a clipboard backend.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not send text to {program}: {source}")]
    Write {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },
    #[error("{0}")]
    Native(String),
}

/// Something that can put text on the system clipboard.
pub trait ClipboardBackend {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// macOS: pipe into `pbcopy`.
#[derive(Debug, Default)]
pub struct PbcopyBackend;

impl ClipboardBackend for PbcopyBackend {
    fn name(&self) -> &'static str {
        "pbcopy"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        pipe_to_command("pbcopy", &[], text)
    }
}

/// X11: pipe into `xclip -selection c`.
#[derive(Debug, Default)]
pub struct XclipBackend;

impl ClipboardBackend for XclipBackend {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        pipe_to_command("xclip", &["-selection", "c"], text)
    }
}

/// Windows: native clipboard through `arboard`.
///
/// The clipboard handle is opened lazily on each write, so constructing the
/// backend never fails.
#[derive(Debug, Default)]
pub struct ArboardBackend;

impl ClipboardBackend for ArboardBackend {
    fn name(&self) -> &'static str {
        "arboard"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Native(format!("clipboard init: {}", e)))?;
        ctx.set_text(text.to_owned())
            .map_err(|e| ClipboardError::Native(format!("clipboard set: {}", e)))
    }
}

/// Spawn `program` with `args`, write `text` to its stdin and wait for it.
pub fn pipe_to_command(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    debug!("running {} {:?}", program, args);
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        // xclip forks to keep serving the selection; it must not hold our
        // stdout/stderr open after we return.
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Dropping stdin closes the pipe so the child sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Err(std::io::Error::other("stdin not captured")),
    };

    let status = child.wait().map_err(|source| ClipboardError::Write {
        program: program.to_string(),
        source,
    })?;

    written.map_err(|source| ClipboardError::Write {
        program: program.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(ClipboardError::Status {
            program: program.to_string(),
            status,
        });
    }
    Ok(())
}

/// Host platform as far as clipboard selection is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    X11,
}

impl Platform {
    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::X11,
        }
    }

    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// The clipboard backend used on this platform.
    pub fn backend(self) -> Box<dyn ClipboardBackend> {
        match self {
            Platform::MacOs => Box::new(PbcopyBackend),
            Platform::Windows => Box::new(ArboardBackend),
            Platform::X11 => Box::new(XclipBackend),
        }
    }
}

/// Result of a clipboard write as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    /// The write failed; carries a human-readable reason.
    Failed(String),
}

impl ClipboardOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ClipboardOutcome::Copied)
    }
}

/// Write `text` through `backend`, folding any error into the outcome.
pub fn write_with(backend: &mut dyn ClipboardBackend, text: &str) -> ClipboardOutcome {
    match backend.write_text(text) {
        Ok(()) => {
            debug!("copied {} bytes via {}", text.len(), backend.name());
            ClipboardOutcome::Copied
        }
        Err(e) => {
            debug!("{} failed: {:?}", backend.name(), e);
            ClipboardOutcome::Failed(e.to_string())
        }
    }
}

/// Select the backend for the host platform.
pub fn current_backend() -> Box<dyn ClipboardBackend> {
    let platform = Platform::current();
    let backend = platform.backend();
    debug!("platform {:?} uses {}", platform, backend.name());
    backend
}

/// Copy `text` to the clipboard of the current platform.
pub fn write_clipboard(text: &str) -> ClipboardOutcome {
    write_with(current_backend().as_mut(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl ClipboardBackend for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Native("no display".into()))
        }
    }

    #[test]
    fn platform_selection() {
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("linux"), Platform::X11);
        assert_eq!(Platform::from_os("freebsd"), Platform::X11);

        assert_eq!(Platform::MacOs.backend().name(), "pbcopy");
        assert_eq!(Platform::Windows.backend().name(), "arboard");
        assert_eq!(Platform::X11.backend().name(), "xclip");

        let expected = Platform::current().backend().name();
        assert_eq!(current_backend().name(), expected);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = pipe_to_command("gen-comment-no-such-clipboard-tool", &[], "x").unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn { .. }));
        assert!(err.to_string().starts_with("could not run gen-comment-no-such-clipboard-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn pipes_text_to_program() {
        assert!(pipe_to_command("cat", &[], "/* == hi == */").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_error() {
        let err = pipe_to_command("sh", &["-c", "cat >/dev/null; exit 3"], "x").unwrap_err();
        assert!(matches!(err, ClipboardError::Status { .. }));
    }

    #[test]
    fn failure_becomes_outcome() {
        let outcome = write_with(&mut Broken, "text");
        assert!(!outcome.is_ok());
        assert_eq!(outcome, ClipboardOutcome::Failed("no display".into()));
    }

    #[test]
    fn clipboard_copy_no_panic() {
        // Best-effort: headless CI usually has no clipboard; only require no panic.
        let _ = write_clipboard("test");
    }
}
