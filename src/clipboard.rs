//! System clipboard access
//!
//! Writes are shelled out to the platform's clipboard tools, tried in order until one
//! accepts the text. A tool that is missing, breaks the pipe or exits non-zero is
//! skipped.

use crate::error::ClipboardError;
use crate::ui::toast::Toasts;
use std::io::Write;
use std::process::{Command, Stdio};

pub trait Clipboard: Send {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

type ClipboardTool = (&'static str, &'static [&'static str]);

const MACOS_TOOLS: &[ClipboardTool] = &[("pbcopy", &[])];
const WINDOWS_TOOLS: &[ClipboardTool] = &[("clip", &[])];
const UNIX_TOOLS: &[ClipboardTool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Clipboard backed by `pbcopy`, `wl-copy`, `xclip`, `xsel` or `clip.exe`
#[derive(Debug)]
pub struct SystemClipboard {
    tools: Vec<(String, Vec<String>)>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        let tools = Self::candidates()
            .iter()
            .map(|(program, args)| {
                (
                    program.to_string(),
                    args.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        Self::with_tools(tools)
    }

    /// Uses `tools` as (program, args) pairs, in order
    pub fn with_tools(tools: Vec<(String, Vec<String>)>) -> Self {
        Self { tools }
    }

    fn candidates() -> &'static [ClipboardTool] {
        if cfg!(target_os = "macos") {
            MACOS_TOOLS
        } else if cfg!(target_os = "windows") {
            WINDOWS_TOOLS
        } else {
            UNIX_TOOLS
        }
    }

    fn run_tool(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|_| ClipboardError::Unavailable)?;

        // stdin must be closed before waiting, or the tool never sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        if let Err(e) = written {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ClipboardError::Write(format!("{}: {}", program, e)));
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::Write(format!("{}: {}", program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Write(format!("{} exited with {}", program, status)))
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = ClipboardError::Unavailable;

        for (program, args) in &self.tools {
            match Self::run_tool(program, args, text) {
                Ok(()) => return Ok(()),
                Err(ClipboardError::Unavailable) => continue,
                Err(e) => {
                    tracing::debug!("Clipboard tool failed, trying next: {}", e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

/// Copies `text` and reports the outcome as a toast. Returns whether the copy succeeded.
pub fn copy_with_feedback(clipboard: &mut dyn Clipboard, text: &str, toasts: &mut Toasts) -> bool {
    match clipboard.write(text) {
        Ok(()) => {
            toasts.success("Code copied to clipboard!");
            true
        }
        Err(e) => {
            tracing::warn!("Copy failed: {}", e);
            toasts.error("Failed to copy code");
            false
        }
    }
}

/// In-memory clipboard for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("permission denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
