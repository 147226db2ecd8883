//! Terminal implementations of the share seams for the `share` CLI command.

use std::io::Write;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::share::{Clipboard, ClipboardError, SelectionCopy};

/// Clipboard helpers tried in order; the first one installed wins.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Pipes the text into the first available system clipboard command.
pub struct CommandClipboard {
    commands: Vec<(String, Vec<String>)>,
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::with_commands(CLIPBOARD_COMMANDS)
    }
}

impl CommandClipboard {
    pub fn with_commands(commands: &[(&str, &[&str])]) -> Self {
        Self {
            commands: commands
                .iter()
                .map(|(program, args)| {
                    (
                        program.to_string(),
                        args.iter().map(|a| a.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Waits for the exit status only. xclip, xsel and wl-copy fork a child
    /// that keeps serving the selection, so no output pipe is ever read.
    async fn run(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Command {
                command: program.to_string(),
                message: status.to_string(),
            })
        }
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = ClipboardError::Unavailable;
        for (program, args) in &self.commands {
            match Self::run(program, args, text).await {
                Ok(()) => {
                    debug!("Copied with {program}");
                    return Ok(());
                }
                Err(ClipboardError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    continue;
                }
                Err(e) => {
                    debug!(error = %e, "Clipboard command {program} failed");
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}

/// Prints the text on a line of its own so the user can select and copy it.
pub struct TerminalSelection;

impl SelectionCopy for TerminalSelection {
    fn select_and_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_missing_commands_are_unavailable() {
        let clipboard = CommandClipboard::with_commands(&[("definitely-not-a-clipboard-tool", &[])]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable));
    }

    #[tokio::test]
    async fn test_no_commands_is_unavailable() {
        let clipboard = CommandClipboard::with_commands(&[]);
        assert!(matches!(
            clipboard.write_text("x").await,
            Err(ClipboardError::Unavailable)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_first_working_command_wins() {
        let clipboard = CommandClipboard::with_commands(&[
            ("definitely-not-a-clipboard-tool", &[]),
            ("sh", &["-c", "cat > /dev/null"]),
        ]);
        assert!(clipboard.write_text("https://example.com").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_reports_exit_status() {
        let clipboard = CommandClipboard::with_commands(&[("sh", &["-c", "cat > /dev/null; exit 3"])]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(
            matches!(&err, ClipboardError::Command { command, message } if command == "sh" && message.contains('3')),
            "unexpected error: {err:?}"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_forking_clipboard_tool_returns_on_exit() {
        // Exits at once but leaves a child holding the inherited descriptors,
        // the way xclip and wl-copy keep serving the selection.
        let clipboard = CommandClipboard::with_commands(&[(
            "sh",
            &["-c", "cat > /dev/null; (sleep 20) & exit 0"],
        )]);
        let copied = tokio::time::timeout(Duration::from_secs(5), clipboard.write_text("x"))
            .await
            .expect("clipboard write blocked on the forked child");
        assert!(copied.is_ok());
    }
}
