use std::io::{Write, stdout};
use std::time::Instant;

use base64::Engine;

use crate::app::{App, Message, Model};

impl App {
    /// Run the side effects a message implies, after `update` has applied
    /// its pure state change.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if matches!(msg, Message::CopyMarkdown) {
            // Fire-and-forget: a failed write is logged and otherwise
            // invisible — the badge simply never appears.
            match copy_to_clipboard(model.copy_command.as_deref(), &model.markdown) {
                Ok(()) => {
                    tracing::debug!(bytes = model.markdown.len(), "copied markdown");
                    model.mark_copied(Instant::now());
                }
                Err(err) => {
                    tracing::debug!(error = %err, "clipboard write failed");
                }
            }
        }
    }
}

/// Write `text` to the system clipboard.
///
/// Precedence: the configured command, then `pbcopy` on macOS, then an
/// OSC 52 escape that asks the terminal itself to set the clipboard.
fn copy_to_clipboard(command: Option<&str>, text: &str) -> std::io::Result<()> {
    if let Some(command) = command {
        return copy_via_command(command, text);
    }
    #[cfg(target_os = "macos")]
    {
        if copy_via_command("pbcopy", text).is_ok() {
            return Ok(());
        }
    }
    copy_to_clipboard_osc52(text)
}

/// Pipe `text` into an external clipboard command (`wl-copy`, `xclip -sel c`, ...).
fn copy_via_command(command: &str, text: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(std::io::Error::other("empty copy command"));
    };
    let mut child = Command::new(program)
        .args(parts)
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
        Err(std::io::Error::other(format!("{program} failed")))
    }
}

fn copy_to_clipboard_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}
