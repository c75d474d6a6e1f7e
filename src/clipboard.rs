//! Clipboard integration
//!
//! Copies rendered output through whatever clipboard command the platform
//! provides. Every step is best-effort; failure is reported to the caller,
//! never fatal.

use std::io::Write;
use std::process::{Command, Stdio};

/// Try to copy `text` to the system clipboard. Returns true on success.
pub fn copy_to_clipboard(text: &str) -> bool {
    candidates().iter().any(|command| pipe_to(command, text))
}

#[cfg(target_os = "macos")]
fn candidates() -> &'static [&'static [&'static str]] {
    &[&["pbcopy"]]
}

#[cfg(target_os = "windows")]
fn candidates() -> &'static [&'static [&'static str]] {
    &[&["clip"]]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn candidates() -> &'static [&'static [&'static str]] {
    // Wayland first, then the X11 tools.
    &[
        &["wl-copy"],
        &["xclip", "-selection", "clipboard"],
        &["xsel", "--clipboard", "--input"],
    ]
}

fn pipe_to(command: &[&str], text: &str) -> bool {
    let mut child = match Command::new(command[0])
        .args(&command[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(_) => return false,
    };

    if let Some(stdin) = child.stdin.as_mut() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
    }
    drop(child.stdin.take());

    child.wait().map(|status| status.success()).unwrap_or(false)
}
