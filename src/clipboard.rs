use std::io::{self, Write};

use anyhow::Result;
use arboard::Clipboard;
use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    System,
    /// OSC 52 escape sequence; works over SSH if the terminal allows it.
    Terminal,
}

pub trait TextClipboard {
    fn copy_text(&mut self, text: &str) -> Result<CopyMethod>;
}

/// System clipboard via arboard, with an OSC 52 fallback when no clipboard
/// service is reachable (headless, SSH, missing X11/Wayland).
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = Clipboard::new()
            .inspect_err(|e| tracing::info!(error = %e, "system clipboard unavailable"))
            .ok();
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl TextClipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<CopyMethod> {
        if let Some(cb) = self.inner.as_mut() {
            match cb.set_text(text.to_string()) {
                Ok(()) => return Ok(CopyMethod::System),
                Err(e) => tracing::warn!(error = %e, "clipboard write failed, using OSC 52"),
            }
        }
        write_osc52(&mut io::stdout(), text)?;
        Ok(CopyMethod::Terminal)
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

fn write_osc52(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_wraps_base64_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_is_written_verbatim() {
        let mut buf = Vec::new();
        write_osc52(&mut buf, "Daily journal app").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), osc52_sequence("Daily journal app"));
    }
}
