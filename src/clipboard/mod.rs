//! Copy answers and contact details to the system clipboard.
//!
//! Text is reduced to plain form first: answers lose their `**` emphasis markers and
//! providers are copied as a short contact card.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use tracing::debug;

use crate::models::{AnswerResult, ServiceProvider};

/// Longest text accepted for copying
const MAX_COPY_BYTES: usize = 64 * 1024;

pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// arboard handle, opened per copy
struct ArboardClipboard(Clipboard);

impl ArboardClipboard {
    fn open() -> Result<Self> {
        Clipboard::new().map(Self).context("Clipboard unavailable")
    }
}

impl ClipboardProvider for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0.set_text(text).context("Clipboard rejected the text")
    }
}

fn check_copyable(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Nothing to copy");
    }
    if text.len() > MAX_COPY_BYTES {
        bail!("Text too large to copy ({} bytes, max {})", text.len(), MAX_COPY_BYTES);
    }
    Ok(())
}

/// Answer text with emphasis markers removed, followed by its sources
pub fn plain_answer(result: &AnswerResult) -> String {
    let mut text = result.answer_text.replace("**", "");
    if !result.source_list.is_empty() {
        text.push_str("\n\nSources:");
        for source in &result.source_list {
            text.push_str("\n- ");
            text.push_str(source);
        }
    }
    text
}

/// Name, phone, email and website (when listed), one per line
pub fn contact_card(provider: &ServiceProvider) -> String {
    let mut lines = vec![provider.name.as_str(), provider.phone.as_str(), provider.email.as_str()];
    if let Some(website) = provider.website.as_deref() {
        lines.push(website);
    }
    lines.join("\n")
}

pub fn copy_with_provider(text: &str, clipboard: &mut dyn ClipboardProvider) -> Result<()> {
    check_copyable(text)?;
    clipboard.set_text(text)?;
    debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}

/// Copy text to the system clipboard.
///
/// The text is checked before the clipboard is opened, so blank input fails the same way on
/// headless machines.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    check_copyable(text)?;
    copy_with_provider(text, &mut ArboardClipboard::open()?)
}
