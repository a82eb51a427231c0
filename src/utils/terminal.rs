//! Cleaning user-typed text before it is drawn.
//!
//! Dog names, notes and queries come straight from the keyboard or the command line. Escape
//! sequences in them would be interpreted by the terminal, so they are removed before display.

#[derive(Clone, Copy, PartialEq)]
enum Scan {
    Text,
    Escape,
    /// `ESC [` ... final byte in `@..=~`
    Csi,
    /// `ESC ]` ... terminated by BEL or `ESC \`
    Osc,
    OscEscape,
}

/// Remove ANSI CSI/OSC sequences and control characters other than tab and newline.
///
/// ```
/// use dog_training_assistant::utils::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[1mMax\x1b[0m"), "Max");
/// ```
pub fn sanitize_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = Scan::Text;

    for ch in text.chars() {
        state = match (state, ch) {
            (Scan::Text, '\x1b') => Scan::Escape,
            (Scan::Text, '\t' | '\n') => {
                out.push(ch);
                Scan::Text
            }
            (Scan::Text, c) if c.is_control() => Scan::Text,
            (Scan::Text, c) => {
                out.push(c);
                Scan::Text
            }
            (Scan::Escape, '[') => Scan::Csi,
            (Scan::Escape, ']') => Scan::Osc,
            // Two-byte escape such as `ESC c`
            (Scan::Escape, _) => Scan::Text,
            (Scan::Csi, '@'..='~') => Scan::Text,
            (Scan::Csi, _) => Scan::Csi,
            (Scan::Osc, '\x07') => Scan::Text,
            (Scan::Osc, '\x1b') => Scan::OscEscape,
            (Scan::Osc, _) => Scan::Osc,
            (Scan::OscEscape, _) => Scan::Text,
        };
    }

    out
}

/// First line of `text`, cut to `max_chars` with an ellipsis
pub fn truncate_line(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
