//! Rendering of registered log references.
//!
//! Text output mirrors the `show error` view:
//!
//! ```text
//!
//! Error 100663299 - Socket Error
//! ==============================
//! Description:
//! When attempting to access a socket ...
//!
//! Recommendation:
//! Ensure that there are sufficient system resources ...
//! ```
//!
//! JSON output is an object keyed by the decimal code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

use super::error::LogRefError;
use super::registry::LogRefRegistry;
use super::{END_FERR, LogRef};

/// Which log references to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    All,
    Code(u32),
}

impl FromStr for Selector {
    type Err = LogRefError;

    /// Accepts `all`, a decimal code or a `0x`-prefixed hex code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        let invalid = |reason| LogRefError::InvalidCode {
            value: s.to_string(),
            reason,
        };

        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => trimmed.parse::<u32>(),
        }
        .map_err(|_| invalid("expected 'all', a decimal code or a 0x-prefixed hex code"))?;

        match parsed {
            0 => Err(invalid("code 0 is not assignable")),
            END_FERR => Err(invalid("code is reserved for the end marker")),
            code => Ok(Self::Code(code)),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Code(code) => write!(f, "{}", code),
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown display format '{}'", other)),
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// JSON shape of one log reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LogRefView {
    /// Short title.
    pub title: String,
    /// What happened.
    pub description: String,
    /// What the operator should do about it.
    pub suggestion: String,
}

impl From<&LogRef> for LogRefView {
    fn from(entry: &LogRef) -> Self {
        Self {
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            suggestion: entry.suggestion.to_string(),
        }
    }
}

/// Render the selected log references.
///
/// `wrap_width` applies to text output only; 0 disables wrapping.
pub fn render(
    registry: &LogRefRegistry,
    selector: Selector,
    format: DisplayFormat,
    wrap_width: usize,
) -> Result<String, LogRefError> {
    let refs = match selector {
        Selector::All => registry.snapshot(),
        Selector::Code(code) => vec![registry.get(code).ok_or(LogRefError::UnknownCode(code))?],
    };

    match format {
        DisplayFormat::Text => Ok(render_text(&refs, wrap_width)),
        DisplayFormat::Json => render_json(&refs),
    }
}

fn render_text(refs: &[LogRef], wrap_width: usize) -> String {
    let mut output = String::new();
    for entry in refs {
        let heading = format!("Error {} - {}", entry.code, entry.title);
        let underline = "=".repeat(heading.width());

        output.push_str(&format!("\n{}\n{}\n", heading, underline));
        output.push_str(&format!(
            "Description:\n{}\n\n",
            wrap(entry.description, wrap_width)
        ));
        output.push_str(&format!(
            "Recommendation:\n{}\n",
            wrap(entry.suggestion, wrap_width)
        ));
    }
    output
}

fn render_json(refs: &[LogRef]) -> Result<String, LogRefError> {
    let mut top = serde_json::Map::new();
    for entry in refs {
        top.insert(entry.code.to_string(), serde_json::to_value(LogRefView::from(entry))?);
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(top))?)
}

/// Greedy word wrap measured in terminal columns.
///
/// Lines break only between words, and the whitespace at a break is dropped.
/// Whitespace inside a line is kept as written. Words wider than the limit
/// get a line of their own.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for (gap, word) in words_with_gaps(text) {
        let gap_width = gap.width();
        let word_width = word.width();
        let has_content = !current.trim().is_empty();
        if has_content && !word.is_empty() && current_width + gap_width + word_width > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push_str(gap);
            current.push_str(word);
            current_width += gap_width + word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Split into `(leading whitespace, word)` pairs. A trailing whitespace run
/// comes back with an empty word.
fn words_with_gaps(text: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let word_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (gap, tail) = rest.split_at(word_start);
        let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, next) = tail.split_at(word_end);
        pairs.push((gap, word));
        rest = next;
    }
    pairs
}
