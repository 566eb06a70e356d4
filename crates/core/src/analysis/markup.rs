//! Emphasis markup for narratives.
//!
//! Narratives mark emphasis with `**bold**`. A [`Narrative`] is built from
//! segments, so its rendering is always balanced; [`parse`] reads rendered
//! text back and rejects unbalanced input.

use serde::{Serialize, Serializer};
use thiserror::Error;

const MARKER: &str = "**";

/// Piece of a narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unemphasized text.
    Plain(String),
    /// Emphasized text.
    Bold(String),
}

/// Emphasis markup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// An opening `**` has no closing counterpart.
    #[error("Unclosed emphasis starting at byte {position}")]
    Unbalanced {
        /// Byte offset of the opening marker.
        position: usize,
    },

    /// A single `*` outside of a `**` marker.
    #[error("Stray asterisk at byte {position}")]
    StrayAsterisk {
        /// Byte offset of the asterisk.
        position: usize,
    },

    /// `****` with nothing in between.
    #[error("Empty emphasis at byte {position}")]
    EmptyEmphasis {
        /// Byte offset of the opening marker.
        position: usize,
    },
}

/// Text with emphasis spans, balanced by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    segments: Vec<Segment>,
}

impl Narrative {
    /// Creates an empty narrative.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends plain text.
    #[must_use]
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.push_text(text);
        self
    }

    /// Appends emphasized text.
    #[must_use]
    pub fn bold(mut self, text: impl AsRef<str>) -> Self {
        self.push_bold(text);
        self
    }

    /// Appends plain text in place. Asterisks are dropped.
    pub fn push_text(&mut self, text: impl AsRef<str>) {
        let clean = strip_markers(text.as_ref());
        if clean.is_empty() {
            return;
        }
        if let Some(Segment::Plain(last)) = self.segments.last_mut() {
            last.push_str(&clean);
        } else {
            self.segments.push(Segment::Plain(clean));
        }
    }

    /// Appends emphasized text in place. Asterisks are dropped and empty
    /// spans are skipped.
    pub fn push_bold(&mut self, text: impl AsRef<str>) {
        let clean = strip_markers(text.as_ref());
        if !clean.is_empty() {
            self.segments.push(Segment::Bold(clean));
        }
    }

    /// The segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if there is no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Renders with `**` markers.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => out.push_str(text),
                Segment::Bold(text) => {
                    out.push_str(MARKER);
                    out.push_str(text);
                    out.push_str(MARKER);
                }
            }
        }
        out
    }

    /// Renders without markers.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(text) | Segment::Bold(text) => text.as_str(),
            })
            .collect()
    }
}

impl std::fmt::Display for Narrative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Narrative {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// Parses `**`-marked text into a narrative.
pub fn parse(input: &str) -> Result<Narrative, MarkupError> {
    let mut narrative = Narrative::new();
    let mut rest = input;
    let mut offset = 0;
    let mut open: Option<usize> = None;

    while let Some(idx) = rest.find('*') {
        let chunk = &rest[..idx];
        if !rest[idx..].starts_with(MARKER) {
            return Err(MarkupError::StrayAsterisk {
                position: offset + idx,
            });
        }

        match open {
            None => {
                narrative.push_text(chunk);
                open = Some(offset + idx);
            }
            Some(position) => {
                if chunk.is_empty() {
                    return Err(MarkupError::EmptyEmphasis { position });
                }
                narrative.push_bold(chunk);
                open = None;
            }
        }

        let consumed = idx + MARKER.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    if let Some(position) = open {
        return Err(MarkupError::Unbalanced { position });
    }
    narrative.push_text(rest);
    Ok(narrative)
}

fn strip_markers(text: &str) -> String {
    text.chars().filter(|c| *c != '*').collect()
}
