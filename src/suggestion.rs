//! Improvement hints with emphasis spans.
//!
//! Hints are authored with a lightweight `**bold**` markup. The markup is
//! parsed into plain text plus byte ranges so presentation code never has
//! to deal with delimiters.

use std::ops::Range;

const EMPHASIS_DELIMITER: &str = "**";

/// A single improvement hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    text: String,
    emphasis: Vec<Range<usize>>,
}

impl Suggestion {
    /// A hint without emphasis.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Vec::new(),
        }
    }

    /// Parses `**`-delimited emphasis out of `markup`.
    ///
    /// An unpaired trailing delimiter is kept as literal text.
    pub fn from_markup(markup: &str) -> Self {
        let mut text = String::with_capacity(markup.len());
        let mut emphasis = Vec::new();
        let mut rest = markup;

        while let Some(open) = rest.find(EMPHASIS_DELIMITER) {
            let after_open = &rest[open + EMPHASIS_DELIMITER.len()..];
            let Some(close) = after_open.find(EMPHASIS_DELIMITER) else {
                break;
            };
            text.push_str(&rest[..open]);
            let start = text.len();
            text.push_str(&after_open[..close]);
            if text.len() > start {
                emphasis.push(start..text.len());
            }
            rest = &after_open[close + EMPHASIS_DELIMITER.len()..];
        }
        text.push_str(rest);

        Self { text, emphasis }
    }

    /// Plain text with delimiters removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte ranges of `text()` to render emphasised.
    pub fn emphasis(&self) -> &[Range<usize>] {
        &self.emphasis
    }

    /// Splits the text into `(segment, emphasised)` pairs, skipping empty
    /// segments.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut out = Vec::with_capacity(self.emphasis.len() * 2 + 1);
        let mut cursor = 0;
        for span in &self.emphasis {
            if span.start > cursor {
                out.push((&self.text[cursor..span.start], false));
            }
            out.push((&self.text[span.clone()], true));
            cursor = span.end;
        }
        if cursor < self.text.len() {
            out.push((&self.text[cursor..], false));
        }
        out
    }

    /// Re-renders the hint with `**` delimiters.
    pub fn to_markup(&self) -> String {
        self.segments()
            .into_iter()
            .map(|(segment, emphasised)| {
                if emphasised {
                    format!("{EMPHASIS_DELIMITER}{segment}{EMPHASIS_DELIMITER}")
                } else {
                    segment.to_string()
                }
            })
            .collect()
    }
}

impl From<&str> for Suggestion {
    fn from(markup: &str) -> Self {
        Suggestion::from_markup(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_emphasis() {
        let s = Suggestion::plain("Použite aspoň 8 znakov.");
        assert_eq!(s.text(), "Použite aspoň 8 znakov.");
        assert!(s.emphasis().is_empty());
        assert_eq!(s.segments(), vec![("Použite aspoň 8 znakov.", false)]);
    }

    #[test]
    fn test_whole_text_emphasis() {
        let s = Suggestion::from_markup("**Okamžite ho zmeňte!**");
        assert_eq!(s.text(), "Okamžite ho zmeňte!");
        assert_eq!(s.emphasis(), &[0..s.text().len()]);
        assert_eq!(s.segments(), vec![("Okamžite ho zmeňte!", true)]);
    }

    #[test]
    fn test_inner_emphasis_uses_byte_ranges() {
        let s = Suggestion::from_markup("Heslo je **veľmi** slabé a **krátke**.");
        assert_eq!(s.text(), "Heslo je veľmi slabé a krátke.");
        assert_eq!(
            s.segments(),
            vec![
                ("Heslo je ", false),
                ("veľmi", true),
                (" slabé a ", false),
                ("krátke", true),
                (".", false),
            ]
        );
    }

    #[test]
    fn test_unpaired_delimiter_is_literal() {
        let s = Suggestion::from_markup("a ** b");
        assert_eq!(s.text(), "a ** b");
        assert!(s.emphasis().is_empty());
    }

    #[test]
    fn test_to_markup_restores_delimiters() {
        let markup = "Pozor: **nepoužívajte** toto heslo";
        assert_eq!(Suggestion::from_markup(markup).to_markup(), markup);
    }
}
