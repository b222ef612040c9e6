//! Sentence segmentation.
//!
//! Sentences are the atomic unit of chunking: the packer never splits inside
//! one. Detection is deliberately naive.
//!
//! ## The Rule
//!
//! A sentence ends right after a terminator (`.`, `!`, `?` by default),
//! optionally followed by closing punctuation (quotes, brackets), followed by
//! whitespace or the end of the text:
//!
//! ```text
//! He said "Stop." Then he left. Pi is 3.14 or so
//!                ^             ^               ^
//!                closer        whitespace      end of text
//!                                     3.14 is not a boundary
//! ```
//!
//! Text with no terminator at all is one sentence.
//!
//! ## No Abbreviation Handling
//!
//! Legal text is full of periods that do not end sentences:
//!
//! ```text
//! "See Brown v. Board, 347 U.S. 483. Also 42 U.S.C. § 1983."
//!                    ^          ^  ^             ^       ^
//!                    every one of these is a boundary
//! ```
//!
//! Nothing here tries to recognise "v.", "U.S." or "Mr.". Fixing that would
//! move chunk boundaries for every document already indexed, so the naive
//! behaviour is the contract. UAX #29 segmentation is the wrong tool for the
//! same reason.
//!
//! ## Tuning
//!
//! [`SentenceSplitter::builder`] changes the terminator and closer sets, the
//! [`BoundaryRule`], and whether blank lines end a sentence (useful for
//! unpunctuated clause headings).

/// Default sentence terminators.
pub const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?'];

/// Default closing punctuation allowed between a terminator and the boundary.
pub const DEFAULT_CLOSERS: &[char] = &[
    '"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{00BB}',
];

/// What has to follow a terminator (and its closers) for it to end a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BoundaryRule {
    /// Whitespace or end of text. `3.14` and `example.com` stay whole.
    #[default]
    RequireWhitespace,
    /// Anything. Every terminator run ends a sentence, so `3.14` becomes
    /// `3.` and `14`.
    AnyTerminator,
}

/// A sentence located in its source text.
///
/// `text` is trimmed, and `start..end` is its byte span in the source, so
/// `&source[start..end] == text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// The sentence, without surrounding whitespace.
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset just past the last character.
    pub end: usize,
}

/// Splits text into [`Sentence`]s.
///
/// ## Example
///
/// ```rust
/// use lexslab::SentenceSplitter;
///
/// let splitter = SentenceSplitter::default();
/// let sentences: Vec<&str> = splitter
///     .split("The term is one year. Rent is due monthly! Agreed?")
///     .map(|s| s.text)
///     .collect();
///
/// assert_eq!(
///     sentences,
///     ["The term is one year.", "Rent is due monthly!", "Agreed?"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSplitter {
    terminators: Vec<char>,
    closers: Vec<char>,
    rule: BoundaryRule,
    blank_line_breaks: bool,
}

impl SentenceSplitter {
    /// Start configuring a splitter from the defaults.
    #[must_use]
    pub fn builder() -> SentenceSplitterBuilder {
        SentenceSplitterBuilder::default()
    }

    /// Iterate over the sentences of `text`, in order.
    ///
    /// Whitespace-only text yields nothing.
    #[must_use]
    pub fn split<'a>(&'a self, text: &'a str) -> Sentences<'a> {
        Sentences {
            splitter: self,
            text,
            pos: 0,
        }
    }

    /// The terminator set.
    #[must_use]
    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// The closer set.
    #[must_use]
    pub fn closers(&self) -> &[char] {
        &self.closers
    }

    /// The boundary rule.
    #[must_use]
    pub const fn rule(&self) -> BoundaryRule {
        self.rule
    }

    /// Whether a blank line ends a sentence.
    #[must_use]
    pub const fn blank_line_breaks(&self) -> bool {
        self.blank_line_breaks
    }

    fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    fn is_closer(&self, c: char) -> bool {
        self.closers.contains(&c)
    }

    /// If a terminator run starting at byte `at` ends a sentence, the byte
    /// offset just past the run and its closers.
    fn boundary_after(&self, text: &str, at: usize) -> Option<usize> {
        let mut end = at;
        let mut chars = text[at..].chars().peekable();

        while let Some(&c) = chars.peek() {
            if !self.is_terminator(c) {
                break;
            }
            end += c.len_utf8();
            chars.next();
        }
        while let Some(&c) = chars.peek() {
            if !self.is_closer(c) {
                break;
            }
            end += c.len_utf8();
            chars.next();
        }

        match (self.rule, chars.peek()) {
            (BoundaryRule::AnyTerminator, _) => Some(end),
            (BoundaryRule::RequireWhitespace, None) => Some(end),
            (BoundaryRule::RequireWhitespace, Some(c)) if c.is_whitespace() => Some(end),
            (BoundaryRule::RequireWhitespace, Some(_)) => None,
        }
    }

    /// Whether the whitespace run starting at byte `at` holds a blank line.
    fn blank_line_at(text: &str, at: usize) -> bool {
        text[at..]
            .chars()
            .take_while(|c| c.is_whitespace())
            .filter(|&c| c == '\n')
            .nth(1)
            .is_some()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_vec(),
            closers: DEFAULT_CLOSERS.to_vec(),
            rule: BoundaryRule::default(),
            blank_line_breaks: false,
        }
    }
}

/// Builder for [`SentenceSplitter`].
///
/// ```rust
/// use lexslab::{BoundaryRule, SentenceSplitter};
///
/// let splitter = SentenceSplitter::builder()
///     .terminators(".;")
///     .rule(BoundaryRule::RequireWhitespace)
///     .blank_line_breaks(true)
///     .build()
///     .unwrap();
///
/// let n = splitter.split("ARTICLE I\n\nThe tenant pays; the landlord fixes.").count();
/// assert_eq!(n, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitterBuilder {
    inner: SentenceSplitter,
}

impl SentenceSplitterBuilder {
    /// Replace the terminator set with the characters of `terminators`.
    #[must_use]
    pub fn terminators(mut self, terminators: &str) -> Self {
        self.inner.terminators = dedup(terminators);
        self
    }

    /// Replace the closer set with the characters of `closers`.
    #[must_use]
    pub fn closers(mut self, closers: &str) -> Self {
        self.inner.closers = dedup(closers);
        self
    }

    /// Set the boundary rule.
    #[must_use]
    pub fn rule(mut self, rule: BoundaryRule) -> Self {
        self.inner.rule = rule;
        self
    }

    /// Treat a whitespace run containing two or more line feeds as a
    /// sentence boundary.
    #[must_use]
    pub fn blank_line_breaks(mut self, enabled: bool) -> Self {
        self.inner.blank_line_breaks = enabled;
        self
    }

    /// Validate and build the splitter.
    ///
    /// # Errors
    ///
    /// - [`Error::NoTerminators`](crate::Error::NoTerminators) if the terminator set is empty
    /// - [`Error::WhitespacePunctuation`](crate::Error::WhitespacePunctuation) if either set holds whitespace
    /// - [`Error::PunctuationConflict`](crate::Error::PunctuationConflict) if a character is in both sets
    pub fn build(self) -> crate::Result<SentenceSplitter> {
        let splitter = self.inner;
        if splitter.terminators.is_empty() {
            return Err(crate::Error::NoTerminators);
        }
        if let Some(&c) = splitter
            .terminators
            .iter()
            .chain(&splitter.closers)
            .find(|c| c.is_whitespace())
        {
            return Err(crate::Error::WhitespacePunctuation(c));
        }
        if let Some(&c) = splitter
            .terminators
            .iter()
            .find(|c| splitter.closers.contains(c))
        {
            return Err(crate::Error::PunctuationConflict(c));
        }
        Ok(splitter)
    }
}

fn dedup(chars: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    for c in chars.chars() {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// Iterator over the sentences of a text. Created by [`SentenceSplitter::split`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    splitter: &'a SentenceSplitter,
    text: &'a str,
    pos: usize,
}

impl<'a> Sentences<'a> {
    fn sentence(&self, start: usize, end: usize) -> Sentence<'a> {
        let source: &'a str = self.text;
        let text = source[start..end].trim_end();
        Sentence {
            text,
            start,
            end: start + text.len(),
        }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text: &'a str = self.text;
        let splitter: &'a SentenceSplitter = self.splitter;

        let rest = &text[self.pos..];
        let start = self.pos + (rest.len() - rest.trim_start().len());
        if start >= text.len() {
            self.pos = text.len();
            return None;
        }

        let mut iter = text[start..].char_indices();
        while let Some((offset, c)) = iter.next() {
            let at = start + offset;

            if splitter.is_terminator(c) {
                if let Some(end) = splitter.boundary_after(text, at) {
                    self.pos = end;
                    return Some(self.sentence(start, end));
                }
                // Skip the rest of this terminator run; a later terminator in
                // it cannot succeed where the first failed.
                let run: usize = text[at..]
                    .chars()
                    .take_while(|&t| splitter.is_terminator(t))
                    .map(char::len_utf8)
                    .sum();
                let skip_to = at + run;
                while iter.as_str().len() > text.len() - skip_to {
                    iter.next();
                }
            } else if c == '\n'
                && splitter.blank_line_breaks
                && SentenceSplitter::blank_line_at(text, at)
            {
                self.pos = at;
                return Some(self.sentence(start, at));
            }
        }

        self.pos = text.len();
        Some(self.sentence(start, text.len()))
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}
