//! The Slab type: one chunk, ready to embed.

/// A chunk of sentence-aligned text with its position in the source.
///
/// A slab is what the ingestion side hands to the embedding step. `index`
/// is the chunk's position in the sequence and is meant to be stored as the
/// chunk index next to the vector, so retrieved chunks can be cited or put
/// back in document order.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the text that was chunked (before
/// trimming), and `text` is exactly that slice:
///
/// ```rust
/// use lexslab::{Chunker, GreedyChunker};
///
/// let doc = "  Rent is due monthly. Late fees apply.  ";
/// let slabs = GreedyChunker::new(1000).chunk(doc);
///
/// assert_eq!(slabs.len(), 1);
/// assert_eq!(&doc[slabs[0].span()], slabs[0].text);
/// assert_eq!(slabs[0].text, doc.trim());
/// ```
///
/// Whitespace between sentences inside a slab is kept verbatim, newlines
/// included. Whitespace between slabs belongs to no slab.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slab {
    /// The chunk text. Never empty, never starts or ends with whitespace.
    pub text: String,
    /// Byte offset where this chunk starts in the source.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the source.
    pub end: usize,
    /// Zero-based position of this chunk in the sequence.
    pub index: usize,
    /// Estimated size: the sum of its sentences' estimates.
    pub size: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        index: usize,
        size: usize,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            size,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty. Slabs produced by a chunker never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the source.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Consume the slab, keeping only its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slab {{ index: {}, span: {}..{}, size: {} }}",
            self.index, self.start, self.end, self.size
        )
    }
}

impl From<Slab> for String {
    fn from(slab: Slab) -> Self {
        slab.text
    }
}
