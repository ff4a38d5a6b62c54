//! Structured ("rich") client text.
//!
//! Templated client strings arrive in two shapes: a flat rendered string, or
//! a structured sequence of typed segments where the fixed wrapper text is
//! literal and the substituted parts (item links, icons) are variable. The
//! payload-based strategies work on the structured shape because the variable
//! segments can change width, or even count, between otherwise identical
//! notifications.
//!
//! ## From-end indexing
//!
//! Literal wrapper segments keep a stable distance from the *ends* of the
//! sequence even when the variable middle shifts, so segment selectors may
//! count from either end. `SegmentIndex::resolve` is the single place that
//! wraparound arithmetic lives; every payload strategy goes through it, and
//! an out-of-range selector resolves to `None` rather than faulting.

/// One typed part of a rich text sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed template text.
    Text(String),
    /// An embedded item link; `name` is the rendered item name.
    Item { id: u32, name: String },
    /// An inline icon marker with no rendered text.
    Icon(u32),
}

impl Segment {
    pub fn text(s: impl Into<String>) -> Segment {
        Segment::Text(s.into())
    }

    pub fn item(id: u32, name: impl Into<String>) -> Segment {
        Segment::Item { id, name: name.into() }
    }

    /// The literal template text, if this segment is fixed text.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Segment::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text this segment contributes to the rendered string.
    pub fn visible_text(&self) -> Option<&str> {
        match self {
            Segment::Text(s) => Some(s),
            Segment::Item { name, .. } => Some(name),
            Segment::Icon(_) => None,
        }
    }
}

/// An ordered sequence of [`Segment`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    pub fn new(segments: Vec<Segment>) -> Self {
        RichText { segments }
    }

    /// A rich text consisting of a single literal segment.
    pub fn from_literal(text: impl Into<String>) -> Self {
        RichText { segments: vec![Segment::Text(text.into())] }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve `index` against this sequence and return the segment.
    pub fn get(&self, index: SegmentIndex) -> Option<&Segment> {
        index.resolve(self.segments.len()).map(|i| &self.segments[i])
    }

    /// The rendered flat string: concatenated visible text of all segments.
    pub fn flatten(&self) -> String {
        self.segments.iter().filter_map(Segment::visible_text).collect()
    }

    /// Literal text of the leading segment, if it is fixed text.
    pub fn first_literal(&self) -> Option<&str> {
        self.segments.first().and_then(Segment::literal)
    }
}

impl FromIterator<Segment> for RichText {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        RichText { segments: iter.into_iter().collect() }
    }
}

/// A segment position counted from either end of a sequence.
///
/// `FromEnd(1)` is the last segment, `FromEnd(2)` the one before it, and so
/// on (mirroring how the source templates address their stable trailing
/// wrapper text). `FromEnd(0)` never resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentIndex {
    FromStart(usize),
    FromEnd(usize),
}

impl SegmentIndex {
    /// Resolve this selector against a sequence of `len` segments.
    ///
    /// Returns `None` when the resolved position falls outside `[0, len)`.
    pub fn resolve(self, len: usize) -> Option<usize> {
        match self {
            SegmentIndex::FromStart(i) if i < len => Some(i),
            SegmentIndex::FromEnd(i) if i >= 1 && i <= len => Some(len - i),
            _ => None,
        }
    }
}
