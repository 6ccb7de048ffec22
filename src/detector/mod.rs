// Detector contract plus the offset utilities shared by the rule modules.

use crate::annotation::Annotations;
use crate::error::{Error, Result};

pub mod emoji;
pub mod facemark;
pub mod number;
pub mod punctuation;
pub mod quotation;

pub use emoji::EmojiDetector;
pub use facemark::FacemarkDetector;
pub use number::NumberDetector;
pub use punctuation::PunctuationDetector;
pub use quotation::QuotationDetector;

/// A pluggable boundary rule.
///
/// A detector consumes the original text and the store built up by its
/// predecessors, and contributes at most one new layer named after itself.
/// It may read any layer listed in `reads()` to decide where its own spans
/// go, but it never writes to a layer it did not create.
///
/// Contract: deterministic for a given `(text, store)` pair, and the single
/// `add_layer` call happens only after all of the detector's own matching
/// has succeeded, so an `Err` return leaves the store unchanged.
pub trait Detector {
    /// Stable identifier, used as the detector's layer key.
    fn name(&self) -> &str;

    /// Layer names this detector reads. Validated against the pipeline
    /// order at construction time.
    fn reads(&self) -> &[String] {
        &[]
    }

    fn annotate(&self, text: &str, store: &mut Annotations) -> Result<()>;
}

/// Incremental byte-offset to code-point-offset conversion.
///
/// Regex matches arrive as byte offsets into the text; annotations are kept
/// in code points. Match positions are non-decreasing within one detector
/// pass, so a single forward scan over the UTF-8 start bytes suffices.
pub(crate) struct OffsetTracker<'t> {
    bytes: &'t [u8],
    byte_pos: usize,
    char_pos: usize,
}

impl<'t> OffsetTracker<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            bytes: text.as_bytes(),
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Convert a char-aligned byte offset to its code-point offset.
    /// Targets must be non-decreasing across calls.
    pub fn char_offset(&mut self, target: usize) -> Result<usize> {
        if target < self.byte_pos {
            return Err(Error::Rule(format!(
                "offset tracker cannot seek backwards: at {}, asked for {}",
                self.byte_pos, target
            )));
        }
        if target > self.bytes.len() {
            return Err(Error::Rule(format!(
                "byte offset {} exceeds text length {}",
                target,
                self.bytes.len()
            )));
        }
        while self.byte_pos < target {
            // Continuation bytes (10xxxxxx) do not start a code point.
            if (self.bytes[self.byte_pos] & 0xC0) != 0x80 {
                self.char_pos += 1;
            }
            self.byte_pos += 1;
        }
        Ok(self.char_pos)
    }
}

/// Whether a symbol-run end at this position reads as a sentence end: true
/// at end of text, or when ordinary text (Japanese or Latin letters,
/// digits) follows. Trailing punctuation or further symbols do not open a
/// new sentence.
pub(crate) fn starts_new_clause(next: Option<char>) -> bool {
    next.map_or(true, |c| c.is_alphanumeric())
}
