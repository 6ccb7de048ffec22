use tracing::debug;

use crate::annotation::{AnnotationKind, Annotations, Span, SpanAnnotation};
use crate::detector::Detector;
use crate::error::Result;

/// Decimal-point exception rule.
///
/// A full stop sandwiched between digits ("3.5", "１．５") is a decimal
/// point, not a sentence end; any candidate the first pass proposed right
/// after it is vetoed.
pub struct NumberDetector {
    name: String,
    reads: Vec<String>,
}

impl NumberDetector {
    pub fn new(first_pass_layer: impl Into<String>) -> Self {
        Self {
            name: "number".to_string(),
            reads: vec![first_pass_layer.into()],
        }
    }

    fn is_digit(c: char) -> bool {
        c.is_ascii_digit() || ('０'..='９').contains(&c)
    }

    fn is_decimal_point(c: char) -> bool {
        c == '.' || c == '．'
    }
}

impl Detector for NumberDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> &[String] {
        &self.reads
    }

    fn annotate(&self, text: &str, store: &mut Annotations) -> Result<()> {
        let candidates: Vec<usize> = store
            .get_layer(&self.reads[0])?
            .iter()
            .filter(|a| matches!(a.kind, AnnotationKind::BoundaryCandidate))
            .map(|a| a.span.end())
            .collect();

        let chars: Vec<char> = text.chars().collect();
        let mut annotations = Vec::new();

        for i in 1..chars.len().saturating_sub(1) {
            if Self::is_decimal_point(chars[i])
                && Self::is_digit(chars[i - 1])
                && Self::is_digit(chars[i + 1])
            {
                // Covers the point and the following digit; the candidate
                // sits at i + 1, inside the veto range.
                let veto = Span::new(i, i + 2)?;
                for &offset in &candidates {
                    if veto.contains(offset) {
                        annotations.push(
                            SpanAnnotation::new(veto, &self.name, AnnotationKind::Suppressed)
                                .with_category("decimal"),
                        );
                    }
                }
            }
        }

        debug!(
            detector = %self.name,
            annotations = annotations.len(),
            "decimal-point scan complete"
        );
        store.add_layer(&self.name, annotations)?;
        Ok(())
    }
}
