use tracing::debug;

use crate::annotation::{AnnotationKind, Annotations, Span, SpanAnnotation};
use crate::detector::Detector;
use crate::error::Result;

/// Delimiter pairs, tried independently; same-type nesting is not tracked.
const PAIRS: &[(char, char, &str)] = &[
    ('「', '」', "corner"),
    ('『', '』', "double-corner"),
    ('（', '）', "wide-paren"),
    ('(', ')', "paren"),
];

/// Quoted-region rule.
///
/// A boundary candidate inside a balanced quoted region would split the
/// quotation away from its carrier sentence, so it is vetoed. The veto span
/// starts one past the opening delimiter: a sentence may still end
/// immediately before a quote opens.
pub struct QuotationDetector {
    name: String,
    reads: Vec<String>,
}

impl QuotationDetector {
    pub fn new(first_pass_layer: impl Into<String>) -> Self {
        Self {
            name: "quotation".to_string(),
            reads: vec![first_pass_layer.into()],
        }
    }

    /// Balanced regions as code-point ranges covering both delimiters,
    /// with the matched pair's category.
    fn regions(text: &str) -> Vec<(usize, usize, &'static str)> {
        let chars: Vec<char> = text.chars().collect();
        let mut regions = Vec::new();

        for &(open, close, category) in PAIRS {
            let mut i = 0;
            while i < chars.len() {
                if chars[i] == open {
                    if let Some(j) = chars[i + 1..].iter().position(|&c| c == close) {
                        let close_idx = i + 1 + j;
                        regions.push((i, close_idx + 1, category));
                        i = close_idx + 1;
                        continue;
                    }
                }
                i += 1;
            }
        }

        regions.sort_by_key(|r| r.0);
        regions
    }
}

impl Detector for QuotationDetector {
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
            .filter(|a| {
                matches!(
                    a.kind,
                    AnnotationKind::BoundaryCandidate | AnnotationKind::Confirmed
                )
            })
            .map(|a| a.span.end())
            .collect();

        let mut annotations = Vec::new();
        for (start, end, category) in Self::regions(text) {
            annotations.push(
                SpanAnnotation::new(Span::new(start, end)?, &self.name, AnnotationKind::Auxiliary)
                    .with_category(category),
            );

            // Veto interior candidates; the opening delimiter itself is
            // excluded so offset == start survives.
            let veto = Span::new(start + 1, end)?;
            for &offset in &candidates {
                if veto.contains(offset) {
                    annotations.push(
                        SpanAnnotation::new(veto, &self.name, AnnotationKind::Suppressed)
                            .with_category(category),
                    );
                }
            }
        }

        debug!(
            detector = %self.name,
            annotations = annotations.len(),
            "quotation scan complete"
        );
        store.add_layer(&self.name, annotations)?;
        Ok(())
    }
}
