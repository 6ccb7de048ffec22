use tracing::debug;

use crate::annotation::{AnnotationKind, Annotations, Span, SpanAnnotation};
use crate::detector::{starts_new_clause, Detector};
use crate::error::Result;

/// Emoji-run rule.
///
/// Works like the facemark rule but over single code points: a run of
/// emoji behaves as one expressive mark attached to the preceding clause.
/// Candidates inside a run are vetoed; a run end at end-of-text or
/// followed by ordinary text is confirmed as a boundary. A block-range
/// test is simpler than a pattern table here.
pub struct EmojiDetector {
    name: String,
    reads: Vec<String>,
}

impl EmojiDetector {
    pub fn new(first_pass_layer: impl Into<String>) -> Self {
        Self {
            name: "emoji".to_string(),
            reads: vec![first_pass_layer.into()],
        }
    }

    fn is_emoji(c: char) -> bool {
        matches!(c as u32,
            0x1F300..=0x1F5FF   // symbols and pictographs
            | 0x1F600..=0x1F64F // emoticons
            | 0x1F680..=0x1F6FF // transport
            | 0x1F900..=0x1F9FF // supplemental symbols
            | 0x1FA70..=0x1FAFF // extended pictographs
            | 0x1F1E6..=0x1F1FF // regional indicators
            | 0x2600..=0x27BF   // miscellaneous symbols, dingbats
            | 0xFE0F            // variation selector-16
            | 0x200D            // zero-width joiner
        )
    }

    /// Maximal runs of emoji code points as `[start, end)` offsets.
    fn runs(text: &str) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut run_start: Option<usize> = None;

        for (i, c) in text.chars().enumerate() {
            match (Self::is_emoji(c), run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    runs.push((start, i));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            runs.push((start, text.chars().count()));
        }
        runs
    }
}

impl Detector for EmojiDetector {
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

        let chars: Vec<char> = text.chars().collect();
        let mut annotations = Vec::new();

        for (start, end) in Self::runs(text) {
            let span = Span::new(start, end)?;
            annotations.push(
                SpanAnnotation::new(span, &self.name, AnnotationKind::Auxiliary)
                    .with_category("emoji-run"),
            );

            for &offset in &candidates {
                if span.contains(offset) {
                    annotations.push(
                        SpanAnnotation::new(span, &self.name, AnnotationKind::Suppressed)
                            .with_category("emoji-run"),
                    );
                }
            }

            if starts_new_clause(chars.get(end).copied()) {
                annotations.push(
                    SpanAnnotation::new(span, &self.name, AnnotationKind::Confirmed)
                        .with_category("emoji-run"),
                );
            }
        }

        debug!(
            detector = %self.name,
            annotations = annotations.len(),
            "emoji scan complete"
        );
        store.add_layer(&self.name, annotations)?;
        Ok(())
    }
}
