// Kaomoji detection. The pattern table is declarative data: an ordered list
// of (pattern, category) pairs compiled once at construction.

use regex_automata::meta::Regex;
use tracing::debug;

use crate::annotation::{AnnotationKind, Annotations, Span, SpanAnnotation};
use crate::detector::{starts_new_clause, Detector, OffsetTracker};
use crate::error::{Error, Result};

/// Face-mark (kaomoji) rule.
///
/// Reads the first-pass candidate layer. Every boundary candidate that
/// falls inside a face match is vetoed with a `Suppressed` annotation; a
/// face end at end-of-text or followed by ordinary text is asserted as a
/// boundary with `Confirmed`. Each raw match is also recorded as
/// `Auxiliary` for diagnostics.
///
/// Overlapping matches are reduced to a non-overlapping set preferring the
/// leftmost, then the longest, match.
pub struct FacemarkDetector {
    name: String,
    reads: Vec<String>,
    patterns: Vec<(Regex, &'static str)>,
}

impl FacemarkDetector {
    pub fn new(first_pass_layer: impl Into<String>) -> Result<Self> {
        // Compositional pattern components. A face body is any short run of
        // characters that is not ordinary Japanese text or bracketing; the
        // handful of ideographs that appear inside faces (人 艸 井 へ) are
        // allowed back in explicitly.
        let body = r"(?:[人艸井へ]|[^ぁ-んァ-ヶ一-龥（）()「」『』、。．！？!?\n])";
        let open = r"[(（]";
        let close = r"[)）]";
        let arm = r"[＼\\ヽヾｏoOσφｐpｍmU｜|!┐]";
        let limb = r"[ﾉノヽヾ゛ﾞ／/＼\\ーVvｂbｙyｑqｐpｍmｏoOzZ~～☆\-｜|!┌]";

        let table: Vec<(String, &'static str)> = vec![
            // ＼(^o^)／ and friends: leading arm, face, trailing limbs
            (
                format!("{arm}{open}{body}{{1,18}}{close}{limb}{{0,8}}"),
                "armed",
            ),
            // (^_^) with optional trailing limbs
            (format!("{open}{body}{{1,18}}{close}{limb}{{0,8}}"), "paren"),
            // (^^ゞ - iteration-mark faces never close their paren
            (format!("{open}{body}{{1,6}}[ゝゞ]"), "half-paren"),
            // Parenthesis-free faces
            (r"Vo￥oV|U\^ｪ\^U".to_string(), "bare"),
        ];

        let mut patterns = Vec::with_capacity(table.len());
        for (pattern, category) in table {
            let regex = Regex::new(&pattern)
                .map_err(|e| Error::Rule(format!("facemark pattern {category}: {e}")))?;
            patterns.push((regex, category));
        }

        Ok(Self {
            name: "facemark".to_string(),
            reads: vec![first_pass_layer.into()],
            patterns,
        })
    }

    /// All pattern matches as byte ranges, reduced to a non-overlapping
    /// leftmost-longest set.
    fn face_matches(&self, text: &str) -> Vec<(usize, usize, &'static str)> {
        let mut matches: Vec<(usize, usize, &'static str)> = Vec::new();
        for (regex, category) in &self.patterns {
            for m in regex.find_iter(text) {
                matches.push((m.start(), m.end(), *category));
            }
        }
        matches.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut kept: Vec<(usize, usize, &'static str)> = Vec::new();
        for m in matches {
            match kept.last() {
                Some(&(_, end, _)) if m.0 < end => {} // overlaps the kept match
                _ => kept.push(m),
            }
        }
        kept
    }
}

impl Detector for FacemarkDetector {
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
        let mut tracker = OffsetTracker::new(text);

        for (start, end, category) in self.face_matches(text) {
            let span = Span::new(tracker.char_offset(start)?, tracker.char_offset(end)?)?;
            annotations.push(
                SpanAnnotation::new(span, &self.name, AnnotationKind::Auxiliary)
                    .with_category(category),
            );

            for &offset in &candidates {
                if span.contains(offset) {
                    annotations.push(
                        SpanAnnotation::new(span, &self.name, AnnotationKind::Suppressed)
                            .with_category(category),
                    );
                }
            }

            if starts_new_clause(text[end..].chars().next()) {
                annotations.push(
                    SpanAnnotation::new(span, &self.name, AnnotationKind::Confirmed)
                        .with_category(category),
                );
            }
        }

        debug!(
            detector = %self.name,
            annotations = annotations.len(),
            "facemark scan complete"
        );
        store.add_layer(&self.name, annotations)?;
        Ok(())
    }
}
