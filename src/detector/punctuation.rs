use tracing::debug;

use crate::annotation::{AnnotationKind, Annotations, Span, SpanAnnotation};
use crate::detector::Detector;
use crate::error::Result;

/// Terminal punctuation accepted unconditionally.
const TERMINALS: &[char] = &['。', '．', '！', '？', '!', '?'];

/// First-pass rule: propose a boundary candidate after every run of
/// terminal punctuation.
///
/// An ASCII full stop only counts when followed by whitespace or end of
/// text, which keeps decimals ("2.5") and dotted abbreviations from
/// flooding the candidate layer. Consecutive terminators ("！？", "。。。")
/// produce a single candidate at the end of the run.
pub struct PunctuationDetector {
    name: String,
}

impl PunctuationDetector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn is_terminal(c: char, next: Option<char>) -> bool {
        if TERMINALS.contains(&c) {
            return true;
        }
        c == '.' && next.map_or(true, |n| n.is_whitespace())
    }
}

impl Detector for PunctuationDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotate(&self, text: &str, store: &mut Annotations) -> Result<()> {
        let chars: Vec<char> = text.chars().collect();
        let mut annotations = Vec::new();

        let mut i = 0;
        while i < chars.len() {
            if Self::is_terminal(chars[i], chars.get(i + 1).copied()) {
                let run_start = i;
                while i < chars.len() && Self::is_terminal(chars[i], chars.get(i + 1).copied()) {
                    i += 1;
                }
                annotations.push(SpanAnnotation::new(
                    Span::new(run_start, i)?,
                    &self.name,
                    AnnotationKind::BoundaryCandidate,
                ));
            } else {
                i += 1;
            }
        }

        debug!(
            detector = %self.name,
            candidates = annotations.len(),
            "first-pass punctuation scan complete"
        );
        store.add_layer(&self.name, annotations)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(text: &str) -> Vec<usize> {
        let detector = PunctuationDetector::new("punctuation");
        let mut store = Annotations::new();
        detector.annotate(text, &mut store).unwrap();
        store
            .get_layer("punctuation")
            .unwrap()
            .iter()
            .map(|a| a.span.end())
            .collect()
    }

    #[test]
    fn test_japanese_terminators() {
        assert_eq!(candidates("今日は晴れ。明日は雨。"), vec![6, 11]);
        assert_eq!(candidates("本当？すごい！"), vec![3, 7]);
    }

    #[test]
    fn test_terminator_runs_collapse() {
        // "えっ！？まさか。。。" - the run "！？" gives one candidate.
        assert_eq!(candidates("えっ！？まさか。。。"), vec![4, 10]);
    }

    #[test]
    fn test_ascii_full_stop_needs_following_space() {
        assert_eq!(candidates("Pi is 3.14 exactly."), vec![19]);
        assert_eq!(candidates("One. Two."), vec![4, 9]);
    }

    #[test]
    fn test_no_terminators_no_candidates() {
        assert_eq!(candidates("まだ途中"), Vec::<usize>::new());
        assert_eq!(candidates(""), Vec::<usize>::new());
    }

    #[test]
    fn test_layer_registered_even_when_empty() {
        let detector = PunctuationDetector::new("punctuation");
        let mut store = Annotations::new();
        detector.annotate("まだ途中", &mut store).unwrap();
        assert!(store.has_layer("punctuation"));
    }
}
