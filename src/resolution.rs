//! Conflict resolution: collapse every layer's findings into the single
//! authoritative list of sentence-ending offsets.

use tracing::debug;

use crate::annotation::{AnnotationKind, Annotations};
use crate::error::{Error, Result};

/// Resolve all layers into an ascending list of boundary offsets.
///
/// Candidates (`BoundaryCandidate` and `Confirmed`) are keyed by their
/// span's `end`. A candidate is vetoed when its offset falls inside any
/// `Suppressed` span's half-open range, from any layer; no later detector
/// can resurrect a vetoed boundary. Survivors are sorted, deduplicated
/// (two boundaries with no characters between them collapse into one) and
/// the document length is appended so every non-empty document ends after
/// its last sentence. An offset-0 boundary would create an empty leading
/// sentence and is dropped.
///
/// Any annotation reaching past the end of the text fails with
/// `OffsetOutOfRange` instead of being clamped: a detector bug must not
/// silently corrupt the segmentation.
pub fn resolve(text: &str, store: &Annotations) -> Result<Vec<usize>> {
    let len = text.chars().count();

    let mut candidates: Vec<usize> = Vec::new();
    let mut suppressed: Vec<(usize, usize)> = Vec::new();

    for (layer, annotations) in store.iter() {
        for annotation in annotations {
            let span = annotation.span;
            if span.end() > len {
                return Err(Error::OffsetOutOfRange {
                    layer: layer.to_string(),
                    start: span.start(),
                    end: span.end(),
                    len,
                });
            }
            match annotation.kind {
                AnnotationKind::BoundaryCandidate | AnnotationKind::Confirmed => {
                    candidates.push(span.end());
                }
                AnnotationKind::Suppressed => {
                    suppressed.push((span.start(), span.end()));
                }
                AnnotationKind::Auxiliary => {}
            }
        }
    }

    let mut boundaries: Vec<usize> = candidates
        .into_iter()
        .filter(|&offset| offset != 0)
        .filter(|&offset| !suppressed.iter().any(|&(s, e)| s <= offset && offset < e))
        .collect();

    boundaries.sort_unstable();
    boundaries.dedup();

    if len > 0 && boundaries.last() != Some(&len) {
        boundaries.push(len);
    }

    debug!(boundaries = boundaries.len(), "resolution complete");
    Ok(boundaries)
}
