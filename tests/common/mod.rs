// Shared fixture helpers for the integration suites. Not every suite uses
// every helper.
#![allow(dead_code)]

use kugiri::{AnnotationKind, Annotations, Detector, Span, SpanAnnotation};

/// First-pass layer name used by every fixture in these suites.
pub const FIRST_PASS: &str = "punctuation";

/// Store seeded the way the upstream annotator fixtures do it: a single
/// boundary candidate covering the final character of the text.
pub fn seeded_store(text: &str) -> Annotations {
    let len = text.chars().count();
    let mut store = Annotations::new();
    store
        .add_layer(
            FIRST_PASS,
            vec![SpanAnnotation::new(
                Span::new(len.saturating_sub(1), len).unwrap(),
                FIRST_PASS,
                AnnotationKind::BoundaryCandidate,
            )],
        )
        .unwrap();
    store
}

/// Run one detector against a seeded store and return its layer.
pub fn annotate_seeded(detector: &dyn Detector, text: &str) -> Annotations {
    let mut store = seeded_store(text);
    detector
        .annotate(text, &mut store)
        .expect("detector should annotate seeded store");
    store
}

/// Boundary offsets a detector asserted with `Confirmed`.
pub fn confirmed_ends(store: &Annotations, layer: &str) -> Vec<usize> {
    store
        .get_layer(layer)
        .expect("layer should exist")
        .iter()
        .filter(|a| a.kind == AnnotationKind::Confirmed)
        .map(|a| a.span.end())
        .collect()
}
