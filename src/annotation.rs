use crate::error::{Error, Result};

/// Half-open code-point range `[start, end)` into the original text.
///
/// Offsets count Unicode scalar values, not bytes, so a span stays cheap to
/// compare and valid for multibyte text. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Half-open containment: `start <= offset < end`.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// What a span annotation asserts about its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// A proposed sentence-ending position (keyed by the span's `end`).
    BoundaryCandidate,
    /// A veto: no boundary may survive inside this span.
    Suppressed,
    /// A boundary asserted by an override rule.
    Confirmed,
    /// Diagnostic output that resolution ignores.
    Auxiliary,
}

/// A span tagged with the rule that produced it and why.
///
/// Holds offsets only, never text, so annotations from every layer stay
/// valid simultaneously. Equality is by `(span, rule_name, kind)`; the
/// free-form `category` payload does not participate.
#[derive(Debug, Clone)]
pub struct SpanAnnotation {
    pub span: Span,
    pub rule_name: String,
    pub kind: AnnotationKind,
    pub category: Option<String>,
}

impl SpanAnnotation {
    pub fn new(span: Span, rule_name: impl Into<String>, kind: AnnotationKind) -> Self {
        Self {
            span,
            rule_name: rule_name.into(),
            kind,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl PartialEq for SpanAnnotation {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.rule_name == other.rule_name && self.kind == other.kind
    }
}

impl Eq for SpanAnnotation {}

#[derive(Debug, Clone)]
struct Layer {
    name: String,
    annotations: Vec<SpanAnnotation>,
}

/// Insertion-ordered collection of named annotation layers.
///
/// Each layer belongs to the detector that created it: other detectors may
/// read it but never write to it. Layers are append-only and are never
/// removed, so every detector's findings remain auditable for the final
/// resolution pass.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    // Layer count stays small (one per detector); a linear scan is cheaper
    // than hashing and preserves insertion order for free.
    layers: Vec<Layer>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new layer. Fails with `DuplicateLayer` if the name is taken.
    pub fn add_layer(
        &mut self,
        name: impl Into<String>,
        annotations: Vec<SpanAnnotation>,
    ) -> Result<()> {
        let name = name.into();
        if self.has_layer(&name) {
            return Err(Error::DuplicateLayer(name));
        }
        self.layers.push(Layer { name, annotations });
        Ok(())
    }

    /// Append to an existing layer, used when a detector contributes
    /// incrementally instead of replacing wholesale.
    pub fn merge_into(&mut self, name: &str, additional: Vec<SpanAnnotation>) -> Result<()> {
        match self.layers.iter_mut().find(|l| l.name == name) {
            Some(layer) => {
                layer.annotations.extend(additional);
                Ok(())
            }
            None => Err(Error::LayerNotFound(name.to_string())),
        }
    }

    /// Look up a layer by name.
    pub fn get_layer(&self, name: &str) -> Result<&[SpanAnnotation]> {
        self.layers
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.annotations.as_slice())
            .ok_or_else(|| Error::LayerNotFound(name.to_string()))
    }

    pub fn has_layer(&self, name: &str) -> bool {
        self.layers.iter().any(|l| l.name == name)
    }

    /// Registered layer names in insertion order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }

    /// All layers with their annotations, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SpanAnnotation])> {
        self.layers
            .iter()
            .map(|l| (l.name.as_str(), l.annotations.as_slice()))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
