pub mod annotation;
pub mod detector;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod resolution;
pub mod segmenter;

// Re-export main types for convenient access
pub use annotation::{AnnotationKind, Annotations, Span, SpanAnnotation};
pub use detector::Detector;
pub use error::Error;
pub use pipeline::{DetectorWarning, Pipeline, PipelineConfig};
pub use segmenter::{Segmentation, Sentences};
