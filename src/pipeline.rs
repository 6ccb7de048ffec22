use tracing::{debug, warn};

use crate::annotation::{Annotations, SpanAnnotation};
use crate::detector::{
    Detector, EmojiDetector, FacemarkDetector, NumberDetector, PunctuationDetector,
    QuotationDetector,
};
use crate::error::{Error, Result};
use crate::resolution;
use crate::segmenter::Segmentation;

/// Pipeline-level configuration.
///
/// The first-pass layer name is an explicit value rather than a process-wide
/// constant, so pipelines with different first-pass conventions can coexist.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Name of the candidate layer that override detectors read. Either
    /// seeded by the caller or produced by the first detector.
    pub first_pass_layer: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            first_pass_layer: "punctuation".to_string(),
        }
    }
}

/// Record of a detector whose contribution was discarded.
#[derive(Debug, Clone)]
pub struct DetectorWarning {
    pub detector: String,
    pub message: String,
}

/// Applies an ordered list of detectors to one document and resolves their
/// layers into the final segmentation.
///
/// Execution is strictly sequential: each detector may read layers written
/// by its predecessors. One pipeline instance processes one document at a
/// time; parallelism across documents is the caller's concern, with one
/// independent pipeline per worker.
pub struct Pipeline {
    config: PipelineConfig,
    detectors: Vec<Box<dyn Detector>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field(
                "detectors",
                &self
                    .detectors
                    .iter()
                    .map(|d| d.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Pipeline {
    /// Build a pipeline, validating detector read-dependencies against the
    /// execution order. Every layer a detector reads must be the first-pass
    /// layer or be produced by an earlier detector; anything else is a
    /// configuration error, caught here before any document is processed.
    pub fn new(config: PipelineConfig, detectors: Vec<Box<dyn Detector>>) -> Result<Self> {
        let mut produced: Vec<String> = vec![config.first_pass_layer.clone()];
        for detector in &detectors {
            for dependency in detector.reads() {
                if !produced.iter().any(|name| name == dependency) {
                    return Err(Error::LayerNotFound(dependency.clone()));
                }
            }
            produced.push(detector.name().to_string());
        }

        Ok(Self { config, detectors })
    }

    /// The standard Japanese cascade: punctuation first pass, then the
    /// facemark, emoji, number and quotation override rules.
    pub fn japanese(config: PipelineConfig) -> Result<Self> {
        let first = config.first_pass_layer.clone();
        let detectors: Vec<Box<dyn Detector>> = vec![
            Box::new(PunctuationDetector::new(&first)),
            Box::new(FacemarkDetector::new(&first)?),
            Box::new(EmojiDetector::new(&first)),
            Box::new(NumberDetector::new(&first)),
            Box::new(QuotationDetector::new(&first)),
        ];
        Self::new(config, detectors)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every detector over `text`, starting from an empty store.
    pub fn run(&self, text: &str) -> (Annotations, Vec<DetectorWarning>) {
        self.run_with_store(text, Annotations::new())
    }

    /// Run every detector over `text`, starting from a caller-provided
    /// store (typically seeded with a first-pass candidate layer).
    ///
    /// The producer of an already-seeded first-pass layer is skipped
    /// silently; any other name collision is a duplicate-layer conflict
    /// and the late detector contributes nothing. A failing detector
    /// likewise contributes an empty layer and a recorded warning; a
    /// single misbehaving rule never aborts segmentation of an
    /// otherwise-valid document.
    pub fn run_with_store(
        &self,
        text: &str,
        mut store: Annotations,
    ) -> (Annotations, Vec<DetectorWarning>) {
        let mut warnings = Vec::new();

        for detector in &self.detectors {
            let name = detector.name();
            if store.has_layer(name) {
                if name == self.config.first_pass_layer {
                    // Caller seeded the first pass; its producer steps aside.
                    debug!(detector = name, "first-pass layer already seeded, skipping");
                } else {
                    warn!(detector = name, "layer name already taken, contributing nothing");
                    warnings.push(DetectorWarning {
                        detector: name.to_string(),
                        message: Error::DuplicateLayer(name.to_string()).to_string(),
                    });
                }
                continue;
            }

            let layers_before = store.layer_count();
            match detector.annotate(text, &mut store) {
                Ok(()) => {
                    if store.layer_count() > layers_before + 1 {
                        warn!(detector = name, "detector added more than one layer");
                        warnings.push(DetectorWarning {
                            detector: name.to_string(),
                            message: "added more than one layer".to_string(),
                        });
                    }
                }
                Err(e) => {
                    warn!(detector = name, error = %e, "detector failed, treating layer as empty");
                    warnings.push(DetectorWarning {
                        detector: name.to_string(),
                        message: e.to_string(),
                    });
                }
            }

            // A detector that found nothing (or failed) still owns its
            // layer, so later readers never miss it at runtime.
            if !store.has_layer(name) {
                let _ = store.add_layer(name, Vec::new());
            }
        }

        (store, warnings)
    }

    /// Segment a document: run the cascade, resolve all layers, and wrap
    /// the boundaries for sentence iteration.
    pub fn segment<'t>(&self, text: &'t str) -> Result<Segmentation<'t>> {
        let (store, warnings) = self.run(text);
        let boundaries = resolution::resolve(text, &store)?;
        Ok(Segmentation::new(text, boundaries, warnings))
    }

    /// Segment with a caller-supplied first-pass candidate layer in place
    /// of the pipeline's own first stage.
    pub fn segment_seeded<'t>(
        &self,
        text: &'t str,
        seed: Vec<SpanAnnotation>,
    ) -> Result<Segmentation<'t>> {
        let mut store = Annotations::new();
        store.add_layer(&self.config.first_pass_layer, seed)?;
        let (store, warnings) = self.run_with_store(text, store);
        let boundaries = resolution::resolve(text, &store)?;
        Ok(Segmentation::new(text, boundaries, warnings))
    }
}
