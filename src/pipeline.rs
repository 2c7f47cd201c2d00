//! The composed decode, rank and suppress pipeline.
//!
//! `Detector` is the synchronous front end a caller hands raw inference
//! output to. Delivering results back to a UI-owning thread, retrying failed
//! inference and throttling frame submission are all the caller's concerns;
//! the detector itself is a plain function over immutable inputs.

use std::collections::HashMap;

use crate::decode::decode;
use crate::detection::Detection;
use crate::suppress::rank_and_suppress;
use crate::tensor::TensorView;
use crate::util::{DetPostError, DetPostResult};

/// Model metadata key carrying the suppression threshold.
const NMS_THRESHOLD_KEY: &str = "non_maximum_suppression_threshold";

/// Model metadata key carrying the comma-separated class labels.
const CLASSES_KEY: &str = "classes";

/// Fallback when the metadata carries no usable suppression threshold.
const DEFAULT_IOU_THRESHOLD: f32 = 0.5;

/// Configuration for the post-processing pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorConfig {
    /// Detections at or below this confidence are dropped during decoding.
    pub confidence_threshold: f32,
    /// Overlap above this IoU suppresses the lower-confidence detection.
    pub iou_threshold: f32,
    /// Maximum number of detections returned per call.
    pub max_detections: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.6,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            max_detections: 10,
        }
    }
}

impl DetectorConfig {
    /// Sources the suppression threshold from model metadata.
    ///
    /// Reads the `non_maximum_suppression_threshold` entry, falling back to
    /// the 0.5 default when the key is absent or does not parse as a number.
    pub fn with_metadata(mut self, metadata: &HashMap<String, String>) -> Self {
        self.iou_threshold = metadata
            .get(NMS_THRESHOLD_KEY)
            .and_then(|raw| raw.trim().parse::<f32>().ok())
            .unwrap_or(DEFAULT_IOU_THRESHOLD);
        self
    }

    /// Checks every parameter against its documented range.
    pub fn validate(&self) -> DetPostResult<()> {
        if !(0.0..1.0).contains(&self.confidence_threshold) {
            return Err(DetPostError::InvalidArgument {
                name: "confidence_threshold",
                value: self.confidence_threshold,
            });
        }
        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err(DetPostError::InvalidArgument {
                name: "iou_threshold",
                value: self.iou_threshold,
            });
        }
        Ok(())
    }
}

/// Splits the comma-separated `classes` metadata entry into a label list.
///
/// Returns `None` when the model carries no label metadata; `class_index`
/// values then have no names to resolve against.
pub fn labels_from_metadata(metadata: &HashMap<String, String>) -> Option<Vec<String>> {
    metadata
        .get(CLASSES_KEY)
        .map(|raw| raw.split(',').map(str::to_owned).collect())
}

/// Post-processing front end composing decode and suppression.
#[derive(Clone, Copy, Debug)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Creates a detector, rejecting out-of-range configuration up front.
    ///
    /// There is no partially constructed detector: either every parameter is
    /// within range or the call fails.
    pub fn new(config: DetectorConfig) -> DetPostResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs the full pipeline over one inference result.
    ///
    /// Decodes candidates, ranks them by confidence, suppresses duplicates
    /// and caps the result at `max_detections`. Every dropped candidate is
    /// attributable to exactly one of: below the confidence threshold,
    /// suppressed by NMS, or beyond the result cap.
    pub fn detect(
        &self,
        boxes: TensorView<'_, f32>,
        confidences: TensorView<'_, f32>,
    ) -> DetPostResult<Vec<Detection>> {
        let candidates = decode(boxes, confidences, self.config.confidence_threshold)?;
        rank_and_suppress(
            candidates,
            self.config.iou_threshold,
            self.config.max_detections,
        )
    }
}
