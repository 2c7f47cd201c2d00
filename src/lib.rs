//! Detpost turns raw object-detection model output into ranked bounding boxes.
//!
//! The crate post-processes the two tensors an object-detection model emits
//! per inference call: it decodes box coordinates and per-class confidences
//! into candidate detections, filters them on a confidence threshold, removes
//! duplicate overlapping boxes with non-maximum suppression and caps the
//! result. Running the model itself is the caller's concern; this crate only
//! consumes its output buffers.

pub mod decode;
pub mod detection;
pub mod geometry;
pub mod pipeline;
pub mod suppress;
pub mod tensor;
pub mod throttle;
mod trace;
pub mod util;

pub use decode::decode;
pub use detection::{sort_by_confidence_desc, Detection};
pub use geometry::Rect;
pub use pipeline::{labels_from_metadata, Detector, DetectorConfig};
pub use suppress::{rank_and_suppress, suppress};
pub use tensor::TensorView;
pub use throttle::Throttler;
pub use util::{DetPostError, DetPostResult};
