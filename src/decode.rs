//! Decoding raw model output into candidate detections.
//!
//! An inference call produces two tensors: an `[N, stride]` box tensor whose
//! first four columns are `(cx, cy, w, h)` in normalized center form, and an
//! `[N, C]` confidence tensor with one column per class. Decoding picks the
//! best class per row, filters on the confidence threshold and converts each
//! surviving box into a top-left-origin rectangle.

use crate::detection::Detection;
use crate::geometry::Rect;
use crate::tensor::TensorView;
use crate::trace::{trace_event, trace_span};
use crate::util::{DetPostError, DetPostResult};

/// Leading box-tensor columns holding coordinates; extra columns are ignored.
const BOX_COORDS: usize = 4;

/// Decodes box and confidence tensors into unranked candidate detections.
///
/// Per row, the class columns are scanned left to right and the strictly
/// highest confidence wins, so ties keep the lowest class index. Rows whose
/// best confidence is less than or equal to `confidence_threshold` are
/// dropped; the comparison is strict, a confidence exactly at the threshold
/// is rejected.
///
/// The output is in tensor row order: unsorted, unsuppressed and uncapped.
/// Ranking and non-maximum suppression happen downstream in
/// [`rank_and_suppress`](crate::suppress::rank_and_suppress).
///
/// # Errors
///
/// Fails with no partial results when the tensors disagree on the row count,
/// the box tensor has fewer than four columns, the confidence tensor has no
/// class columns, or `confidence_threshold` lies outside `[0, 1)`.
pub fn decode(
    boxes: TensorView<'_, f32>,
    confidences: TensorView<'_, f32>,
    confidence_threshold: f32,
) -> DetPostResult<Vec<Detection>> {
    if !(0.0..1.0).contains(&confidence_threshold) {
        return Err(DetPostError::InvalidArgument {
            name: "confidence_threshold",
            value: confidence_threshold,
        });
    }
    if boxes.rows() != confidences.rows() {
        return Err(DetPostError::RowCountMismatch {
            boxes: boxes.rows(),
            confidences: confidences.rows(),
        });
    }
    if boxes.cols() < BOX_COORDS {
        return Err(DetPostError::BoxTensorTooNarrow { cols: boxes.cols() });
    }
    if confidences.cols() == 0 {
        return Err(DetPostError::NoClasses);
    }

    let _span = trace_span!(
        "decode",
        rows = boxes.rows(),
        classes = confidences.cols()
    )
    .entered();

    let mut detections = Vec::new();
    for (box_row, class_row) in boxes.iter_rows().zip(confidences.iter_rows()) {
        let mut best_confidence = 0.0f32;
        let mut best_class = 0usize;
        for (class_idx, &confidence) in class_row.iter().enumerate() {
            if confidence > best_confidence {
                best_confidence = confidence;
                best_class = class_idx;
            }
        }

        if best_confidence <= confidence_threshold {
            continue;
        }

        let bounding_box = Rect::from_center(box_row[0], box_row[1], box_row[2], box_row[3]);
        detections.push(Detection {
            class_index: best_class,
            confidence: best_confidence,
            bounding_box,
        });
    }

    trace_event!("decoded", candidates = detections.len());
    Ok(detections)
}
