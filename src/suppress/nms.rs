//! Greedy non-maximum suppression over confidence-ranked detections.

use crate::detection::Detection;
use crate::trace::{trace_event, trace_span};

/// Removes detections that overlap a higher-confidence detection too closely.
///
/// Walks the list in order; each still-kept detection suppresses every later
/// one whose IoU with it is strictly greater than `iou_threshold`, so an
/// overlap exactly at the threshold keeps both boxes. The output preserves
/// the input order.
///
/// The input must already be sorted descending by confidence; the greedy walk
/// relies on that ordering. O(N^2) in the worst case, which is fine for the
/// tens of boxes that survive the confidence filter.
pub fn suppress(detections: &[Detection], iou_threshold: f32) -> Vec<Detection> {
    debug_assert!(
        detections
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence),
        "suppress expects input sorted descending by confidence"
    );

    let _span = trace_span!("nms", candidates = detections.len()).entered();

    let mut keep = vec![true; detections.len()];
    let mut kept = Vec::new();
    for i in 0..detections.len() {
        if !keep[i] {
            continue;
        }
        kept.push(detections[i]);

        let anchor = detections[i].bounding_box;
        for j in (i + 1)..detections.len() {
            if keep[j] && anchor.iou(&detections[j].bounding_box) > iou_threshold {
                keep[j] = false;
            }
        }
    }

    trace_event!(
        "nms_done",
        kept = kept.len(),
        suppressed = detections.len() - kept.len()
    );
    kept
}
