//! Ranking, duplicate suppression and result capping.

pub(crate) mod nms;

pub use nms::suppress;

use crate::detection::{sort_by_confidence_desc, Detection};
use crate::trace::trace_event;
use crate::util::{DetPostError, DetPostResult};

/// Sorts detections by descending confidence, removes overlapping duplicates
/// and truncates the result to `max_count` entries.
///
/// A `max_count` of zero yields an empty list. When fewer detections survive
/// suppression than `max_count`, all of them are returned.
///
/// # Errors
///
/// Fails when `iou_threshold` lies outside `[0, 1]`.
pub fn rank_and_suppress(
    mut detections: Vec<Detection>,
    iou_threshold: f32,
    max_count: usize,
) -> DetPostResult<Vec<Detection>> {
    if !(0.0..=1.0).contains(&iou_threshold) {
        return Err(DetPostError::InvalidArgument {
            name: "iou_threshold",
            value: iou_threshold,
        });
    }

    sort_by_confidence_desc(&mut detections);
    let mut kept = suppress(&detections, iou_threshold);
    if kept.len() > max_count {
        kept.truncate(max_count);
    }

    trace_event!("ranked", kept = kept.len());
    Ok(kept)
}
