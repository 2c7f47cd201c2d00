//! Detection records produced by the decode stage.

use std::cmp::Ordering;

use crate::geometry::Rect;

/// A single decoded detection in normalized image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    /// Index into the caller-owned label list. Always 0 for single-class
    /// models.
    pub class_index: usize,
    /// Model confidence in `[0, 1]`.
    pub confidence: f32,
    /// Top-left-origin bounding box.
    pub bounding_box: Rect,
}

fn confidence_cmp_desc(a: &Detection, b: &Detection) -> Ordering {
    b.confidence.total_cmp(&a.confidence)
}

/// Sorts detections by descending confidence.
///
/// The sort is stable, so detections with equal confidence keep their decode
/// (tensor row) order and repeated calls are deterministic.
pub fn sort_by_confidence_desc(detections: &mut [Detection]) {
    detections.sort_by(confidence_cmp_desc);
}

#[cfg(test)]
mod tests {
    use super::{sort_by_confidence_desc, Detection};
    use crate::geometry::Rect;

    fn det(class_index: usize, confidence: f32) -> Detection {
        Detection {
            class_index,
            confidence,
            bounding_box: Rect::new(0.0, 0.0, 0.1, 0.1),
        }
    }

    #[test]
    fn sorts_descending_by_confidence() {
        let mut detections = vec![det(0, 0.3), det(1, 0.9), det(2, 0.6)];
        sort_by_confidence_desc(&mut detections);
        let confidences: Vec<f32> = detections.iter().map(|d| d.confidence).collect();
        assert_eq!(confidences, vec![0.9, 0.6, 0.3]);
    }

    #[test]
    fn equal_confidences_keep_input_order() {
        let mut detections = vec![det(0, 0.5), det(1, 0.5), det(2, 0.5)];
        sort_by_confidence_desc(&mut detections);
        let classes: Vec<usize> = detections.iter().map(|d| d.class_index).collect();
        assert_eq!(classes, vec![0, 1, 2]);
    }
}
