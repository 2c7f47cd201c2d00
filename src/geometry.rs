//! Normalized rectangle geometry for bounding boxes.

/// Axis-aligned rectangle in normalized image coordinates.
///
/// `(x, y)` is the top-left corner; all fields are fractions of the image
/// size. Edges may fall outside `[0, 1]` after center conversion of a box
/// near the image border, and consumers must tolerate that. Width and height
/// are non-negative for rectangles decoded from model output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its center point and size.
    ///
    /// Model output encodes boxes in center form; the origin is recovered as
    /// `center - size / 2`.
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Returns the left edge coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Returns the top edge coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Returns the right edge coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the rectangle area.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Computes the intersection-over-union with `other`.
    ///
    /// Returns a ratio in `[0, 1]`: 1 for identical rectangles, 0 for
    /// disjoint ones. A zero-area union yields 0 rather than a division by
    /// zero.
    pub fn iou(&self, other: &Rect) -> f32 {
        let inter_w = (self.right().min(other.right()) - self.left().max(other.left())).max(0.0);
        let inter_h = (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0);
        let intersection = inter_w * inter_h;
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            return 0.0;
        }
        intersection / union
    }

    /// Maps a normalized rectangle into a container of the given pixel size.
    ///
    /// This is the transform the presentation layer applies before drawing:
    /// every coordinate is multiplied by the matching container dimension.
    pub fn scaled_to(&self, container_width: f32, container_height: f32) -> Rect {
        Rect {
            x: self.x * container_width,
            y: self.y * container_height,
            width: self.width * container_width,
            height: self.height * container_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn from_center_recovers_origin() {
        let rect = Rect::from_center(0.5, 0.5, 0.2, 0.4);
        assert!((rect.x - 0.4).abs() < 1e-6);
        assert!((rect.y - 0.3).abs() < 1e-6);
        assert!((rect.width - 0.2).abs() < 1e-6);
        assert!((rect.height - 0.4).abs() < 1e-6);
    }

    #[test]
    fn from_center_may_leave_unit_range() {
        let rect = Rect::from_center(0.05, 0.05, 0.3, 0.3);
        assert!(rect.x < 0.0);
        assert!(rect.y < 0.0);
    }

    #[test]
    fn iou_of_identical_rects_is_one() {
        let rect = Rect::new(0.1, 0.1, 0.5, 0.5);
        assert!((rect.iou(&rect) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn iou_of_disjoint_rects_is_zero() {
        let a = Rect::new(0.0, 0.0, 0.2, 0.2);
        let b = Rect::new(0.5, 0.5, 0.2, 0.2);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn iou_of_zero_area_rects_is_zero() {
        let a = Rect::new(0.1, 0.1, 0.0, 0.0);
        let b = Rect::new(0.1, 0.1, 0.0, 0.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn iou_of_half_overlap() {
        // Two unit-height boxes of width 1, shifted by half a width:
        // intersection 0.5, union 1.5.
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(0.5, 0.0, 1.0, 1.0);
        assert!((a.iou(&b) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn iou_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 0.6, 0.6);
        let b = Rect::new(0.3, 0.2, 0.5, 0.4);
        assert!((a.iou(&b) - b.iou(&a)).abs() < 1e-6);
    }

    #[test]
    fn scaled_to_maps_into_container() {
        let rect = Rect::new(0.25, 0.5, 0.5, 0.25);
        let pixels = rect.scaled_to(640.0, 480.0);
        assert_eq!(pixels, Rect::new(160.0, 240.0, 320.0, 120.0));
    }
}
