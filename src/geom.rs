use cgmath::*;

/// Axis-aligned integer rectangle in pixel space. `origin` is the top-left
/// corner and y grows downward, matching indexed image memory order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub origin: Point2<i32>,
    pub extent: Vector2<i32>,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            origin: point2(0, 0),
            extent: vec2(0, 0),
        }
    }
}

impl Bounds {
    pub fn new(origin: Point2<i32>, extent: Vector2<i32>) -> Self {
        Self { origin, extent }
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }
    pub fn right(&self) -> i32 {
        self.origin.x + self.extent.x
    }
    pub fn top(&self) -> i32 {
        self.origin.y
    }
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.extent.y
    }
    pub fn width(&self) -> i32 {
        self.extent.x
    }
    pub fn height(&self) -> i32 {
        self.extent.y
    }

    /// Half-open overlap test on both axes; rectangles sharing only an edge
    /// or a corner do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// The region covered by both rectangles, or None when they don't overlap.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        if !self.overlaps(other) {
            return None;
        }

        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Bounds::new(
            point2(left, top),
            vec2(right - left, bottom - top),
        ))
    }

    /// True if `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod bounds_tests {
    use super::*;

    #[test]
    fn overlaps_works() {
        let a = Bounds::new(point2(0, 0), vec2(10, 10));

        assert!(a.overlaps(&Bounds::new(point2(5, 5), vec2(10, 10))));
        assert!(a.overlaps(&Bounds::new(point2(-5, -5), vec2(10, 10))));
        assert!(a.overlaps(&Bounds::new(point2(2, 2), vec2(2, 2))));
        assert!(a.overlaps(&a));

        // disjoint on one axis is enough to reject
        assert!(!a.overlaps(&Bounds::new(point2(20, 0), vec2(10, 10))));
        assert!(!a.overlaps(&Bounds::new(point2(0, -20), vec2(10, 10))));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Bounds::new(point2(0, 0), vec2(10, 10));

        assert!(!a.overlaps(&Bounds::new(point2(10, 0), vec2(10, 10))));
        assert!(!a.overlaps(&Bounds::new(point2(-10, 0), vec2(10, 10))));
        assert!(!a.overlaps(&Bounds::new(point2(0, 10), vec2(10, 10))));
        assert!(!a.overlaps(&Bounds::new(point2(0, -10), vec2(10, 10))));
        assert!(!a.overlaps(&Bounds::new(point2(10, 10), vec2(10, 10))));
    }

    #[test]
    fn intersection_works() {
        let a = Bounds::new(point2(0, 0), vec2(10, 10));
        let b = Bounds::new(point2(6, -4), vec2(10, 10));

        assert_eq!(
            a.intersection(&b),
            Some(Bounds::new(point2(6, 0), vec2(4, 6)))
        );
        assert_eq!(
            b.intersection(&a),
            Some(Bounds::new(point2(6, 0), vec2(4, 6)))
        );

        // containment yields the smaller rect
        let c = Bounds::new(point2(2, 3), vec2(4, 4));
        assert_eq!(a.intersection(&c), Some(c));

        assert_eq!(
            a.intersection(&Bounds::new(point2(10, 0), vec2(5, 5))),
            None
        );
    }

    #[test]
    fn contains_works() {
        let a = Bounds::new(point2(0, 0), vec2(10, 10));

        assert!(a.contains(&a));
        assert!(a.contains(&Bounds::new(point2(0, 0), vec2(10, 5))));
        assert!(a.contains(&Bounds::new(point2(3, 3), vec2(2, 2))));
        assert!(!a.contains(&Bounds::new(point2(8, 8), vec2(4, 4))));
        assert!(!a.contains(&Bounds::new(point2(-1, 0), vec2(5, 5))));
    }
}
