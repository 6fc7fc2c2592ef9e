use stepgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The admissible heuristic for 4-way movement with unit step cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(2, 2)), 4);
        assert_eq!(manhattan(Point::new(3, 1), Point::new(1, 4)), 5);
        assert_eq!(manhattan(Point::new(5, 5), Point::new(5, 5)), 0);
    }

    #[test]
    fn chebyshev_takes_max_axis() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(2, 2)), 2);
        assert_eq!(chebyshev(Point::new(3, 1), Point::new(1, 4)), 3);
    }
}
