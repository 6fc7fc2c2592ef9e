use stepgrid_core::Point;

/// Cached neighbour computation helper.
///
/// Enumerates the four cardinal neighbours of a grid point in fixed
/// **west, east, north, south** order, keeping only those for which `keep`
/// returns `true`. The order is part of the searcher contract: the in-flight
/// neighbour queue is consumed in exactly this order, one entry per tick.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `p`, filtered by `keep`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        const DIRS: [Point; 4] = [
            Point::new(-1, 0),
            Point::new(1, 0),
            Point::new(0, -1),
            Point::new(0, 1),
        ];
        for d in DIRS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_is_west_east_north_south() {
        let mut nb = Neighbors::new();
        let out = nb.cardinal(Point::new(5, 5), |_| true);
        assert_eq!(
            out,
            [
                Point::new(4, 5),
                Point::new(6, 5),
                Point::new(5, 4),
                Point::new(5, 6),
            ]
        );
    }

    #[test]
    fn cardinal_filters_with_predicate() {
        let mut nb = Neighbors::new();
        // Keep only points in the positive quadrant.
        let out = nb.cardinal(Point::new(0, 0), |p| p.x >= 0 && p.y >= 0);
        assert_eq!(out, [Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn buffer_is_reused_across_calls() {
        let mut nb = Neighbors::new();
        nb.cardinal(Point::new(0, 0), |_| true);
        let out = nb.cardinal(Point::new(9, 9), |_| false);
        assert!(out.is_empty());
    }
}
