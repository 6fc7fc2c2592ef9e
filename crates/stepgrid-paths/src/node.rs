use stepgrid_core::Point;

/// A search-tree entry with cost bookkeeping.
///
/// Nodes are created when a coordinate first enters the frontier and are
/// never destroyed during a search; they migrate from the frontier to the
/// visited list exactly once. Identifiers increase monotonically and are
/// unique within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Unique identifier within one search.
    pub id: u32,
    /// Identifier of the node this one was reached from. `None` only for
    /// the origin.
    pub parent: Option<u32>,
    pub pos: Point,
    /// Step cost from the origin.
    pub g: i32,
    /// Heuristic estimate to the destination.
    pub h: i32,
    /// Total priority. Starts as `g + h`; a relaxation lowers `f` and
    /// repoints `parent` while `g` and `h` keep their discovery-time values.
    pub f: i32,
}

impl Node {
    /// Create a node with `f` derived from `g + h`.
    pub fn new(id: u32, parent: Option<u32>, pos: Point, g: i32, h: i32) -> Self {
        Self {
            id,
            parent,
            pos,
            g,
            h,
            f: g + h,
        }
    }
}

/// Progress snapshot returned from every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchDetails {
    /// The reconstructed origin→destination path, present only once the
    /// destination has been reached. Permanent from that tick onward.
    pub path: Option<Vec<Point>>,
    /// The node whose neighbours are being examined, if any.
    pub current: Option<Node>,
    /// Heuristic distance from `current` to the destination (0 if none).
    pub distance: i32,
    /// Number of discovered-but-unexpanded nodes.
    pub frontier: usize,
    /// Number of expanded nodes.
    pub visited: usize,
    /// Count of grid cells no search activity has touched yet.
    pub unexplored: usize,
    /// Strictly increasing tick counter, advanced on terminal ticks too.
    pub operations: u64,
}

impl SearchDetails {
    /// Whether the search has terminated, either by finding a path or by
    /// exhausting the frontier.
    pub fn done(&self) -> bool {
        self.path.is_some() || (self.frontier == 0 && self.current.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_derives_f() {
        let n = Node::new(7, Some(3), Point::new(1, 2), 4, 6);
        assert_eq!(n.f, 10);
        assert_eq!(n.parent, Some(3));
    }

    #[test]
    fn done_on_path_or_exhaustion() {
        let mut d = SearchDetails {
            path: None,
            current: None,
            distance: 0,
            frontier: 0,
            visited: 1,
            unexplored: 0,
            operations: 1,
        };
        assert!(d.done());
        d.frontier = 2;
        assert!(!d.done());
        d.path = Some(vec![Point::ZERO]);
        assert!(d.done());
    }
}
