use std::collections::{HashMap, VecDeque};

use stepgrid_core::{CellType, Grid, Point};

use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::node::{Node, SearchDetails};
use crate::traits::StepSearcher;

/// Tick-resumable A* over a typed-cell [`Grid`].
///
/// All search state lives in the instance: the frontier and visited lists
/// own their nodes (a node moves from one to the other exactly once), the
/// in-flight neighbour queue holds the coordinates still to examine for the
/// node under expansion, and `current` names that node by identifier. One
/// [`tick`](StepSearcher::tick) either takes the cheapest frontier node and
/// examines its first neighbour, or examines the next queued neighbour.
///
/// Progress is annotated back onto the grid (`Open`/`Closed`/`Current`)
/// purely for visualization; traversability was decided when the neighbour
/// was generated.
pub struct Astar {
    grid: Grid,
    goal: Point,
    frontier: Vec<Node>,
    visited: Vec<Node>,
    /// id → slot in `visited`, for the backward parent walk.
    visited_slots: HashMap<u32, usize>,
    /// Neighbours of `current` not yet examined.
    pending: VecDeque<Point>,
    /// Identifier of the node being expanded. The node itself is owned by
    /// the visited list.
    current: Option<u32>,
    neighbors: Neighbors,
    next_id: u32,
    operations: u64,
    path: Option<Vec<Point>>,
}

impl Astar {
    /// Create a searcher for the grid's Start→End endpoints.
    ///
    /// Returns `None` if the grid has no Start or no End cell. The origin
    /// node is seeded onto the frontier with id 1.
    pub fn new(grid: Grid) -> Option<Self> {
        let origin = grid.start()?;
        let goal = grid.end()?;
        let root = Node::new(1, None, origin, 0, manhattan(origin, goal));
        Some(Self {
            grid,
            goal,
            frontier: vec![root],
            visited: Vec::new(),
            visited_slots: HashMap::new(),
            pending: VecDeque::new(),
            current: None,
            neighbors: Neighbors::new(),
            next_id: 2,
            operations: 0,
            path: None,
        })
    }

    /// The destination coordinate.
    pub fn goal(&self) -> Point {
        self.goal
    }

    fn node(&self, id: u32) -> Node {
        self.visited[self.visited_slots[&id]]
    }

    /// Take the cheapest frontier node, move it to the visited list, and
    /// queue its neighbours. Returns the selected id.
    fn select_next(&mut self) -> u32 {
        // Stable min-f scan: on ties the earliest-inserted entry wins.
        let mut best = 0;
        for i in 1..self.frontier.len() {
            if self.frontier[i].f < self.frontier[best].f {
                best = i;
            }
        }
        let node = self.frontier.remove(best);
        self.grid.set_kind(node.pos, CellType::Closed);

        let grid = self.grid.clone();
        let queued = self
            .neighbors
            .cardinal(node.pos, move |p| grid.at(p).kind.passable());
        self.pending.extend(queued.iter().copied());

        self.visited_slots.insert(node.id, self.visited.len());
        self.visited.push(node);
        self.current = Some(node.id);
        node.id
    }

    /// Walk parent identifiers backward from `from` through the visited
    /// list, then flip the sequence to run origin→destination.
    fn reconstruct(&self, hit: Point, from: u32) -> Vec<Point> {
        let mut path = vec![hit];
        let mut next = Some(from);
        while let Some(id) = next {
            let node = self.node(id);
            path.push(node.pos);
            next = node.parent;
        }
        path.reverse();
        path
    }

    fn snapshot(&self) -> SearchDetails {
        let current = self.current.map(|id| self.node(id));
        SearchDetails {
            path: self.path.clone(),
            current,
            distance: current.map_or(0, |n| manhattan(n.pos, self.goal)),
            frontier: self.frontier.len(),
            visited: self.visited.len(),
            unexplored: self.grid.count_of(CellType::Empty),
            operations: self.operations,
        }
    }

    fn step(&mut self) -> SearchDetails {
        let cur_id = match self.current {
            Some(id) => id,
            None => {
                if self.frontier.is_empty() {
                    // Exhausted. Terminal: nothing left to take.
                    return self.snapshot();
                }
                self.select_next()
            }
        };

        let Some(next) = self.pending.pop_front() else {
            // Queue drained: retire this node and pick the next one within
            // the same call.
            self.grid.set_kind(self.node(cur_id).pos, CellType::Closed);
            self.current = None;
            return self.step();
        };

        let cur = self.node(cur_id);
        self.grid.set_kind(cur.pos, CellType::Current);

        if next == self.goal {
            self.path = Some(self.reconstruct(next, cur.id));
            return self.snapshot();
        }

        let h = manhattan(next, self.goal);
        let candidate = cur.g + 1 + h;

        // A cheaper route to an already-known cell repoints its total cost
        // and parent; g and h keep their discovery-time values.
        let mut known = false;
        if let Some(open) = self.frontier.iter_mut().find(|n| n.pos == next) {
            if open.f > candidate {
                open.f = candidate;
                open.parent = Some(cur.id);
            }
            known = true;
        }
        if let Some(closed) = self.visited.iter_mut().find(|n| n.pos == next) {
            if closed.f > candidate {
                closed.f = candidate;
                closed.parent = Some(cur.id);
            }
            known = true;
        }

        if !known {
            let node = Node::new(self.next_id, Some(cur.id), next, cur.g + 1, h);
            self.next_id += 1;
            self.frontier.push(node);
            self.grid.set_kind(next, CellType::Open);
        }

        self.snapshot()
    }
}

impl StepSearcher for Astar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn tick(&mut self) -> SearchDetails {
        self.operations += 1;
        if self.path.is_some() {
            // Success is permanent: report the same snapshot from here on.
            return self.snapshot();
        }
        self.step()
    }
}
