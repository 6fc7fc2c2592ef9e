//! Tick-resumable pathfinding over a typed-cell grid.
//!
//! Unlike a run-to-completion search, a searcher here advances one bounded
//! unit of work per [`StepSearcher::tick`] call — take a frontier node, or
//! examine exactly one neighbour — and returns a [`SearchDetails`] snapshot
//! after every step. A driver can therefore render the frontier, the visited
//! set, and the node under expansion between calls, pacing the algorithm
//! from outside while the searcher keeps its full state suspended.
//!
//! # Contents
//!
//! | Item | Role |
//! |---|---|
//! | [`StepSearcher`] | the tick-driven search contract |
//! | [`Astar`] | A\* strategy with frontier/visited bookkeeping |
//! | [`Neighbors`] | cardinal neighbour enumeration (west, east, north, south) |
//! | [`manhattan`] | admissible grid heuristic |

mod astar;
mod distance;
mod neighbors;
mod node;
mod traits;

pub use astar::Astar;
pub use distance::{chebyshev, manhattan};
pub use neighbors::Neighbors;
pub use node::{Node, SearchDetails};
pub use traits::StepSearcher;
