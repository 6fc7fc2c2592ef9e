use crate::node::SearchDetails;

/// Tick-driven search interface.
///
/// A searcher owns its complete state — frontier, visited set, in-flight
/// neighbour queue — between calls, so the only suspension point is the
/// return boundary of [`tick`](StepSearcher::tick). Ticking after the search
/// has finished is safe: the terminal snapshot is reported again without
/// further mutation.
pub trait StepSearcher {
    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Advance the search by one bounded unit of work and report progress.
    fn tick(&mut self) -> SearchDetails;
}
