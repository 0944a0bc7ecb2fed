/// Memoization of path counts keyed by cell and remaining budget
pub mod cache;
/// Reachability exploration with distinct-terminal and path-count scoring
pub mod explorer;
/// Flood-fill region partitioning
pub mod regions;
/// Cost-ordered search for the cheapest route to a terminal
pub mod shortest;
/// Dense visited-set bookkeeping
pub mod visited;

pub use explorer::{Aggregation, Exploration, explore_reachable};
pub use shortest::{ShortestPaths, shortest_costs};
