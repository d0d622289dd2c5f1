// Core algorithm exports
pub mod ranker;
pub mod scoring;

pub use ranker::{RankResult, Ranker};
pub use scoring::calculate_compatibility;
