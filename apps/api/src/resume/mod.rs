// Resume builder pipeline: section selection → document model → rendered
// PDF → download delivery. The renderer's CPU-bound work runs inside
// tokio::task::spawn_blocking.

pub mod delivery;
pub mod document;
pub mod handlers;
pub mod metrics;
pub mod renderer;
pub mod section;
