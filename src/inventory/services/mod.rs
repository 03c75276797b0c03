pub mod aggregator;
pub mod descriptions;
pub mod resolver;

pub use aggregator::analyze;
pub use descriptions::DescriptionTable;
pub use resolver::{resolve_targets, Resolution, TargetMatch};
