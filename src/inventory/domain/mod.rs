pub mod analysis;
pub mod resource;
pub mod subscription;

pub use analysis::{ResourceAnalysis, TypeBreakdown};
pub use resource::{resource_group_from_id, Resource};
pub use subscription::Subscription;
