pub mod aggregator;
pub mod classifier;
pub mod milestones;
pub mod quality;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{Member, PrState, PullRequestRecord};
pub use crate::domain::ports::{ConfigProvider, PullRequestSource, Storage};
pub use crate::utils::error::Result;
