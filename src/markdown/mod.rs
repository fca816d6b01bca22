//! Helpers producing the chat's markdown dialect.

pub mod fence;
pub mod mention;
pub mod topic_link;
