pub mod topic_follows;
pub mod topics;
