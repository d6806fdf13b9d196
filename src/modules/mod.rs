pub mod auth;
pub mod question;
pub mod topic;
