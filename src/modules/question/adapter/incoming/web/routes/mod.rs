mod accept_answer;
mod add_answer;
mod create_question;
mod delete_question;
mod get_question;
mod list_questions;
mod update_question;
mod vote_answer;
mod vote_question;

pub use accept_answer::*;
pub use add_answer::*;
pub use create_question::*;
pub use delete_question::*;
pub use get_question::*;
pub use list_questions::*;
pub use update_question::*;
pub use vote_answer::*;
pub use vote_question::*;
