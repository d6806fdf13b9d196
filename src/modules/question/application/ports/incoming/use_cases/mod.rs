pub mod accept_answer;
pub mod add_answer;
pub mod commands;
pub mod create_question;
pub mod delete_question;
pub mod errors;
pub mod get_question;
pub mod get_questions;
pub mod update_question;
pub mod vote_answer;
pub mod vote_question;

pub use accept_answer::AcceptAnswerUseCase;
pub use add_answer::AddAnswerUseCase;
pub use commands::{AnswerContent, CreateQuestionCommand, UpdateQuestionCommand};
pub use create_question::CreateQuestionUseCase;
pub use delete_question::DeleteQuestionUseCase;
pub use errors::QuestionCommandError;
pub use get_question::GetQuestionUseCase;
pub use get_questions::GetQuestionsUseCase;
pub use update_question::UpdateQuestionUseCase;
pub use vote_answer::VoteAnswerUseCase;
pub use vote_question::VoteQuestionUseCase;
