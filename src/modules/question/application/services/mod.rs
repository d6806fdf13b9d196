pub mod accept_answer_service;
pub mod add_answer_service;
pub mod aggregate_writer;
pub mod create_question_service;
pub mod delete_question_service;
pub mod get_question_service;
pub mod get_questions_service;
pub mod question_counters;
pub mod update_question_service;
pub mod vote_answer_service;
pub mod vote_question_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use accept_answer_service::AcceptAnswerService;
pub use add_answer_service::AddAnswerService;
pub use create_question_service::CreateQuestionService;
pub use delete_question_service::DeleteQuestionService;
pub use get_question_service::GetQuestionService;
pub use get_questions_service::GetQuestionsService;
pub use question_counters::QuestionCounters;
pub use update_question_service::UpdateQuestionService;
pub use vote_answer_service::VoteAnswerService;
pub use vote_question_service::VoteQuestionService;
