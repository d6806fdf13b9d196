use std::sync::Arc;

use crate::question::application::ports::incoming::use_cases::{
    AcceptAnswerUseCase, AddAnswerUseCase, CreateQuestionUseCase, DeleteQuestionUseCase,
    GetQuestionUseCase, GetQuestionsUseCase, UpdateQuestionUseCase, VoteAnswerUseCase,
    VoteQuestionUseCase,
};

#[derive(Clone)]
pub struct QuestionUseCases {
    pub create: Arc<dyn CreateQuestionUseCase>,
    pub get_list: Arc<dyn GetQuestionsUseCase>,
    pub get_single: Arc<dyn GetQuestionUseCase>,
    pub update: Arc<dyn UpdateQuestionUseCase>,
    pub delete: Arc<dyn DeleteQuestionUseCase>,
    pub vote: Arc<dyn VoteQuestionUseCase>,
    pub add_answer: Arc<dyn AddAnswerUseCase>,
    pub vote_answer: Arc<dyn VoteAnswerUseCase>,
    pub accept_answer: Arc<dyn AcceptAnswerUseCase>,
}
