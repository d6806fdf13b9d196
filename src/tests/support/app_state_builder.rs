use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    IFetchProfileUseCase, ILoginUserUseCase, IRefreshTokenUseCase, IRegisterUserUseCase,
    ISoftDeleteUserUseCase,
};
use crate::question::application::ports::incoming::use_cases::{
    AcceptAnswerUseCase, AddAnswerUseCase, CreateQuestionUseCase, DeleteQuestionUseCase,
    GetQuestionUseCase, GetQuestionsUseCase, UpdateQuestionUseCase, VoteAnswerUseCase,
    VoteQuestionUseCase,
};
use crate::question::application::question_use_cases::QuestionUseCases;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, FollowTopicUseCase, GetTopicsUseCase, SoftDeleteTopicUseCase,
    UnfollowTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Builds an `AppState` whose use cases are stubs unless overridden.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    topic: TopicUseCases,
    question: QuestionUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                refresh: Arc::new(StubRefreshTokenUseCase),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                soft_delete: Arc::new(StubSoftDeleteUserUseCase),
            },
            topic: TopicUseCases {
                create: Arc::new(StubCreateTopicUseCase),
                get_list: Arc::new(StubGetTopicsUseCase),
                soft_delete: Arc::new(StubSoftDeleteTopicUseCase),
                follow: Arc::new(StubFollowTopicUseCase),
                unfollow: Arc::new(StubFollowTopicUseCase),
            },
            question: QuestionUseCases {
                create: Arc::new(StubCreateQuestionUseCase),
                get_list: Arc::new(StubGetQuestionsUseCase),
                get_single: Arc::new(StubGetQuestionUseCase),
                update: Arc::new(StubUpdateQuestionUseCase),
                delete: Arc::new(StubDeleteQuestionUseCase),
                vote: Arc::new(StubVoteQuestionUseCase),
                add_answer: Arc::new(StubAddAnswerUseCase),
                vote_answer: Arc::new(StubVoteAnswerUseCase),
                accept_answer: Arc::new(StubAcceptAnswerUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ──────────────── auth ────────────────

    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl IRefreshTokenUseCase + 'static) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl IFetchProfileUseCase + 'static) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_user(mut self, uc: impl ISoftDeleteUserUseCase + 'static) -> Self {
        self.auth.soft_delete = Arc::new(uc);
        self
    }

    // ──────────────── topics ────────────────

    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + 'static) -> Self {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_topic(mut self, uc: impl SoftDeleteTopicUseCase + 'static) -> Self {
        self.topic.soft_delete = Arc::new(uc);
        self
    }

    pub fn with_follow_topic(mut self, uc: impl FollowTopicUseCase + 'static) -> Self {
        self.topic.follow = Arc::new(uc);
        self
    }

    pub fn with_unfollow_topic(mut self, uc: impl UnfollowTopicUseCase + 'static) -> Self {
        self.topic.unfollow = Arc::new(uc);
        self
    }

    // ──────────────── questions ────────────────

    pub fn with_create_question(mut self, uc: impl CreateQuestionUseCase + 'static) -> Self {
        self.question.create = Arc::new(uc);
        self
    }

    pub fn with_get_questions(mut self, uc: impl GetQuestionsUseCase + 'static) -> Self {
        self.question.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_question(mut self, uc: impl GetQuestionUseCase + 'static) -> Self {
        self.question.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_question(mut self, uc: impl UpdateQuestionUseCase + 'static) -> Self {
        self.question.update = Arc::new(uc);
        self
    }

    pub fn with_delete_question(mut self, uc: impl DeleteQuestionUseCase + 'static) -> Self {
        self.question.delete = Arc::new(uc);
        self
    }

    pub fn with_vote_question(mut self, uc: impl VoteQuestionUseCase + 'static) -> Self {
        self.question.vote = Arc::new(uc);
        self
    }

    pub fn with_add_answer(mut self, uc: impl AddAnswerUseCase + 'static) -> Self {
        self.question.add_answer = Arc::new(uc);
        self
    }

    pub fn with_vote_answer(mut self, uc: impl VoteAnswerUseCase + 'static) -> Self {
        self.question.vote_answer = Arc::new(uc);
        self
    }

    pub fn with_accept_answer(mut self, uc: impl AcceptAnswerUseCase + 'static) -> Self {
        self.question.accept_answer = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            topic: self.topic,
            question: self.question,
        })
    }
}
