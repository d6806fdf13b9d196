use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::use_cases::{
    FetchProfileError, IFetchProfileUseCase, ILoginUserUseCase, IRefreshTokenUseCase,
    IRegisterUserUseCase, ISoftDeleteUserUseCase, LoginError, LoginRequest, LoginUserResponse,
    RefreshTokenError, RefreshTokenResponse, RegisterUserError, RegisterUserInput,
    SoftDeleteUserError, UserProfile,
};
use crate::question::application::domain::{
    Answer, AnswerId, NewQuestion, Question, QuestionId, VoteLedger, VoteOutcome, VoteType,
};
use crate::question::application::ports::incoming::use_cases::{
    AcceptAnswerUseCase, AddAnswerUseCase, AnswerContent, CreateQuestionCommand,
    CreateQuestionUseCase, DeleteQuestionUseCase, GetQuestionUseCase, GetQuestionsUseCase,
    QuestionCommandError, UpdateQuestionCommand, UpdateQuestionUseCase, VoteAnswerUseCase,
    VoteQuestionUseCase,
};
use crate::question::application::ports::outgoing::{QuestionFilter, QuestionSort, QuestionSummary};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::application::domain::{Topic, TopicId};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, FollowStatus, FollowTopicError,
    FollowTopicUseCase, GetTopicsError, GetTopicsUseCase, SoftDeleteTopicError,
    SoftDeleteTopicUseCase, UnfollowTopicUseCase,
};

// ──────────────────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────────────────

pub fn sample_user(role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: "sample_user".to_string(),
        email: "sample@example.com".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role,
        reputation: 0,
        questions_asked: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_question(author: UserId) -> Question {
    Question::new(
        author,
        NewQuestion {
            title: "Why does the borrow checker reject this loop?".to_string(),
            description: "The loop pushes into a vector it also iterates over.".to_string(),
            topic_ids: vec![Uuid::new_v4()],
            tags: vec!["borrowck".to_string()],
            attachments: vec![],
        },
        Utc::now(),
    )
}

pub fn sample_answer(author: UserId) -> Answer {
    Answer {
        id: Uuid::new_v4(),
        content: "Collect the new items first, then extend the vector.".to_string(),
        author,
        votes: VoteLedger::new(),
        is_accepted: false,
        created_at: Utc::now(),
    }
}

pub fn sample_topic(created_by: UserId) -> Topic {
    let now = Utc::now();
    Topic {
        id: Uuid::new_v4(),
        name: "Rust".to_string(),
        slug: "rust".to_string(),
        description: Some("Rust-related questions".to_string()),
        question_count: 0,
        follower_count: 0,
        moderators: vec![created_by],
        created_by,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

// ──────────────────────────────────────────────────────────
// Auth stubs
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<User, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _refresh_token: &str,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteUserUseCase;

#[async_trait]
impl ISoftDeleteUserUseCase for StubSoftDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), SoftDeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// Topic stubs
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTopicsUseCase;

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteTopicUseCase;

#[async_trait]
impl SoftDeleteTopicUseCase for StubSoftDeleteTopicUseCase {
    async fn execute(
        &self,
        _actor: UserId,
        _role: Role,
        _topic_id: TopicId,
    ) -> Result<(), SoftDeleteTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFollowTopicUseCase;

#[async_trait]
impl FollowTopicUseCase for StubFollowTopicUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _topic_id: TopicId,
    ) -> Result<FollowStatus, FollowTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UnfollowTopicUseCase for StubFollowTopicUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _topic_id: TopicId,
    ) -> Result<FollowStatus, FollowTopicError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// Question stubs
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCreateQuestionUseCase;

#[async_trait]
impl CreateQuestionUseCase for StubCreateQuestionUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _command: CreateQuestionCommand,
    ) -> Result<Question, QuestionCommandError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetQuestionsUseCase;

#[async_trait]
impl GetQuestionsUseCase for StubGetQuestionsUseCase {
    async fn execute(
        &self,
        _filter: QuestionFilter,
        _sort: QuestionSort,
        page: PageRequest,
    ) -> Result<PageResult<QuestionSummary>, QuestionCommandError> {
        Ok(PageResult::new(vec![], &page, 0))
    }
}

#[derive(Default, Clone)]
pub struct StubGetQuestionUseCase;

#[async_trait]
impl GetQuestionUseCase for StubGetQuestionUseCase {
    async fn execute(
        &self,
        _id: QuestionId,
        _viewer: Option<UserId>,
    ) -> Result<Question, QuestionCommandError> {
        Err(QuestionCommandError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateQuestionUseCase;

#[async_trait]
impl UpdateQuestionUseCase for StubUpdateQuestionUseCase {
    async fn execute(
        &self,
        _id: QuestionId,
        _actor: UserId,
        _role: Role,
        _command: UpdateQuestionCommand,
    ) -> Result<Question, QuestionCommandError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteQuestionUseCase;

#[async_trait]
impl DeleteQuestionUseCase for StubDeleteQuestionUseCase {
    async fn execute(
        &self,
        _id: QuestionId,
        _actor: UserId,
        _role: Role,
    ) -> Result<(), QuestionCommandError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVoteQuestionUseCase;

#[async_trait]
impl VoteQuestionUseCase for StubVoteQuestionUseCase {
    async fn execute(
        &self,
        _id: QuestionId,
        _voter: UserId,
        _vote: VoteType,
    ) -> Result<VoteOutcome, QuestionCommandError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddAnswerUseCase;

#[async_trait]
impl AddAnswerUseCase for StubAddAnswerUseCase {
    async fn execute(
        &self,
        _id: QuestionId,
        _author: UserId,
        _content: AnswerContent,
    ) -> Result<Answer, QuestionCommandError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVoteAnswerUseCase;

#[async_trait]
impl VoteAnswerUseCase for StubVoteAnswerUseCase {
    async fn execute(
        &self,
        _id: QuestionId,
        _answer_id: AnswerId,
        _voter: UserId,
        _vote: VoteType,
    ) -> Result<VoteOutcome, QuestionCommandError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAcceptAnswerUseCase;

#[async_trait]
impl AcceptAnswerUseCase for StubAcceptAnswerUseCase {
    async fn execute(
        &self,
        _id: QuestionId,
        _answer_id: AnswerId,
        _actor: UserId,
        _role: Role,
        _accepted: bool,
    ) -> Result<Answer, QuestionCommandError> {
        unimplemented!("Not used in this test")
    }
}
