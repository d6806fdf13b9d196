pub mod answer;
pub mod question;
pub mod view_log;
pub mod vote_ledger;

pub use answer::{Answer, AnswerId};
pub use question::{
    Attachment, NewQuestion, Question, QuestionDomainError, QuestionEdit, QuestionId,
};
pub use view_log::{ViewEntry, ViewLog, VIEW_DEDUP_WINDOW_HOURS, VIEW_LOG_CAPACITY};
pub use vote_ledger::{InvalidVoteType, VoteDirection, VoteLedger, VoteOutcome, VoteType};
