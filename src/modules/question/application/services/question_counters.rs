use std::sync::Arc;
use tracing::warn;

use crate::question::application::domain::Question;
use crate::question::application::ports::outgoing::{TopicQuestionCounter, UserQuestionCounter};

/// Topic and author counters that follow a question's lifecycle.
///
/// Adjustments run after the question itself was written. A failed
/// adjustment is logged and swallowed; the request has already succeeded.
#[derive(Clone)]
pub struct QuestionCounters {
    topics: Arc<dyn TopicQuestionCounter>,
    users: Arc<dyn UserQuestionCounter>,
}

impl QuestionCounters {
    pub fn new(topics: Arc<dyn TopicQuestionCounter>, users: Arc<dyn UserQuestionCounter>) -> Self {
        Self { topics, users }
    }

    pub async fn adjust(&self, question: &Question, delta: i32) {
        if let Err(e) = self
            .topics
            .adjust_question_count(&question.topic_ids, delta)
            .await
        {
            warn!(
                question_id = %question.id,
                delta,
                error = %e,
                "Failed to adjust topic question counts"
            );
        }

        if let Err(e) = self
            .users
            .adjust_questions_asked(question.author, delta)
            .await
        {
            warn!(
                question_id = %question.id,
                user_id = %question.author,
                delta,
                error = %e,
                "Failed to adjust questions_asked"
            );
        }
    }
}
