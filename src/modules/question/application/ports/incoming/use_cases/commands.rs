use uuid::Uuid;

use crate::question::application::domain::{Attachment, NewQuestion, QuestionEdit};

use super::errors::QuestionCommandError;

pub const TITLE_MIN_LENGTH: usize = 10;
pub const TITLE_MAX_LENGTH: usize = 200;
pub const DESCRIPTION_MIN_LENGTH: usize = 20;
pub const MAX_TAGS: usize = 10;
pub const ANSWER_MIN_LENGTH: usize = 10;

fn validate_title(raw: &str) -> Result<String, QuestionCommandError> {
    let title = raw.trim();
    let length = title.chars().count();
    if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
        return Err(QuestionCommandError::InvalidInput(format!(
            "Title must be between {TITLE_MIN_LENGTH} and {TITLE_MAX_LENGTH} characters"
        )));
    }
    Ok(title.to_string())
}

fn validate_description(raw: &str) -> Result<String, QuestionCommandError> {
    let description = raw.trim();
    if description.chars().count() < DESCRIPTION_MIN_LENGTH {
        return Err(QuestionCommandError::InvalidInput(format!(
            "Description must be at least {DESCRIPTION_MIN_LENGTH} characters"
        )));
    }
    Ok(description.to_string())
}

// Duplicates are kept; blank entries are dropped.
fn normalize_tags(raw: Vec<String>) -> Result<Vec<String>, QuestionCommandError> {
    let tags: Vec<String> = raw
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.len() > MAX_TAGS {
        return Err(QuestionCommandError::InvalidInput(format!(
            "At most {MAX_TAGS} tags are allowed"
        )));
    }
    Ok(tags)
}

fn dedup_topic_ids(raw: Vec<Uuid>) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(raw.len());
    for id in raw {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

// ========================= Create =========================
#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    title: String,
    description: String,
    topic_ids: Vec<Uuid>,
    tags: Vec<String>,
    attachments: Vec<Attachment>,
}

impl CreateQuestionCommand {
    pub fn new(
        title: String,
        description: String,
        topic_ids: Vec<Uuid>,
        tags: Vec<String>,
        attachments: Vec<Attachment>,
    ) -> Result<Self, QuestionCommandError> {
        let title = validate_title(&title)?;
        let description = validate_description(&description)?;

        let topic_ids = dedup_topic_ids(topic_ids);
        if topic_ids.is_empty() {
            return Err(QuestionCommandError::InvalidInput(
                "At least one topic is required".to_string(),
            ));
        }

        let tags = normalize_tags(tags)?;

        Ok(Self {
            title,
            description,
            topic_ids,
            tags,
            attachments,
        })
    }

    pub fn topic_ids(&self) -> &[Uuid] {
        &self.topic_ids
    }

    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            title: self.title,
            description: self.description,
            topic_ids: self.topic_ids,
            tags: self.tags,
            attachments: self.attachments,
        }
    }
}

// ========================= Update =========================
#[derive(Debug, Clone)]
pub struct UpdateQuestionCommand {
    edit: QuestionEdit,
}

impl UpdateQuestionCommand {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Self, QuestionCommandError> {
        if title.is_none() && description.is_none() && tags.is_none() {
            return Err(QuestionCommandError::InvalidInput(
                "Nothing to update".to_string(),
            ));
        }

        Ok(Self {
            edit: QuestionEdit {
                title: title.as_deref().map(validate_title).transpose()?,
                description: description
                    .as_deref()
                    .map(validate_description)
                    .transpose()?,
                tags: tags.map(normalize_tags).transpose()?,
            },
        })
    }

    pub fn into_edit(self) -> QuestionEdit {
        self.edit
    }
}

// ========================= Answer =========================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerContent(String);

impl AnswerContent {
    pub fn new(raw: &str) -> Result<Self, QuestionCommandError> {
        let content = raw.trim();
        if content.chars().count() < ANSWER_MIN_LENGTH {
            return Err(QuestionCommandError::InvalidInput(format!(
                "Answer must be at least {ANSWER_MIN_LENGTH} characters"
            )));
        }
        Ok(Self(content.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
