pub mod entities;

pub use entities::{slugify, Topic, TopicId};
