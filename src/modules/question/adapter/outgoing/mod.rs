pub mod question_query_postgres;
pub mod question_repository_postgres;
pub mod sea_orm_entity;

pub use question_query_postgres::QuestionQueryPostgres;
pub use question_repository_postgres::QuestionRepositoryPostgres;
