use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // One row per question aggregate. Answers, vote sets and
        // the view log live in JSONB columns next to the
        // denormalised columns the listing query sorts on.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Questions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Questions::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Questions::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Questions::Description).text().not_null())
                    .col(json_array(Questions::TopicIds))
                    .col(json_array(Questions::Tags))
                    .col(json_array(Questions::Attachments))
                    .col(json_array(Questions::Answers))
                    .col(
                        ColumnDef::new(Questions::Votes)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust(r#"'{"upvotes": [], "downvotes": []}'::jsonb"#)),
                    )
                    .col(json_array(Questions::ViewLog))
                    .col(
                        ColumnDef::new(Questions::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Questions::Score)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Questions::AnswerCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Questions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Questions::Version)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Questions::LastActivity)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Questions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Questions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_author_id")
                            .from(Questions::Table, Questions::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_questions_active_created_at
                ON questions (created_at DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_questions_active_last_activity
                ON questions (last_activity DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_questions_author_id
                ON questions (author_id);
                "#,
            )
            .await?;

        // Containment lookups: topic_ids @> '["..."]', tags @> '["rust"]'
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_questions_topic_ids
                ON questions USING GIN (topic_ids jsonb_path_ops);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_questions_tags
                ON questions USING GIN (tags jsonb_path_ops);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_questions_updated_at
                BEFORE UPDATE ON questions
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_questions_updated_at ON questions")
            .await?;

        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await
    }
}

fn json_array(column: Questions) -> ColumnDef {
    ColumnDef::new(column)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    AuthorId,
    Title,
    Description,
    TopicIds,
    Tags,
    Attachments,
    Answers,
    Votes,
    ViewLog,
    Views,
    Score,
    AnswerCount,
    IsActive,
    Version,
    LastActivity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
