use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserId;
use crate::question::adapter::incoming::web::dto::{ListQuestionsQuery, QuestionListResponse};
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::question::application::ports::outgoing::{QuestionFilter, QuestionSort};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

/// List active questions
#[utoipa::path(
    get,
    path = "/api/questions",
    tag = "questions",
    params(ListQuestionsQuery),
    responses(
        (status = 200, description = "One page of questions", body = inline(SuccessResponse<QuestionListResponse>)),
        (status = 400, description = "Invalid sort", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/questions")]
pub async fn list_questions_handler(
    query: web::Query<ListQuestionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let sort = match query.sort.as_deref().map(str::parse::<QuestionSort>) {
        None => QuestionSort::default(),
        Some(Ok(sort)) => sort,
        Some(Err(e)) => return ApiResponse::bad_request("INVALID_QUERY", &e.to_string()),
    };

    let filter = QuestionFilter {
        search: query.search,
        topic_id: query.topic_id,
        tag: query.tag,
        author_id: query.author_id.map(UserId::from),
    };
    let page = PageRequest::from_query(query.page.unwrap_or(0), query.per_page.unwrap_or(0));

    match data.question.get_list.execute(filter, sort, page).await {
        Ok(result) => ApiResponse::success(QuestionListResponse::from(result)),
        Err(e) => map_question_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::ports::incoming::use_cases::{
        GetQuestionsUseCase, QuestionCommandError,
    };
    use crate::question::application::ports::outgoing::QuestionSummary;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Option<(QuestionFilter, QuestionSort, PageRequest)>>>;

    #[derive(Default)]
    struct MockList {
        seen: Seen,
    }

    #[async_trait]
    impl GetQuestionsUseCase for MockList {
        async fn execute(
            &self,
            filter: QuestionFilter,
            sort: QuestionSort,
            page: PageRequest,
        ) -> Result<PageResult<QuestionSummary>, QuestionCommandError> {
            let result = PageResult::new(vec![], &page, 0);
            *self.seen.lock().unwrap() = Some((filter, sort, page));
            Ok(result)
        }
    }

    #[actix_web::test]
    async fn test_list_questions_parses_query() {
        let seen = Seen::default();
        let state = TestAppStateBuilder::default()
            .with_get_questions(MockList { seen: seen.clone() })
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_questions_handler))
            .await;

        let req = test::TestRequest::get()
            .uri("/api/questions?search=borrow&tag=rust&sort=most_answered&page=2&per_page=5")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["page"], 2);
        assert_eq!(body["data"]["per_page"], 5);

        let (filter, sort, page) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.search.as_deref(), Some("borrow"));
        assert_eq!(filter.tag.as_deref(), Some("rust"));
        assert_eq!(sort, QuestionSort::MostAnswered);
        assert_eq!(page.page, 2);
    }

    #[actix_web::test]
    async fn test_list_questions_rejects_unknown_sort() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(list_questions_handler))
            .await;

        let req = test::TestRequest::get()
            .uri("/api/questions?sort=hottest")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_QUERY");
    }
}
