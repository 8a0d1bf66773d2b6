use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_statistics_cmd::{GetStatisticsCommand, GetStatisticsCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandResponse};
use crate::catalog::command::mark_read_cmd::{MarkReadCommand, MarkReadCommandRequest, MarkReadCommandResponse};
use crate::catalog::command::remove_all_books_cmd::{RemoveAllBooksCommand, RemoveAllBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/catalog",
               get(list_books).post(add_book).delete(remove_all_books))
        .route("/catalog/search", get(search_books))
        .route("/catalog/stats", get(get_statistics))
        // titles live under their own prefix so no title can shadow the routes above
        .route("/catalog/books/:title",
               get(find_book_by_title).delete(remove_book))
        .route("/catalog/books/:title/read", put(mark_read))
        .with_state(state)
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(()).await?;
    Ok(Json(res))
}

pub async fn find_book_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { title };
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { title };
    let res = RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_all_books(
    State(state): State<AppState>) -> Result<Json<RemoveAllBooksCommandResponse>, ServerError> {
    let res = RemoveAllBooksCommand::new(state.catalog_service).execute(()).await?;
    Ok(Json(res))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<MarkReadCommandResponse>, ServerError> {
    let req = MarkReadCommandRequest { title };
    let res = MarkReadCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn get_statistics(
    State(state): State<AppState>) -> Result<Json<GetStatisticsCommandResponse>, ServerError> {
    let res = GetStatisticsCommand::new(state.catalog_service).execute(()).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::extract::{Path, Query, State};
    use axum::http::{Method, Request, StatusCode};
    use axum::response::Json;
    use serde_json::json;
    use tower::ServiceExt;
    use crate::catalog::command::search_books_cmd::SearchBooksCommandRequest;
    use crate::catalog::controller::{add_book, find_book_by_title, get_statistics, list_books, mark_read, remove_all_books, remove_book, router, search_books};
    use crate::catalog::factory;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn build_state() -> AppState {
        let config = Configuration::new("test");
        let svc = factory::create_catalog_service(&config, RepositoryStore::InMemory)
            .await.expect("should build service");
        AppState::new(svc)
    }

    fn dune() -> Json<serde_json::Value> {
        Json(json!({"title": "Dune", "author": "Herbert", "year": 1965, "genre": "Science Fiction"}))
    }

    #[tokio::test]
    async fn test_should_add_and_list_books() {
        let state = build_state().await;
        let added = add_book(State(state.clone()), dune()).await.expect("should add book");
        assert_eq!("Dune", added.0.book.title.as_str());

        let listed = list_books(State(state.clone())).await.expect("should list books");
        assert_eq!(1, listed.0.books.len());

        let found = find_book_by_title(State(state), Path("Dune".to_string())).await.expect("should find book");
        assert!(!found.0.book.read);
    }

    #[tokio::test]
    async fn test_should_map_errors_to_status() {
        let state = build_state().await;
        let _ = add_book(State(state.clone()), dune()).await.expect("should add book");

        let dup = Json(json!({"title": "DUNE", "author": "X", "year": 2000, "genre": "Other"}));
        let (status, _) = add_book(State(state.clone()), dup).await.expect_err("should reject duplicate");
        assert_eq!(StatusCode::CONFLICT, status);

        let bad = Json(json!({"title": "T", "author": "A", "year": -1, "genre": "Other"}));
        let (status, _) = add_book(State(state.clone()), bad).await.expect_err("should reject negative year");
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let malformed = Json(json!({"title": "T"}));
        let (status, _) = add_book(State(state.clone()), malformed).await.expect_err("should reject malformed body");
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let (status, _) = mark_read(State(state.clone()), Path("Missing".to_string())).await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, status);

        let (status, _) = find_book_by_title(State(state), Path("dune".to_string())).await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_mark_read_and_report_statistics() {
        let state = build_state().await;
        let _ = add_book(State(state.clone()), dune()).await.expect("should add book");
        let _ = add_book(State(state.clone()), Json(json!({"title": "Emma", "author": "Austen", "year": 1815, "genre": "Fiction"})))
            .await.expect("should add book");

        let marked = mark_read(State(state.clone()), Path("Dune".to_string())).await.expect("should mark read");
        assert!(marked.0.book.read);

        let stats = get_statistics(State(state)).await.expect("should compute statistics");
        assert_eq!(2, stats.0.statistics.total);
        assert_eq!(1, stats.0.statistics.read_count);
        assert_eq!("50.00", stats.0.read_percentage.as_str());
    }

    #[tokio::test]
    async fn test_should_search_remove_and_clear() {
        let state = build_state().await;
        let _ = add_book(State(state.clone()), dune()).await.expect("should add book");

        let found = search_books(State(state.clone()), Query(SearchBooksCommandRequest::new("herb")))
            .await.expect("should search");
        assert_eq!(1, found.0.books.len());
        assert_eq!(vec!["Herbert".to_string()], found.0.suggestions);

        let _ = remove_book(State(state.clone()), Path("Unknown".to_string())).await.expect("should ignore unknown");
        let _ = remove_book(State(state.clone()), Path("Dune".to_string())).await.expect("should remove");
        let _ = add_book(State(state.clone()), dune()).await.expect("should add book again");

        let cleared = remove_all_books(State(state.clone())).await.expect("should clear");
        assert_eq!(1, cleared.0.removed);
        assert!(list_books(State(state)).await.expect("should list").0.books.is_empty());
    }

    async fn send(state: &AppState, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .expect("should build request");
        let res = router(state.clone()).oneshot(req).await.expect("should route request");
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_should_reach_books_named_like_catalog_routes() {
        let state = build_state().await;
        for title in ["stats", "search"] {
            let (status, _) = send(&state, Method::POST, "/catalog",
                Some(json!({"title": title, "author": "Someone", "year": 2000, "genre": "Other"}))).await;
            assert_eq!(StatusCode::OK, status);
        }

        let (status, body) = send(&state, Method::GET, "/catalog/books/stats", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("stats", body["book"]["title"]);

        let (status, body) = send(&state, Method::PUT, "/catalog/books/search/read", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(true, body["book"]["read"]);

        let (status, body) = send(&state, Method::GET, "/catalog/stats", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(2, body["total"]);
        assert_eq!(1, body["read_count"]);

        for title in ["stats", "search"] {
            let (status, _) = send(&state, Method::DELETE, &format!("/catalog/books/{}", title), None).await;
            assert_eq!(StatusCode::OK, status);
        }
        let (_, body) = send(&state, Method::GET, "/catalog", None).await;
        assert_eq!(Some(0), body["books"].as_array().map(|b| b.len()));
    }

    #[tokio::test]
    async fn test_should_route_missing_book_to_not_found() {
        let state = build_state().await;
        let (status, _) = send(&state, Method::GET, "/catalog/books/Missing", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = send(&state, Method::GET, "/catalog/search?q=", None).await;
        assert_eq!(StatusCode::OK, status);
    }
}
