mod common;

use axum::http::StatusCode;
use common::ApiContext;
use serde_json::json;
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unsplash_requires_query(ctx: &mut ApiContext) {
    let response = ctx.server.get("/unsplash").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Query parameter is required"}));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unsplash_no_results(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/unsplash")
        .add_query_param("query", "unknown dish")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"error": "No photos found"}));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unsplash_returns_first_photo(ctx: &mut ApiContext) {
    ctx.upstream.update(|script| {
        script.unsplash_reply = json!({
            "total": 2,
            "total_pages": 2,
            "results": [{
                "id": "abc",
                "urls": {"regular": "https://images.unsplash.com/photo-mapo"},
                "user": {"name": "Li Wei", "links": {"html": "https://unsplash.com/@liwei"}}
            }]
        });
    });

    let response = ctx
        .server
        .get("/unsplash")
        .add_query_param("query", "mapo tofu")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "url": "https://images.unsplash.com/photo-mapo",
        "credit": {"name": "Li Wei", "link": "https://unsplash.com/@liwei"}
    }));
    assert_eq!(
        ctx.upstream.last_unsplash_query().as_deref(),
        Some("mapo tofu food chinese cuisine")
    );
}
