mod common;

use common::{assert_msg, assert_sorted_by, spawn_app};
use reqwest::StatusCode;
use serde_json::{json, Value};

fn comments(body: &Value) -> &Vec<Value> {
    body["comments"].as_array().unwrap()
}

// ----------------- GET /api/articles/:article_id/comments -----------------

#[tokio::test]
async fn article_comments_belong_to_the_article() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/articles/3/comments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments(&body).len(), 2);
    for comment in comments(&body) {
        assert!(comment["comment_id"].is_i64());
        assert!(comment["votes"].is_i64());
        assert!(comment["created_at"].is_string());
        assert!(comment["author"].is_string());
        assert!(comment["body"].is_string());
        assert_eq!(comment["article_id"], 3);
    }
}

#[tokio::test]
async fn article_without_comments_has_an_empty_list() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/articles/4/comments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comments"], json!([]));
}

#[tokio::test]
async fn article_comments_are_newest_first_ten_per_page() {
    let app = spawn_app().await;
    let (_, body) = app.get("/api/articles/1/comments").await;
    assert_eq!(comments(&body).len(), 10);
    assert_sorted_by(comments(&body), "created_at", true);
    assert_eq!(comments(&body)[0]["comment_id"], 5);
}

#[tokio::test]
async fn article_comments_are_paginated() {
    let app = spawn_app().await;
    let (_, body) = app.get("/api/articles/1/comments?limit=8").await;
    assert_eq!(comments(&body).len(), 8);

    let (status, body) = app.get("/api/articles/1/comments?p=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments(&body).len(), 1);
    // Oldest comment on article 1.
    assert_eq!(comments(&body)[0]["comment_id"], 9);

    let (_, body) = app.get("/api/articles/3/comments?limit=6").await;
    assert_eq!(comments(&body).len(), 2);
}

#[tokio::test]
async fn comments_page_beyond_the_last_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/articles/1/comments?p=200").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_msg(&body, "Not Found");
}

#[tokio::test]
async fn largest_comment_page_is_not_found_rather_than_a_crash() {
    let app = spawn_app().await;
    let (status, body) = app
        .get("/api/articles/1/comments?limit=4294967295")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments(&body).len(), 11);

    let (status, body) = app
        .get("/api/articles/1/comments?limit=4294967295&p=4294967295")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_msg(&body, "Not Found");
}

#[tokio::test]
async fn comments_of_a_missing_article_are_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/articles/-2/comments").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_msg(&body, "Not Found");
}

#[tokio::test]
async fn malformed_comment_listing_requests_are_bad_requests() {
    let app = spawn_app().await;
    for path in [
        "/api/articles/notanid/comments",
        "/api/articles/9/comments?limit=four",
        "/api/articles/5/comments?p=two",
    ] {
        let (status, body) = app.get(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_msg(&body, "Bad Request");
    }
}

// ----------------- POST /api/articles/:article_id/comments -----------------

#[tokio::test]
async fn posting_a_comment_returns_it() {
    let app = spawn_app().await;
    let (status, body) = app
        .post(
            "/api/articles/2/comments",
            json!({ "username": "lurker", "body": "test_body", "extra": "ignored" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let comment = &body["comment"];
    assert_eq!(comment["comment_id"], 19);
    assert_eq!(comment["author"], "lurker");
    assert_eq!(comment["body"], "test_body");
    assert_eq!(comment["article_id"], 2);
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());

    let (_, body) = app.get("/api/articles/2").await;
    assert_eq!(body["article"]["comment_count"], 1);
}

#[tokio::test]
async fn commenting_as_a_missing_user_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app
        .post(
            "/api/articles/7/comments",
            json!({ "username": "test_user", "body": "test_body" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_msg(&body, "Not Found");
}

#[tokio::test]
async fn commenting_on_a_missing_article_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app
        .post(
            "/api/articles/0/comments",
            json!({ "username": "lurker", "body": "test_body" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_msg(&body, "Not Found");
}

#[tokio::test]
async fn malformed_comment_posts_are_bad_requests() {
    let app = spawn_app().await;
    for (path, payload) in [
        (
            "/api/articles/notanid/comments",
            json!({ "username": "butter_bridge", "body": "test_body" }),
        ),
        ("/api/articles/9/comments", json!({ "username": "rogersop" })),
    ] {
        let (status, body) = app.post(path, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_msg(&body, "Bad Request");
    }
}

// ----------------- GET /api/comments/:comment_id -----------------

#[tokio::test]
async fn single_comment_is_returned() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/comments/9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["comment"],
        json!({
            "comment_id": 9,
            "article_id": 1,
            "author": "icellusedkars",
            "body": "Superficially charming",
            "votes": 0,
            "created_at": "2020-01-01T03:08:00"
        })
    );
}

#[tokio::test]
async fn missing_comment_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/comments/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_msg(&body, "Not Found");
}

#[tokio::test]
async fn non_numeric_comment_id_is_a_bad_request() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/comments/eight").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_msg(&body, "Bad Request");
}

// ----------------- PATCH /api/comments/:comment_id -----------------

#[tokio::test]
async fn patching_comment_votes_adds_the_increment() {
    let app = spawn_app().await;
    let (status, body) = app.patch("/api/comments/8", json!({ "inc_votes": 1 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["updatedComment"]["comment_id"], 8);
    assert_eq!(body["updatedComment"]["votes"], 1);

    let (_, body) = app
        .patch("/api/comments/12", json!({ "inc_votes": 10, "extra": "test_data" }))
        .await;
    assert_eq!(body["updatedComment"]["votes"], 10);
}

#[tokio::test]
async fn comment_votes_may_go_negative() {
    let app = spawn_app().await;
    let (status, body) = app.patch("/api/comments/5", json!({ "inc_votes": -8 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["updatedComment"]["votes"], -8);
}

#[tokio::test]
async fn comment_votes_overflowing_an_integer_are_rejected_and_not_stored() {
    let app = spawn_app().await;
    let (status, body) = app
        .patch("/api/comments/1", json!({ "inc_votes": i64::MAX }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_msg(&body, "Bad Request");

    let (status, body) = app
        .patch("/api/comments/4", json!({ "inc_votes": i64::MIN }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_msg(&body, "Bad Request");

    let (_, body) = app.get("/api/comments/1").await;
    assert_eq!(body["comment"]["votes"], 16);
    let (_, body) = app.get("/api/comments/4").await;
    assert_eq!(body["comment"]["votes"], -100);
    let (status, body) = app.get("/api/articles/1/comments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments(&body).len(), 10);
}

#[tokio::test]
async fn patching_a_missing_comment_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.patch("/api/comments/123", json!({ "inc_votes": 5 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_msg(&body, "Not Found");
}

#[tokio::test]
async fn malformed_comment_patches_are_bad_requests() {
    let app = spawn_app().await;
    for (path, payload) in [
        ("/api/comments/5", json!({ "key": "value" })),
        ("/api/comments/number", json!({ "inc_votes": 5 })),
    ] {
        let (status, body) = app.patch(path, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_msg(&body, "Bad Request");
    }
}

// ----------------- DELETE /api/comments/:comment_id -----------------

#[tokio::test]
async fn deleting_a_comment_answers_no_content() {
    let app = spawn_app().await;
    let (status, body) = app.delete("/api/comments/4").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = app.get("/api/comments/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = app.get("/api/articles/1").await;
    assert_eq!(body["article"]["comment_count"], 10);
}

#[tokio::test]
async fn deleting_a_missing_comment_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.delete("/api/comments/100").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "msg": "Not Found" })
    );
}

#[tokio::test]
async fn deleting_a_comment_with_a_malformed_id_is_a_bad_request() {
    let app = spawn_app().await;
    let (status, _) = app.delete("/api/comments/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
