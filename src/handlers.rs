use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    Extension, Json,
};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    data_formats::*,
    db_helpers::*,
    endpoints::endpoint_catalog,
    errors::RequestError,
    extractors::{ApiJson, ApiPath, ApiQuery},
    models::{Article, ArticleSummary, Comment, UserComment},
    JsonResponse,
};

type JsonResult<T> = Result<JsonResponse<T>, RequestError>;

// ----------------- Helper Handlers -----------------
pub async fn get_endpoints() -> Json<Value> {
    Json(endpoint_catalog())
}

pub async fn not_found(uri: Uri) -> RequestError {
    tracing::debug!(%uri, "no route matches");
    RequestError::NotFound
}

// ----------------- Topic Handlers -----------------
pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<TopicsWrapper> {
    let topics = select_topics(&pool).await?;
    Ok((StatusCode::OK, Json(TopicsWrapper { topics })))
}

pub async fn post_topic(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiJson(request): ApiJson<NewTopicRequest>,
) -> JsonResult<PostedTopicWrapper> {
    let posted_topic = insert_topic_in_db(&pool, request).await?;
    Ok((StatusCode::CREATED, Json(PostedTopicWrapper { posted_topic })))
}

// ----------------- Article Handlers -----------------
pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiQuery(params): ApiQuery<ArticleQueryParams>,
) -> JsonResult<MultipleArticlesWrapper<ArticleSummary>> {
    let listing = ArticleListing::try_from(params)?;
    let ArticlePage {
        articles,
        total_count,
    } = list_articles_in_db(&pool, &listing).await?;

    if listing.pagination.is_out_of_range(articles.len()) {
        return Err(RequestError::NotFound);
    }
    Ok((
        StatusCode::OK,
        Json(MultipleArticlesWrapper {
            articles,
            total_articles: total_count,
        }),
    ))
}

pub async fn post_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiJson(request): ApiJson<NewArticleRequest>,
) -> JsonResult<PostedArticleWrapper<Article>> {
    let author = request.author.clone();
    let topic = request.topic.clone();
    let checks = async {
        tokio::try_join!(
            check_exists(&pool, Lookup::User, author),
            check_exists(&pool, Lookup::Topic, topic),
        )
        .map(|_| ())
    };
    let article_id = guarded(checks, insert_article_in_db(&pool, request)).await?;

    let posted_article = select_article_by_id(&pool, article_id)
        .await?
        .ok_or(RequestError::NotFound)?;
    Ok((
        StatusCode::CREATED,
        Json(PostedArticleWrapper { posted_article }),
    ))
}

pub async fn get_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(article_id): ApiPath<i64>,
) -> JsonResult<ArticleWrapper<Article>> {
    let article = guarded(
        check_exists(&pool, Lookup::Article, article_id),
        select_article_by_id(&pool, article_id),
    )
    .await?
    .ok_or(RequestError::NotFound)?;
    Ok((StatusCode::OK, Json(ArticleWrapper { article })))
}

pub async fn patch_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(article_id): ApiPath<i64>,
    ApiJson(VoteUpdateRequest { inc_votes }): ApiJson<VoteUpdateRequest>,
) -> JsonResult<ArticleWrapper<Article>> {
    let article = guarded(
        check_exists(&pool, Lookup::Article, article_id),
        update_article_votes_in_db(&pool, article_id, inc_votes),
    )
    .await?
    .ok_or(RequestError::NotFound)?;
    // Updates answer 201, which existing clients rely on.
    Ok((StatusCode::CREATED, Json(ArticleWrapper { article })))
}

pub async fn delete_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(article_id): ApiPath<i64>,
) -> Result<StatusCode, RequestError> {
    guarded_removal(
        check_exists(&pool, Lookup::Article, article_id),
        delete_article_in_db(&pool, article_id),
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_articles_by_author(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(author): ApiPath<String>,
) -> JsonResult<MultipleArticlesWrapper<Article>> {
    let articles = guarded(
        check_exists(&pool, Lookup::User, author.clone()),
        select_articles_by_author(&pool, &author),
    )
    .await?;
    Ok((StatusCode::OK, Json(MultipleArticlesWrapper::new(articles))))
}

// ----------------- Comment Handlers -----------------
pub async fn get_article_comments(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(article_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PageQueryParams>,
) -> JsonResult<MultipleCommentsWrapper<Comment>> {
    let pagination = Pagination::try_from(params)?;
    let comments = guarded(
        check_exists(&pool, Lookup::Article, article_id),
        select_comments_by_article(&pool, article_id, pagination),
    )
    .await?;

    if pagination.is_out_of_range(comments.len()) {
        return Err(RequestError::NotFound);
    }
    Ok((StatusCode::OK, Json(MultipleCommentsWrapper { comments })))
}

pub async fn post_article_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(article_id): ApiPath<i64>,
    ApiJson(request): ApiJson<NewCommentRequest>,
) -> JsonResult<CommentWrapper<Comment>> {
    let username = request.username.clone();
    let checks = async {
        tokio::try_join!(
            check_exists(&pool, Lookup::Article, article_id),
            check_exists(&pool, Lookup::User, username),
        )
        .map(|_| ())
    };
    let comment = guarded(checks, insert_comment_in_db(&pool, article_id, request)).await?;
    Ok((StatusCode::CREATED, Json(CommentWrapper { comment })))
}

pub async fn get_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(comment_id): ApiPath<i64>,
) -> JsonResult<CommentWrapper<Comment>> {
    let comment = guarded(
        check_exists(&pool, Lookup::Comment, comment_id),
        select_comment_by_id(&pool, comment_id),
    )
    .await?
    .ok_or(RequestError::NotFound)?;
    Ok((StatusCode::OK, Json(CommentWrapper { comment })))
}

pub async fn patch_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(comment_id): ApiPath<i64>,
    ApiJson(VoteUpdateRequest { inc_votes }): ApiJson<VoteUpdateRequest>,
) -> JsonResult<UpdatedCommentWrapper<Comment>> {
    let updated_comment = guarded(
        check_exists(&pool, Lookup::Comment, comment_id),
        update_comment_votes_in_db(&pool, comment_id, inc_votes),
    )
    .await?
    .ok_or(RequestError::NotFound)?;
    Ok((
        StatusCode::CREATED,
        Json(UpdatedCommentWrapper { updated_comment }),
    ))
}

pub async fn delete_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(comment_id): ApiPath<i64>,
) -> Result<StatusCode, RequestError> {
    guarded_removal(
        check_exists(&pool, Lookup::Comment, comment_id),
        delete_comment_in_db(&pool, comment_id),
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------
pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<UsersWrapper> {
    let users = select_users(&pool).await?;
    Ok((StatusCode::OK, Json(UsersWrapper { users })))
}

pub async fn get_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(username): ApiPath<String>,
) -> JsonResult<UserWrapper> {
    let user = guarded(
        check_exists(&pool, Lookup::User, username.clone()),
        select_user_by_username(&pool, &username),
    )
    .await?
    .ok_or(RequestError::NotFound)?;
    Ok((StatusCode::OK, Json(UserWrapper { user })))
}

pub async fn get_user_comments(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ApiPath(username): ApiPath<String>,
) -> JsonResult<MultipleCommentsWrapper<UserComment>> {
    let comments = guarded(
        check_exists(&pool, Lookup::User, username.clone()),
        select_comments_by_username(&pool, &username),
    )
    .await?;
    Ok((StatusCode::OK, Json(MultipleCommentsWrapper { comments })))
}
