use sqlx::{Sqlite, SqlitePool};

use crate::{
    data_formats::{NewCommentRequest, Pagination},
    errors::RequestError,
    models::Comment,
};

pub async fn select_comments_by_article(
    pool: &SqlitePool,
    article_id: i64,
    pagination: Pagination,
) -> Result<Vec<Comment>, RequestError> {
    let comments = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id, article_id, author, body, votes, created_at
        FROM comments
        WHERE article_id = $1
        ORDER BY created_at DESC, comment_id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(article_id)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(pool)
    .await?;
    Ok(comments)
}

pub async fn select_comment_by_id(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Option<Comment>, RequestError> {
    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id, article_id, author, body, votes, created_at
        FROM comments
        WHERE comment_id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;
    Ok(comment)
}

pub async fn insert_comment_in_db(
    pool: &SqlitePool,
    article_id: i64,
    NewCommentRequest { username, body }: NewCommentRequest,
) -> Result<Comment, RequestError> {
    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (article_id, author, body)
        VALUES ($1, $2, $3)
        RETURNING comment_id, article_id, author, body, votes, created_at
        "#,
    )
    .bind(article_id)
    .bind(username)
    .bind(body)
    .fetch_one(pool)
    .await?;
    Ok(comment)
}

/// Same overflow guard as the article votes update.
pub async fn update_comment_votes_in_db(
    pool: &SqlitePool,
    comment_id: i64,
    delta: i64,
) -> Result<Option<Comment>, RequestError> {
    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        UPDATE comments
        SET votes = CASE
                WHEN $1 > 0 AND votes > 9223372036854775807 - $1 THEN NULL
                WHEN $1 < 0 AND votes < -9223372036854775807 - 1 - $1 THEN NULL
                ELSE votes + $1
            END
        WHERE comment_id = $2
        RETURNING comment_id, article_id, author, body, votes, created_at
        "#,
    )
    .bind(delta)
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;
    Ok(comment)
}

pub async fn delete_comment_in_db(pool: &SqlitePool, comment_id: i64) -> Result<bool, RequestError> {
    let result = sqlx::query(
        r#"
        DELETE FROM comments WHERE comment_id = $1
        "#,
    )
    .bind(comment_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
