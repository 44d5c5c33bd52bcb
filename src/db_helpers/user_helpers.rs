use sqlx::{Sqlite, SqlitePool};

use crate::{
    errors::RequestError,
    models::{User, UserComment},
};

pub async fn select_users(pool: &SqlitePool) -> Result<Vec<User>, RequestError> {
    let users = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT username, name, avatar_url FROM users
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn select_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, RequestError> {
    let user = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT username, name, avatar_url FROM users WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Comments written by `username`, newest first, each with the title and author of
/// the article it was left on.
pub async fn select_comments_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Vec<UserComment>, RequestError> {
    let comments = sqlx::query_as::<Sqlite, UserComment>(
        r#"
        SELECT comments.comment_id,
               comments.article_id,
               comments.author,
               comments.body,
               comments.votes,
               comments.created_at,
               articles.title  AS article_title,
               articles.author AS article_author
        FROM   comments
            JOIN articles
              ON articles.article_id = comments.article_id
        WHERE  comments.author = $1
        ORDER  BY comments.created_at DESC, comments.comment_id DESC
        "#,
    )
    .bind(username)
    .fetch_all(pool)
    .await?;
    Ok(comments)
}
