use sqlx::{Sqlite, SqlitePool};

use crate::{data_formats::NewTopicRequest, errors::RequestError, models::Topic};

pub async fn select_topics(pool: &SqlitePool) -> Result<Vec<Topic>, RequestError> {
    let topics = sqlx::query_as::<Sqlite, Topic>(
        r#"
        SELECT slug, description FROM topics
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(topics)
}

/// Slugs an articles listing may filter on. Read fresh on every call since topics
/// can be added at any time.
pub async fn select_topic_slugs(pool: &SqlitePool) -> Result<Vec<String>, RequestError> {
    let slugs = sqlx::query_scalar::<Sqlite, String>(
        r#"
        SELECT DISTINCT slug FROM topics
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(slugs)
}

pub async fn insert_topic_in_db(
    pool: &SqlitePool,
    NewTopicRequest { slug, description }: NewTopicRequest,
) -> Result<Topic, RequestError> {
    let topic = sqlx::query_as::<Sqlite, Topic>(
        r#"
        INSERT INTO topics (slug, description)
        VALUES ($1, $2)
        RETURNING slug, description
        "#,
    )
    .bind(slug)
    .bind(description)
    .fetch_one(pool)
    .await?;
    Ok(topic)
}
