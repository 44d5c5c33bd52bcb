use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{ArticleListing, NewArticleRequest};
use crate::errors::RequestError;
use crate::models::{Article, ArticleSummary, DEFAULT_ARTICLE_IMG_URL};

use super::{select_topic_slugs, QueryBuilder};

const ARTICLE_QUERY: &str = r#"
            SELECT articles.article_id,
                   articles.author,
                   articles.title,
                   articles.body,
                   articles.topic,
                   articles.created_at,
                   articles.votes,
                   articles.article_img_url,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id
"#;

const ARTICLE_LIST_QUERY: &str = r#"
            SELECT articles.article_id,
                   articles.author,
                   articles.title,
                   articles.topic,
                   articles.created_at,
                   articles.votes,
                   articles.article_img_url,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id
"#;

pub struct ArticlePage {
    pub articles: Vec<ArticleSummary>,
    pub total_count: Option<i64>,
}

fn filter_clause(listing: &ArticleListing) -> (String, Vec<String>) {
    QueryBuilder::new(" WHERE ", " AND ")
        .add_param("articles.topic", listing.topic.clone())
        .add_param("articles.author", listing.author.clone())
        .build()
}

/// SQL for one page of the listing. The filter values come back as parameters to
/// bind in order, followed by the limit and offset.
pub fn build_article_list_query(listing: &ArticleListing) -> (String, Vec<String>) {
    let (filter, params) = filter_clause(listing);
    let order = listing.order.sql();
    let query = format!(
        "{ARTICLE_LIST_QUERY}{filter} GROUP BY articles.article_id ORDER BY {} {order}, articles.article_id {order} LIMIT ? OFFSET ?",
        listing.sort_by.sql(),
    );
    (query, params)
}

pub fn build_article_count_query(listing: &ArticleListing) -> (String, Vec<String>) {
    let (filter, params) = filter_clause(listing);
    (format!("SELECT COUNT(*) FROM articles{filter}"), params)
}

#[tracing::instrument(level = "debug", skip(pool))]
pub async fn list_articles_in_db(
    pool: &SqlitePool,
    listing: &ArticleListing,
) -> Result<ArticlePage, RequestError> {
    if let Some(topic) = &listing.topic {
        let topics = select_topic_slugs(pool).await?;
        if !topics.contains(topic) {
            return Err(RequestError::BadRequest);
        }
    }

    let (query, params) = build_article_list_query(listing);
    let mut page = sqlx::query_as::<Sqlite, ArticleSummary>(&query);
    for param in params {
        page = page.bind(param);
    }
    let page = page
        .bind(listing.pagination.limit())
        .bind(listing.pagination.offset());

    let articles = async { Ok::<_, RequestError>(page.fetch_all(pool).await?) };
    let total_count = async {
        if !listing.total_count {
            return Ok::<_, RequestError>(None);
        }
        let (query, params) = build_article_count_query(listing);
        let mut count = sqlx::query_scalar::<Sqlite, i64>(&query);
        for param in params {
            count = count.bind(param);
        }
        Ok(Some(count.fetch_one(pool).await?))
    };
    let (articles, total_count) = tokio::try_join!(articles, total_count)?;

    Ok(ArticlePage {
        articles,
        total_count,
    })
}

pub async fn select_article_by_id(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Option<Article>, RequestError> {
    let query = format!("{ARTICLE_QUERY} WHERE articles.article_id = ? GROUP BY articles.article_id");
    let article = sqlx::query_as::<Sqlite, Article>(&query)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    Ok(article)
}

pub async fn select_articles_by_author(
    pool: &SqlitePool,
    author: &str,
) -> Result<Vec<Article>, RequestError> {
    let query = format!(
        "{ARTICLE_QUERY} WHERE articles.author = ? GROUP BY articles.article_id ORDER BY articles.created_at DESC, articles.article_id DESC"
    );
    let articles = sqlx::query_as::<Sqlite, Article>(&query)
        .bind(author)
        .fetch_all(pool)
        .await?;
    Ok(articles)
}

/// Inserts the article and returns its new id. A missing image URL falls back to the placeholder.
pub async fn insert_article_in_db(
    pool: &SqlitePool,
    NewArticleRequest {
        author,
        title,
        body,
        topic,
        article_img_url,
    }: NewArticleRequest,
) -> Result<i64, RequestError> {
    let article_img_url = article_img_url.unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_owned());
    let article_id = sqlx::query_scalar::<Sqlite, i64>(
        r#"
        INSERT INTO articles (author, title, body, topic, article_img_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING article_id
        "#,
    )
    .bind(author)
    .bind(title)
    .bind(body)
    .bind(topic)
    .bind(article_img_url)
    .fetch_one(pool)
    .await?;
    Ok(article_id)
}

/// Adds `delta` to the article's votes. `None` when no article has that id.
/// A total outside `i64` is written as NULL, which the NOT NULL column rejects,
/// so the statement fails as a constraint violation and nothing is stored.
pub async fn update_article_votes_in_db(
    pool: &SqlitePool,
    article_id: i64,
    delta: i64,
) -> Result<Option<Article>, RequestError> {
    let updated = sqlx::query_scalar::<Sqlite, i64>(
        r#"
        UPDATE articles
        SET votes = CASE
                WHEN $1 > 0 AND votes > 9223372036854775807 - $1 THEN NULL
                WHEN $1 < 0 AND votes < -9223372036854775807 - 1 - $1 THEN NULL
                ELSE votes + $1
            END
        WHERE article_id = $2
        RETURNING article_id
        "#,
    )
    .bind(delta)
    .bind(article_id)
    .fetch_optional(pool)
    .await?;

    match updated {
        Some(article_id) => select_article_by_id(pool, article_id).await,
        None => Ok(None),
    }
}

/// Deletes the article; its comments go with it through the foreign key cascade.
pub async fn delete_article_in_db(pool: &SqlitePool, article_id: i64) -> Result<bool, RequestError> {
    let result = sqlx::query(
        r#"
        DELETE FROM articles WHERE article_id = $1
        "#,
    )
    .bind(article_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
