use std::future::Future;

use sqlx::{Sqlite, SqlitePool};

use crate::errors::RequestError;

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

/// Collects `column = ?` predicates for the optional filters that are present.
/// Column names are `'static` so only SQL written in this crate ends up in the text;
/// the filter values travel as bound parameters.
struct QueryBuilder {
    query: String,
    params: Vec<String>,
    separator: &'static str,
}

impl QueryBuilder {
    fn new(initial: &str, separator: &'static str) -> Self {
        Self {
            query: initial.to_owned(),
            params: vec![],
            separator,
        }
    }

    fn add_param(mut self, column: &'static str, param: Option<String>) -> Self {
        if let Some(value) = param {
            if !self.params.is_empty() {
                self.query.push_str(self.separator);
            }
            self.query.push_str(column);
            self.query.push_str(" = ?");
            self.params.push(value);
        }
        self
    }

    /// Returns the clause and its parameters, or an empty clause when no filter was added.
    fn build(self) -> (String, Vec<String>) {
        if self.params.is_empty() {
            (String::new(), self.params)
        } else {
            (self.query, self.params)
        }
    }
}

// ----------------- Existence Checks -----------------

/// Rows that handlers look up before reading or mutating something that depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Article,
    Comment,
    Topic,
    User,
}

impl Lookup {
    pub fn table(self) -> &'static str {
        match self {
            Lookup::Article => "articles",
            Lookup::Comment => "comments",
            Lookup::Topic => "topics",
            Lookup::User => "users",
        }
    }

    fn sql(self) -> &'static str {
        match self {
            Lookup::Article => r#"SELECT 1 FROM "articles" WHERE "article_id" = ? LIMIT 1"#,
            Lookup::Comment => r#"SELECT 1 FROM "comments" WHERE "comment_id" = ? LIMIT 1"#,
            Lookup::Topic => r#"SELECT 1 FROM "topics" WHERE "slug" = ? LIMIT 1"#,
            Lookup::User => r#"SELECT 1 FROM "users" WHERE "username" = ? LIMIT 1"#,
        }
    }
}

/// Fails with `NotFound` unless a row of `lookup` has the given key.
pub async fn check_exists<V>(pool: &SqlitePool, lookup: Lookup, value: V) -> Result<(), RequestError>
where
    V: 'static + Send + for<'q> sqlx::Encode<'q, Sqlite> + sqlx::Type<Sqlite>,
{
    let row = sqlx::query(lookup.sql())
        .bind(value)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(_) => Ok(()),
        None => {
            tracing::debug!(table = lookup.table(), "no row matches the requested key");
            Err(RequestError::NotFound)
        }
    }
}

/// Runs an existence check and the operation it guards side by side. Once both
/// have finished, the check's failure wins over the operation's.
pub async fn guarded<T, C, O>(check: C, operation: O) -> Result<T, RequestError>
where
    C: Future<Output = Result<(), RequestError>>,
    O: Future<Output = Result<T, RequestError>>,
{
    let (checked, outcome) = tokio::join!(check, operation);
    checked?;
    outcome
}

/// Like [`guarded`] for deletes. A delete that removed a row proves the row existed,
/// even when the check ran after it and found nothing.
pub async fn guarded_removal<C, O>(check: C, removal: O) -> Result<(), RequestError>
where
    C: Future<Output = Result<(), RequestError>>,
    O: Future<Output = Result<bool, RequestError>>,
{
    let (checked, removed) = tokio::join!(check, removal);
    if removed? {
        return Ok(());
    }
    checked?;
    Err(RequestError::NotFound)
}
