//! Typed, validated forms of the listing query strings.
//!
//! Sort columns and directions are closed enums that map to fixed SQL text, so
//! nothing a client sends is ever written into identifier position.

use crate::errors::RequestError;

use super::{ArticleQueryParams, PageQueryParams};

const DEFAULT_LIMIT: u32 = 10;
const DEFAULT_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    #[default]
    CreatedAt,
    ArticleImgUrl,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub fn parse(value: &str) -> Result<Self, RequestError> {
        let column = match value {
            "article_id" => SortColumn::ArticleId,
            "title" => SortColumn::Title,
            "topic" => SortColumn::Topic,
            "author" => SortColumn::Author,
            "body" => SortColumn::Body,
            "created_at" => SortColumn::CreatedAt,
            "article_img_url" => SortColumn::ArticleImgUrl,
            "votes" => SortColumn::Votes,
            "comment_count" => SortColumn::CommentCount,
            _ => return Err(RequestError::BadRequest),
        };
        Ok(column)
    }

    pub fn sql(self) -> &'static str {
        match self {
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Title => "articles.title",
            SortColumn::Topic => "articles.topic",
            SortColumn::Author => "articles.author",
            SortColumn::Body => "articles.body",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::ArticleImgUrl => "articles.article_img_url",
            SortColumn::Votes => "articles.votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Result<Self, RequestError> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(RequestError::BadRequest),
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl Pagination {
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Result<Self, RequestError> {
        Ok(Pagination {
            limit: parse_positive(limit, DEFAULT_LIMIT)?,
            page: parse_positive(page, DEFAULT_PAGE)?,
        })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    /// Rows to skip. Saturates at `i64::MAX`, which no table can reach, so huge
    /// pages still come back empty and end up out of range.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.limit))
    }

    /// An empty result on any page but the first means the page is out of range.
    pub fn is_out_of_range(&self, rows_on_page: usize) -> bool {
        rows_on_page == 0 && self.page > DEFAULT_PAGE
    }
}

impl TryFrom<PageQueryParams> for Pagination {
    type Error = RequestError;

    fn try_from(params: PageQueryParams) -> Result<Self, Self::Error> {
        Pagination::parse(params.limit.as_deref(), params.p.as_deref())
    }
}

fn parse_positive(value: Option<&str>, default: u32) -> Result<u32, RequestError> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.parse::<u32>() {
            Ok(number) if number > 0 => Ok(number),
            _ => Err(RequestError::BadRequest),
        },
    }
}

fn parse_flag(value: Option<&str>) -> Result<bool, RequestError> {
    match value {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(_) => Err(RequestError::BadRequest),
    }
}

/// Everything the articles listing needs, validated except for the topic, which
/// can only be checked against the topics currently stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListing {
    pub topic: Option<String>,
    pub author: Option<String>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub pagination: Pagination,
    pub total_count: bool,
}

impl TryFrom<ArticleQueryParams> for ArticleListing {
    type Error = RequestError;

    fn try_from(
        ArticleQueryParams {
            topic,
            author,
            sort_by,
            order,
            limit,
            p,
            total_count,
        }: ArticleQueryParams,
    ) -> Result<Self, Self::Error> {
        let sort_by = match sort_by.as_deref() {
            Some(value) => SortColumn::parse(value)?,
            None => SortColumn::default(),
        };
        let order = match order.as_deref() {
            Some(value) => SortOrder::parse(value)?,
            None => SortOrder::default(),
        };
        Ok(ArticleListing {
            topic,
            author,
            sort_by,
            order,
            pagination: Pagination::parse(limit.as_deref(), p.as_deref())?,
            total_count: parse_flag(total_count.as_deref())?,
        })
    }
}
