use serde::Serialize;

use crate::models::{Topic, User};

#[derive(Debug, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct PostedTopicWrapper {
    #[serde(rename = "postedTopic")]
    pub posted_topic: Topic,
}

#[derive(Debug, Serialize)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

#[derive(Debug, Serialize)]
pub struct PostedArticleWrapper<T> {
    #[serde(rename = "postedArticle")]
    pub posted_article: T,
}

#[derive(Debug, Serialize)]
pub struct MultipleArticlesWrapper<T> {
    pub articles: Vec<T>,
    #[serde(rename = "totalArticles", skip_serializing_if = "Option::is_none")]
    pub total_articles: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CommentWrapper<T> {
    pub comment: T,
}

#[derive(Debug, Serialize)]
pub struct UpdatedCommentWrapper<T> {
    #[serde(rename = "updatedComment")]
    pub updated_comment: T,
}

#[derive(Debug, Serialize)]
pub struct MultipleCommentsWrapper<T> {
    pub comments: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct UserWrapper {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<User>,
}

impl<T> MultipleArticlesWrapper<T> {
    pub fn new(articles: Vec<T>) -> Self {
        MultipleArticlesWrapper {
            articles,
            total_articles: None,
        }
    }
}
