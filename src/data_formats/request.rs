use serde::Deserialize;

// ----------------- Topic Request -----------------
#[derive(Deserialize, Debug)]
pub struct NewTopicRequest {
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ----------------- Article Request -----------------
#[derive(Deserialize, Debug)]
pub struct NewArticleRequest {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    #[serde(default)]
    pub article_img_url: Option<String>,
}

// ----------------- Comment Request -----------------
#[derive(Deserialize, Debug)]
pub struct NewCommentRequest {
    pub username: String,
    pub body: String,
}

/// Shared by the article and comment PATCH endpoints; `inc_votes` is a signed delta.
#[derive(Deserialize, Debug)]
pub struct VoteUpdateRequest {
    pub inc_votes: i64,
}
