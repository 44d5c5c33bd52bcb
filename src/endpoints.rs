use serde_json::{json, Value};

/// Description of every route, served from `GET /api`.
pub fn endpoint_catalog() -> Value {
    json!({
        "endpoints": {
            "GET /api": {
                "description": "serves up a json representation of all the available endpoints of the api"
            },
            "GET /api/topics": {
                "description": "serves an array of all topics",
                "queries": [],
                "exampleResponse": {
                    "topics": [{ "slug": "football", "description": "Footie!" }]
                }
            },
            "POST /api/topics": {
                "description": "adds a topic and serves it back",
                "queries": [],
                "exampleRequest": { "slug": "football", "description": "Footie!" },
                "exampleResponse": {
                    "postedTopic": { "slug": "football", "description": "Footie!" }
                }
            },
            "GET /api/articles": {
                "description": "serves a page of articles with their comment counts",
                "queries": ["topic", "author", "sort_by", "order", "limit", "p", "total_count"],
                "exampleResponse": {
                    "articles": [{
                        "article_id": 34,
                        "title": "Seafood substitutions are increasing",
                        "topic": "cooking",
                        "author": "weegembump",
                        "created_at": "2018-05-30T15:59:13",
                        "votes": 0,
                        "article_img_url": "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700",
                        "comment_count": 6
                    }],
                    "totalArticles": 1
                }
            },
            "POST /api/articles": {
                "description": "adds an article and serves it back with its comment count",
                "queries": [],
                "exampleRequest": {
                    "author": "weegembump",
                    "title": "Seafood substitutions are increasing",
                    "body": "Text from the article..",
                    "topic": "cooking",
                    "article_img_url": "optional"
                },
                "exampleResponse": {
                    "postedArticle": {
                        "article_id": 35,
                        "author": "weegembump",
                        "title": "Seafood substitutions are increasing",
                        "body": "Text from the article..",
                        "topic": "cooking",
                        "created_at": "2018-05-30T15:59:13",
                        "votes": 0,
                        "article_img_url": "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700",
                        "comment_count": 0
                    }
                }
            },
            "GET /api/articles/:article_id": {
                "description": "serves a single article with its comment count",
                "queries": [],
                "exampleResponse": {
                    "article": {
                        "article_id": 1,
                        "author": "butter_bridge",
                        "title": "Living in the shadow of a great man",
                        "body": "I find this existence challenging",
                        "topic": "mitch",
                        "created_at": "2020-07-09T21:11:00",
                        "votes": 100,
                        "article_img_url": "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700",
                        "comment_count": 11
                    }
                }
            },
            "PATCH /api/articles/:article_id": {
                "description": "adds inc_votes to the article's votes and serves the updated article",
                "queries": [],
                "exampleRequest": { "inc_votes": -8 },
                "exampleResponse": { "article": { "article_id": 1, "votes": 92 } }
            },
            "DELETE /api/articles/:article_id": {
                "description": "deletes the article together with its comments",
                "queries": [],
                "exampleResponse": {}
            },
            "GET /api/articles/:article_id/comments": {
                "description": "serves a page of an article's comments, newest first",
                "queries": ["limit", "p"],
                "exampleResponse": {
                    "comments": [{
                        "comment_id": 5,
                        "article_id": 1,
                        "author": "icellusedkars",
                        "body": "I hate streaming noses",
                        "votes": 0,
                        "created_at": "2020-11-03T21:00:00"
                    }]
                }
            },
            "POST /api/articles/:article_id/comments": {
                "description": "adds a comment to the article and serves it back",
                "queries": [],
                "exampleRequest": { "username": "lurker", "body": "Great read" },
                "exampleResponse": {
                    "comment": {
                        "comment_id": 19,
                        "article_id": 2,
                        "author": "lurker",
                        "body": "Great read",
                        "votes": 0,
                        "created_at": "2023-04-01T10:00:00"
                    }
                }
            },
            "GET /api/articles/authors/:author": {
                "description": "serves every article written by the user, newest first",
                "queries": [],
                "exampleResponse": { "articles": [] }
            },
            "GET /api/comments/:comment_id": {
                "description": "serves a single comment",
                "queries": [],
                "exampleResponse": {
                    "comment": {
                        "comment_id": 9,
                        "article_id": 1,
                        "author": "icellusedkars",
                        "body": "Superficially charming",
                        "votes": 0,
                        "created_at": "2020-01-01T03:08:00"
                    }
                }
            },
            "PATCH /api/comments/:comment_id": {
                "description": "adds inc_votes to the comment's votes and serves the updated comment",
                "queries": [],
                "exampleRequest": { "inc_votes": 1 },
                "exampleResponse": { "updatedComment": { "comment_id": 8, "votes": 1 } }
            },
            "DELETE /api/comments/:comment_id": {
                "description": "deletes the comment",
                "queries": [],
                "exampleResponse": {}
            },
            "GET /api/users": {
                "description": "serves an array of all users",
                "queries": [],
                "exampleResponse": {
                    "users": [{
                        "username": "lurker",
                        "name": "do_nothing",
                        "avatar_url": "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png"
                    }]
                }
            },
            "GET /api/users/:username": {
                "description": "serves a single user",
                "queries": [],
                "exampleResponse": {
                    "user": {
                        "username": "lurker",
                        "name": "do_nothing",
                        "avatar_url": "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png"
                    }
                }
            },
            "GET /api/users/:username/comments": {
                "description": "serves the user's comments with the title and author of each commented article",
                "queries": [],
                "exampleResponse": {
                    "comments": [{
                        "comment_id": 10,
                        "article_id": 3,
                        "author": "icellusedkars",
                        "body": "git push origin master",
                        "votes": 0,
                        "created_at": "2020-06-20T07:24:00",
                        "article_title": "Eight pug gifs that remind me of mitch",
                        "article_author": "icellusedkars"
                    }]
                }
            }
        }
    })
}
