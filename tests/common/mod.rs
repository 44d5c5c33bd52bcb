#![allow(dead_code)]

use std::cmp::Ordering;
use std::net::TcpListener;

use reqwest::StatusCode;
use serde_json::Value;
use sqlx::Executor;

const SEED: &str = include_str!("../fixtures/seed.sql");

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

/// Starts the API on an ephemeral port against a fresh, seeded in-memory database.
pub async fn spawn_app() -> TestApp {
    // A single connection keeps every query on the same in-memory database.
    let pool = news_api::init_db("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");
    pool.execute(SEED).await.expect("Failed to seed test database");

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());
    let router = news_api::make_router(pool);
    tokio::spawn(async move { news_api::serve(listener, router).await });

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        read(response).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read(response).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .patch(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read(response).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        let response = self.client.delete(self.url(path)).send().await.unwrap();
        let status = response.status();
        (status, response.text().await.unwrap())
    }
}

async fn read(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

pub fn assert_msg(body: &Value, msg: &str) {
    assert_eq!(body["msg"], msg, "unexpected body {body}");
}

pub fn assert_sorted_by(items: &[Value], key: &str, descending: bool) {
    for pair in items.windows(2) {
        let ordering = compare(&pair[0][key], &pair[1][key]);
        let out_of_order = if descending {
            ordering == Ordering::Less
        } else {
            ordering == Ordering::Greater
        };
        assert!(
            !out_of_order,
            "{key} out of order: {} then {}",
            pair[0][key], pair[1][key]
        );
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.as_i64().cmp(&b.as_i64()),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => panic!("cannot compare {a} with {b}"),
    }
}

pub fn ids(items: &[Value], key: &str) -> Vec<i64> {
    items.iter().map(|item| item[key].as_i64().unwrap()).collect()
}
