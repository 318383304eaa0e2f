//! # Remote data sources
//!
//! Two read-only traits, one per dataset, and [`DummyJsonClient`], the
//! `reqwest` implementation that talks to the public demo API. `reqwest`
//! uses `fetch` when compiled to WASM, so the same client runs in the browser.
//!
//! Every failure (transport, non-2xx status, body that does not decode)
//! becomes [`Error::Network`]; the display text is what the user sees and the
//! wrapped detail goes to the log.

use std::future::Future;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::config::ApiConfig;
use store::{Error, RecipeRecord, Result, UserRecord};
use tracing::{debug, warn};

/// Looks users up by a free-text query.
pub trait UserDirectory {
    fn search_users(&self, query: &str) -> impl Future<Output = Result<Vec<UserRecord>>>;
}

/// Fetches the whole recipe dataset.
pub trait RecipeSource {
    fn fetch_recipes(&self) -> impl Future<Output = Result<Vec<RecipeRecord>>>;
}

/// Body of `GET /users/search`.
#[derive(Debug, Deserialize)]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub total: u32,
}

/// Body of `GET /recipes`.
#[derive(Debug, Deserialize)]
pub struct RecipesPage {
    pub recipes: Vec<RecipeRecord>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

/// HTTP client for the DummyJSON users and recipes endpoints.
#[derive(Clone, Debug)]
pub struct DummyJsonClient {
    http: Client,
    users_url: String,
    recipes_url: String,
    recipe_limit: Option<u32>,
}

impl DummyJsonClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            users_url: config.users_url.trim_end_matches('/').to_string(),
            recipes_url: config.recipes_url.trim_end_matches('/').to_string(),
            recipe_limit: config.recipe_limit,
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.users_url)
    }

    pub fn recipes_url(&self) -> &str {
        &self.recipes_url
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(network)?;
        let response = response.error_for_status().map_err(network)?;
        response.json::<T>().await.map_err(network)
    }
}

fn network(e: reqwest::Error) -> Error {
    warn!("Request failed: {e}");
    Error::Network(e.to_string())
}

impl UserDirectory for DummyJsonClient {
    async fn search_users(&self, query: &str) -> Result<Vec<UserRecord>> {
        let request = self.http.get(self.search_url()).query(&[("q", query)]);
        let page: UsersPage = self.get_json(request).await?;
        debug!(query, found = page.users.len(), total = page.total, "User search");
        Ok(page.users)
    }
}

impl RecipeSource for DummyJsonClient {
    async fn fetch_recipes(&self) -> Result<Vec<RecipeRecord>> {
        let mut request = self.http.get(&self.recipes_url);
        if let Some(limit) = self.recipe_limit {
            request = request.query(&[("limit", limit)]);
        }
        let page: RecipesPage = self.get_json(request).await?;
        debug!(
            fetched = page.recipes.len(),
            total = page.total,
            skip = page.skip,
            limit = page.limit,
            "Recipes fetched"
        );
        Ok(page.recipes)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    fn client_at(addr: SocketAddr) -> DummyJsonClient {
        DummyJsonClient::new(&ApiConfig {
            users_url: format!("http://{addr}/users"),
            recipes_url: format!("http://{addr}/recipes"),
            recipe_limit: None,
        })
    }

    /// Answers every request with `503 Service Unavailable`.
    async fn unavailable_server() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    )
                    .await;
                let _ = socket.shutdown().await;
            }
        });
        addr
    }

    /// An address nothing listens on.
    async fn closed_port() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    }

    #[tokio::test]
    async fn test_error_status_is_network_error() {
        let client = client_at(unavailable_server().await);

        let err = client.fetch_recipes().await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        let err = client.search_users("emilys").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = client_at(closed_port().await);

        assert!(matches!(client.fetch_recipes().await, Err(Error::Network(_))));
        assert!(matches!(client.search_users("emilys").await, Err(Error::Network(_))));
    }

    #[test]
    fn test_urls_follow_config() {
        let config = ApiConfig {
            users_url: "http://localhost:9000/users/".to_string(),
            recipes_url: "http://localhost:9000/recipes".to_string(),
            recipe_limit: Some(0),
        };
        let client = DummyJsonClient::new(&config);

        assert_eq!(client.search_url(), "http://localhost:9000/users/search");
        assert_eq!(client.recipes_url(), "http://localhost:9000/recipes");
    }

    #[test]
    fn test_users_page_decodes() {
        let body = r#"{
            "users": [{
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "maidenName": "Smith",
                "age": 28,
                "username": "emilys",
                "email": "emily.johnson@x.dummyjson.com",
                "password": "emilyspass"
            }],
            "total": 1,
            "skip": 0,
            "limit": 1
        }"#;

        let page: UsersPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.users[0].username, "emilys");
        assert_eq!(page.users[0].first_name, "Emily");
    }

    #[test]
    fn test_recipes_page_decodes() {
        let body = r#"{
            "recipes": [
                {"id": 1, "name": "Classic Margherita Pizza", "difficulty": "Easy", "cuisine": "Italian"},
                {"id": 2, "name": "Vegetarian Stir-Fry", "difficulty": "Medium", "cuisine": "Asian",
                 "tags": ["Vegetarian"], "prepTimeMinutes": 15, "cookTimeMinutes": 20}
            ],
            "total": 50,
            "skip": 0,
            "limit": 30
        }"#;

        let page: RecipesPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.recipes.len(), 2);
        assert_eq!(page.total, 50);
        assert_eq!(page.recipes[1].total_time_minutes(), 35);
    }

    #[test]
    fn test_body_without_list_is_rejected() {
        assert!(serde_json::from_str::<RecipesPage>(r#"{"message": "nope"}"#).is_err());
        assert!(serde_json::from_str::<UsersPage>(r#"{"total": 0}"#).is_err());
    }
}
