//! # Authenticated resource operations
//!
//! Topics and posts share one CRUD contract, so it is written once over the
//! [`Resource`] trait and bound to a kind through [`Resources`]:
//!
//! | Operation | Request | Result |
//! |-----------|---------|--------|
//! | [`list`](Resources::list) | `GET <path>` | every resource |
//! | [`get_by_id`](Resources::get_by_id) | `GET <path>/{id}` | `None` on 404 |
//! | [`create`](Resources::create) | `POST <path>` | the stored resource |
//! | [`update`](Resources::update) | `PUT <path>` with the id in the body | the stored resource |
//! | [`delete`](Resources::delete) | `DELETE <path>/{id}` | nothing |
//!
//! Every call sends the session token as the `Authorization` header. Reacting
//! to an authorization failure (clearing the session) belongs to the caller,
//! which owns the session.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{Post, Topic};

use crate::{ApiClient, ApiError};

/// A server-side collection the client can manage.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Collection path, e.g. `/temas`.
    const PATH: &'static str;

    /// Server-assigned id, `0` before creation.
    fn id(&self) -> i64;
}

impl Resource for Topic {
    const PATH: &'static str = "/temas";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Post {
    const PATH: &'static str = "/postagens";

    fn id(&self) -> i64 {
        self.id
    }
}

/// CRUD operations for resource kind `R`.
#[derive(Debug)]
pub struct Resources<'a, R> {
    client: &'a ApiClient,
    _kind: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> Resources<'a, R> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", R::PATH, id)
    }

    pub async fn list(&self, token: &str) -> Result<Vec<R>, ApiError> {
        self.client.get(R::PATH, Some(token)).await
    }

    pub async fn get_by_id(&self, id: i64, token: &str) -> Result<Option<R>, ApiError> {
        match self.client.get(&Self::item_path(id), Some(token)).await {
            Ok(resource) => Ok(Some(resource)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, payload: &R, token: &str) -> Result<R, ApiError> {
        self.client.post(R::PATH, payload, Some(token)).await
    }

    /// The payload must already carry its server-assigned id.
    pub async fn update(&self, payload: &R, token: &str) -> Result<R, ApiError> {
        if payload.id() == 0 {
            return Err(ApiError::MissingId { path: R::PATH });
        }
        self.client.put(R::PATH, payload, Some(token)).await
    }

    pub async fn delete(&self, id: i64, token: &str) -> Result<(), ApiError> {
        if id == 0 {
            return Err(ApiError::MissingId { path: R::PATH });
        }
        self.client.delete(&Self::item_path(id), Some(token)).await
    }
}

impl ApiClient {
    pub fn topics(&self) -> Resources<'_, Topic> {
        Resources::new(self)
    }

    pub fn posts(&self) -> Resources<'_, Post> {
        Resources::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiConfig;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_list_topics() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/temas"))
            .and(header("Authorization", "T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "descricao": "Rust", "postagem": []},
                {"id": 2, "descricao": "Go"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let topics = client.topics().list("T").await.unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].description, "Rust");
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/postagens/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.posts().get_by_id(99, "T").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_forbidden_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/temas/1"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.topics().get_by_id(1, "T").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_update_puts_collection_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/temas"))
            .and(body_partial_json(serde_json::json!({"id": 3, "descricao": "Updated"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 3, "descricao": "Updated"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let topic = Topic {
            id: 3,
            description: "Updated".to_string(),
        };
        let saved = client.topics().update(&topic, "T").await.unwrap();
        assert_eq!(saved, topic);
    }

    #[tokio::test]
    async fn test_update_without_id_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .topics()
            .update(&Topic::new("draft"), "T")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingId { path: "/temas" }));
    }

    #[tokio::test]
    async fn test_create_and_delete_post() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/postagens"))
            .and(body_partial_json(serde_json::json!({"titulo": "Hi", "tema": {"id": 1}})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 5, "titulo": "Hi", "texto": "there", "data": "2024-05-01T10:00:00",
                "tema": {"id": 1, "descricao": "Rust"}, "usuario": {"id": 7, "nome": "Ana"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/postagens/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let draft = Post {
            title: "Hi".to_string(),
            body: "there".to_string(),
            topic: Some(Topic {
                id: 1,
                description: "Rust".to_string(),
            }),
            ..Post::default()
        };
        let created = client.posts().create(&draft, "T").await.unwrap();
        assert_eq!(created.id, 5);
        assert!(created.created_at.is_some());

        client.posts().delete(created.id, "T").await.unwrap();
    }
}
