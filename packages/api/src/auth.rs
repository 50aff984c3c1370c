//! Login and registration exchanges. Neither needs a token.

use store::{Credentials, Registration, Session, UserSummary};

use crate::{ApiClient, ApiError};

pub const LOGIN_PATH: &str = "/usuarios/logar";
pub const REGISTER_PATH: &str = "/usuarios/cadastrar";

/// Exchange credentials for an authenticated [`Session`].
///
/// A response whose id and token disagree (or that carries no token) is
/// rejected with [`ApiError::InvalidSession`] rather than producing a
/// half-populated session.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<Session, ApiError> {
    let session: Session = client.post(LOGIN_PATH, credentials, None).await?;
    if !session.is_authenticated() || !session.is_consistent() {
        tracing::warn!("Login for {} returned an unusable session", credentials.handle);
        return Err(ApiError::InvalidSession);
    }
    tracing::info!("Authenticated user {}", session.user_id);
    Ok(session)
}

/// Create a new user account. Returns the created user.
pub async fn register(
    client: &ApiClient,
    registration: &Registration,
) -> Result<UserSummary, ApiError> {
    let user: UserSummary = client.post(REGISTER_PATH, registration, None).await?;
    tracing::info!("Registered user {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_login_returns_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(body_json(serde_json::json!({"usuario": "a", "senha": "b"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 7, "nome": "Ana", "usuario": "a", "foto": "", "senha": "", "token": "T"
            })))
            .mount(&server)
            .await;

        let session = login(&client_for(&server).await, &Credentials::new("a", "b"))
            .await
            .unwrap();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.token, "T");
        assert_eq!(session.display_name, "Ana");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = login(&client_for(&server).await, &Credentials::new("a", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_login_without_token_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 7, "token": ""})),
            )
            .mount(&server)
            .await;

        let err = login(&client_for(&server).await, &Credentials::new("a", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidSession));
    }

    #[tokio::test]
    async fn test_register_posts_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REGISTER_PATH))
            .and(body_json(serde_json::json!({
                "nome": "Ana", "usuario": "ana@blog.dev", "senha": "secret12", "foto": ""
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 9, "nome": "Ana", "usuario": "ana@blog.dev", "senha": "$hash", "foto": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let registration = Registration {
            name: "Ana".to_string(),
            handle: "ana@blog.dev".to_string(),
            password: "secret12".to_string(),
            photo_url: String::new(),
        };
        let user = register(&client_for(&server).await, &registration)
            .await
            .unwrap();
        assert_eq!(user.id, 9);
        assert_eq!(user.handle, "ana@blog.dev");
    }
}
