//! # Domain models for the blog client
//!
//! Defines the data structures exchanged with the remote blog API and held in
//! client state. Every type is `Serialize + Deserialize` with the field names the
//! API speaks on the wire (`descricao`, `titulo`, `texto`, ...), while the Rust
//! fields use English names.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Session`] | The authenticated identity and its credential token. Empty (`user_id == 0`, empty token) when nobody is logged in. |
//! | [`Topic`] | A classification category (`tema`). |
//! | [`Post`] | A titled piece of content (`postagem`) linked to one [`Topic`] and one author. |
//! | [`UserSummary`] | Denormalized author snapshot carried inside a [`Post`]. |
//! | [`Credentials`] | Login request body. |
//! | [`Registration`] | New-user request body. |
//!
//! [`Topic`] and [`Post`] held by the client are read-through copies of server
//! state. The author and topic inside a post are snapshots returned by the API
//! and are only kept for display and for re-submission on edit.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The currently authenticated identity.
///
/// The token is opaque and sent verbatim as the `Authorization` header value, so
/// any scheme prefix (e.g. `Bearer `) must already be part of it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "id", default)]
    pub user_id: i64,
    #[serde(rename = "nome", default)]
    pub display_name: String,
    #[serde(rename = "usuario", default)]
    pub login_handle: String,
    #[serde(rename = "foto", default)]
    pub photo_url: String,
    #[serde(rename = "token", default)]
    pub token: String,
}

impl Session {
    /// The logged-out session: zero id and empty strings.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// `token` is empty exactly when `user_id` is zero.
    pub fn is_consistent(&self) -> bool {
        self.token.is_empty() == (self.user_id == 0)
    }

    /// Author snapshot attached to post payloads.
    pub fn author(&self) -> UserSummary {
        UserSummary {
            id: self.user_id,
            name: self.display_name.clone(),
            handle: self.login_handle.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("display_name", &self.display_name)
            .field("login_handle", &self.login_handle)
            .field("photo_url", &self.photo_url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

/// A topic (`tema`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

impl Topic {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
        }
    }
}

/// Author snapshot (`usuario`) embedded in a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "usuario", default)]
    pub handle: String,
    #[serde(rename = "foto", default)]
    pub photo_url: String,
}

/// A post (`postagem`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "texto", default)]
    pub body: String,
    /// Assigned by the server; never sent when unset.
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "tema", default)]
    pub topic: Option<Topic>,
    #[serde(rename = "usuario", default)]
    pub author: Option<UserSummary>,
}

impl Post {
    /// Whether `session` identifies this post's author. Edit and delete
    /// actions are only offered to the author.
    pub fn is_authored_by(&self, session: &Session) -> bool {
        session.user_id != 0
            && self
                .author
                .as_ref()
                .is_some_and(|author| author.id == session.user_id)
    }
}

/// Login request body.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "usuario")]
    pub handle: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl Credentials {
    pub fn new(handle: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// New-user request body.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "usuario")]
    pub handle: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "foto", default)]
    pub photo_url: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("handle", &self.handle)
            .field("photo_url", &self.photo_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Session {
        Session {
            user_id: 7,
            display_name: "Ana".to_string(),
            login_handle: "ana@blog.dev".to_string(),
            photo_url: "https://i.example/ana.png".to_string(),
            token: "Bearer T".to_string(),
        }
    }

    #[test]
    fn test_empty_session_is_consistent() {
        let session = Session::empty();
        assert!(!session.is_authenticated());
        assert!(session.is_consistent());
        assert_eq!(session.user_id, 0);
    }

    #[test]
    fn test_half_populated_session_is_inconsistent() {
        let session = Session {
            user_id: 3,
            ..Session::default()
        };
        assert!(!session.is_consistent());
    }

    #[test]
    fn test_session_debug_hides_token() {
        let rendered = format!("{:?}", logged_in());
        assert!(!rendered.contains("Bearer T"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_session_from_login_response_ignores_extra_fields() {
        let json = r#"{"id":7,"nome":"Ana","usuario":"ana@blog.dev","senha":"","foto":"","token":"T"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.token, "T");
        assert_eq!(session.login_handle, "ana@blog.dev");
    }

    #[test]
    fn test_post_wire_names() {
        let post = Post {
            id: 0,
            title: "Hello".to_string(),
            body: "World".to_string(),
            created_at: None,
            topic: Some(Topic {
                id: 2,
                description: "Rust".to_string(),
            }),
            author: Some(logged_in().author()),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["titulo"], "Hello");
        assert_eq!(value["texto"], "World");
        assert_eq!(value["tema"]["descricao"], "Rust");
        assert_eq!(value["usuario"]["id"], 7);
        assert!(value.get("data").is_none());
        assert!(value["usuario"].get("token").is_none());
    }

    #[test]
    fn test_post_parses_server_timestamp() {
        let json = r#"{"id":1,"titulo":"t","texto":"b","data":"2024-05-01T10:20:30.123456","tema":null,"usuario":null}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        let created = post.created_at.unwrap();
        assert_eq!(created.format("%Y-%m-%d %H:%M").to_string(), "2024-05-01 10:20");
        assert!(post.topic.is_none());
    }

    #[test]
    fn test_is_authored_by() {
        let session = logged_in();
        let mut post = Post {
            author: Some(session.author()),
            ..Post::default()
        };
        assert!(post.is_authored_by(&session));
        assert!(!post.is_authored_by(&Session::empty()));

        post.author = Some(UserSummary {
            id: 8,
            ..UserSummary::default()
        });
        assert!(!post.is_authored_by(&session));

        post.author = None;
        assert!(!post.is_authored_by(&session));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("a", "hunter22");
        assert!(!format!("{creds:?}").contains("hunter22"));
    }
}
