//! Mock auth helpers for integration tests.
//!
//! The catalog service validates HS256 bearer tokens with audience
//! `authenticated`. [`MockAuth`] mints tokens with a test secret so tests
//! drive the real extractor path end to end.

use http::{HeaderMap, HeaderValue, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

/// Secret shared between token minting here and the validator under test.
pub const TEST_SECRET: &str = "brewlog-integration-test-secret";

#[derive(Serialize)]
struct Claims {
    sub: String,
    email: Option<String>,
    role: Option<String>,
    exp: u64,
    aud: String,
}

/// Configurable identity minted into test bearer tokens.
pub struct MockAuth {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Mint a token that the validator accepts for the next hour.
    pub fn token(&self) -> String {
        let exp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600;
        let claims = Claims {
            sub: self.user_id.to_string(),
            email: self.email.clone(),
            role: Some("authenticated".to_owned()),
            exp,
            aud: "authenticated".to_owned(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }

    /// `Authorization: Bearer ...` headers for a test request.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap(),
        );
        map
    }
}
