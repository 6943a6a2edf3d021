//! Academy authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{AcademyRole, AcademyUser};

/// Payload returned by a successful login or signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademyAuth {
    pub token: String,
    pub user: AcademyUser,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: AcademyRole,
}

/// Async interface to the academy auth endpoints.
///
/// The session store is generic over this trait so tests can substitute a
/// canned implementation for the HTTP client.
pub trait AcademyApi {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<AcademyAuth, ApiError>>;
    fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: AcademyRole,
    ) -> impl std::future::Future<Output = Result<AcademyAuth, ApiError>>;
}

impl AcademyApi for HttpClient {
    async fn login(&self, email: &str, password: &str) -> Result<AcademyAuth, ApiError> {
        self.post_json("/auth/login", None, &LoginRequest { email, password })
            .await
    }

    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: AcademyRole,
    ) -> Result<AcademyAuth, ApiError> {
        self.post_json(
            "/auth/signup",
            None,
            &SignupRequest {
                name,
                email,
                password,
                role,
            },
        )
        .await
    }
}
