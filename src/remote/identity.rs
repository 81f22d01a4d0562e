//! Authentication and user-facing identity endpoints.

use crate::model::{AuthResponse, LoginRequest, RegisterRequest, User};

use super::{RemoteClient, RemoteError};

impl RemoteClient {
    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, RemoteError> {
        self.send_json(
            self.client.post(self.url("/auth/login")).json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            }),
            "login",
        )
    }

    pub fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, RemoteError> {
        self.send_json(
            self.client.post(self.url("/auth/register")).json(req),
            "register",
        )
    }

    pub fn whoami(&self) -> Result<User, RemoteError> {
        self.send_json(self.client.get(self.url("/auth/me")), "whoami")
    }

    pub fn leaderboard(&self) -> Result<Vec<User>, RemoteError> {
        self.send_json(
            self.client.get(self.url("/users/leaderboard")),
            "leaderboard",
        )
    }
}
