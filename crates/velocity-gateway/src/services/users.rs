//! User endpoints backed by synthesized records.

use async_trait::async_trait;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use velocity_core::error::Result;
use velocity_core::model::{encode_json_line, User};

use crate::dispatch::{RouteHandler, RouteRequest};

fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response> {
    let body = encode_json_line(value)?;
    Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response())
}

/// `GET /api/users`: the fixed three-user roster.
#[derive(Default)]
pub struct UsersHandler;

impl UsersHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RouteHandler for UsersHandler {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn handle(&self, _req: RouteRequest) -> Result<Response> {
        json_response(&User::roster())
    }
}

/// `GET /api/users/{id}`: one synthesized user.
///
/// A non-numeric id is not an error. See [`User::from_raw_id`].
#[derive(Default)]
pub struct UserHandler;

impl UserHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RouteHandler for UserHandler {
    fn name(&self) -> &'static str {
        "user"
    }

    async fn handle(&self, req: RouteRequest) -> Result<Response> {
        let raw = req.param.unwrap_or_default();
        json_response(&User::from_raw_id(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(param: Option<&str>) -> RouteRequest {
        RouteRequest {
            param: param.map(String::from),
        }
    }

    async fn body(resp: Response) -> Vec<u8> {
        axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn list_is_json_roster() {
        let resp = UsersHandler::new().handle(req(None)).await.unwrap();
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        let users: Vec<User> = serde_json::from_slice(&body(resp).await).unwrap();
        assert_eq!(users, User::roster());
    }

    #[tokio::test]
    async fn single_user_echoes_raw_id() {
        let resp = UserHandler::new().handle(req(Some("abc"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body(resp).await,
            b"{\"id\":0,\"name\":\"User abc\",\"email\":\"userabc@example.com\"}\n".to_vec()
        );
    }
}
