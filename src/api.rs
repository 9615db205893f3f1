use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{self, AppConfig};
use crate::error::ClientError;
use crate::models::{
    CodeBody, CreatedSchool, EmailBody, GoogleAuthResponse, MessageBody, NewSchool, ReviewRequest,
    School, SchoolOption, SignupRequest, TokenBody,
};

/// Backend calls used by the screens. Single-threaded (WASM), hence `?Send`.
#[async_trait(?Send)]
pub trait Api {
    async fn send_otp(&self, email: &str) -> Result<MessageBody, ClientError>;
    async fn signup(&self, req: &SignupRequest) -> Result<TokenBody, ClientError>;
    async fn google_auth(&self, code: &str) -> Result<GoogleAuthResponse, ClientError>;
    async fn schools_with_reviews(&self) -> Result<Vec<School>, ClientError>;
    async fn school_options(&self) -> Result<Vec<SchoolOption>, ClientError>;
    async fn create_school(&self, token: &str, school: &NewSchool) -> Result<CreatedSchool, ClientError>;
    async fn create_review(&self, token: &str, review: &ReviewRequest) -> Result<(), ClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.config.url(path);
        log::info!("GET {url}");
        let reply = read_reply(Request::get(&url).send().await?).await?;
        decode_reply(reply.status, reply.ok, &reply.text)
    }

    async fn post<B>(&self, path: &str, body: &B, token: Option<&str>) -> Result<Reply, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        log::info!("POST {url}");
        let resp = with_bearer(Request::post(&url), token).json(body)?.send().await?;
        read_reply(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let reply = self.post(path, body, token).await?;
        decode_reply(reply.status, reply.ok, &reply.text)
    }
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(t) => builder.header("Authorization", &format!("Bearer {t}")),
        None => builder,
    }
}

struct Reply {
    status: u16,
    ok: bool,
    text: String,
}

async fn read_reply(resp: Response) -> Result<Reply, ClientError> {
    let text = resp.text().await?;
    Ok(Reply {
        status: resp.status(),
        ok: resp.ok(),
        text,
    })
}

/// 2xx bodies must parse as `T`; anything else becomes `Server`.
pub fn decode_reply<T: DeserializeOwned>(status: u16, ok: bool, text: &str) -> Result<T, ClientError> {
    accept_reply(status, ok, text)?;
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Status-only check. The body of a 2xx reply is ignored.
pub fn accept_reply(status: u16, ok: bool, text: &str) -> Result<(), ClientError> {
    if ok {
        return Ok(());
    }
    log::warn!("HTTP {status}: {text}");
    Err(server_error(status, text))
}

/// Non-2xx reply; picks up `{ "message": ... }` when the body has one.
pub fn server_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|m| m.message);
    ClientError::Server { status, message }
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn send_otp(&self, email: &str) -> Result<MessageBody, ClientError> {
        self.post_json(config::SEND_OTP, &EmailBody { email }, None).await
    }

    async fn signup(&self, req: &SignupRequest) -> Result<TokenBody, ClientError> {
        self.post_json(config::SIGNUP, req, None).await
    }

    async fn google_auth(&self, code: &str) -> Result<GoogleAuthResponse, ClientError> {
        self.post_json(config::GOOGLE_AUTH, &CodeBody { code }, None).await
    }

    async fn schools_with_reviews(&self) -> Result<Vec<School>, ClientError> {
        self.get_json(config::SCHOOLS_WITH_REVIEWS).await
    }

    async fn school_options(&self) -> Result<Vec<SchoolOption>, ClientError> {
        self.get_json(config::SCHOOLS).await
    }

    async fn create_school(&self, token: &str, school: &NewSchool) -> Result<CreatedSchool, ClientError> {
        self.post_json(config::SCHOOLS, school, Some(token)).await
    }

    async fn create_review(&self, token: &str, review: &ReviewRequest) -> Result<(), ClientError> {
        let reply = self.post(config::REVIEWS, review, Some(token)).await?;
        accept_reply(reply.status, reply.ok, &reply.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_extracts_message() {
        let e = server_error(409, r#"{"message":"User already exists"}"#);
        assert_eq!(
            e,
            ClientError::Server {
                status: 409,
                message: Some("User already exists".into())
            }
        );
    }

    #[test]
    fn server_error_tolerates_html_bodies() {
        let e = server_error(502, "<html>Bad Gateway</html>");
        assert_eq!(e, ClientError::Server { status: 502, message: None });
    }

    #[test]
    fn review_created_with_empty_body_is_success() {
        assert_eq!(accept_reply(201, true, ""), Ok(()));
        assert_eq!(accept_reply(200, true, "<html>ok</html>"), Ok(()));
    }

    #[test]
    fn review_rejection_keeps_server_message() {
        assert_eq!(
            accept_reply(401, false, r#"{"message":"Invalid token"}"#),
            Err(ClientError::Server {
                status: 401,
                message: Some("Invalid token".into())
            })
        );
    }

    #[test]
    fn wrong_shape_on_success_is_a_decode_error() {
        let r: Result<TokenBody, _> = decode_reply(200, true, "<html>");
        assert!(matches!(r, Err(ClientError::Decode(_))));

        let r: Result<Vec<School>, _> = decode_reply(200, true, r#"{"message":"ok"}"#);
        assert!(matches!(r, Err(ClientError::Decode(_))));
    }

    #[test]
    fn non_2xx_is_a_server_error_even_with_a_valid_body() {
        let r: Result<TokenBody, _> = decode_reply(400, false, r#"{"message":"Invalid or expired OTP","token":"x"}"#);
        assert_eq!(
            r.unwrap_err(),
            ClientError::Server {
                status: 400,
                message: Some("Invalid or expired OTP".into())
            }
        );
    }

    #[test]
    fn success_body_is_decoded() {
        let r: CreatedSchool = decode_reply(201, true, r#"{"_id":"65f0","name":"DPS"}"#).unwrap();
        assert_eq!(r.id, "65f0");
    }
}
