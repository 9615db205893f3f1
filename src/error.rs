use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("server returned {status}")]
    Server { status: u16, message: Option<String> },

    /// 2xx body that did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Text shown inline under a form. Server messages pass through verbatim.
    pub fn user_message(&self, server_fallback: &str, transport_fallback: &str) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Server { message: Some(msg), .. } if !msg.is_empty() => msg.clone(),
            Self::Server { .. } => server_fallback.to_string(),
            Self::Network(_) | Self::Decode(_) | Self::Storage(_) => transport_fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let e = ClientError::Server {
            status: 400,
            message: Some("Invalid OTP".into()),
        };
        assert_eq!(e.user_message("Signup failed.", "oops"), "Invalid OTP");
    }

    #[test]
    fn server_without_message_uses_fallback() {
        let e = ClientError::Server { status: 500, message: None };
        assert_eq!(e.user_message("Signup failed.", "oops"), "Signup failed.");
        let e = ClientError::Server {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(e.user_message("Signup failed.", "oops"), "Signup failed.");
    }

    #[test]
    fn transport_and_decode_share_a_message() {
        let net = ClientError::Network("connection refused".into());
        let dec = ClientError::Decode("expected value".into());
        assert_eq!(net.user_message("x", "An error occurred during signup."), "An error occurred during signup.");
        assert_eq!(dec.user_message("x", "An error occurred during signup."), "An error occurred during signup.");
    }
}
