//! Account creation: OTP request/resend, gated submit, Google code exchange.

use crate::api::Api;
use crate::error::ClientError;
use crate::models::{SignupRequest, Session};
use crate::session::{self, SessionStore};

pub const RESEND_COOLDOWN_SECS: u32 = 10;

pub const EMAIL_REQUIRED: &str = "Email is required to send OTP.";
pub const OTP_FAILED: &str = "Failed to send OTP.";
pub const OTP_ERROR: &str = "An error occurred while sending OTP.";
pub const RESEND_TOO_SOON: &str = "Please wait before requesting another OTP.";
pub const REQUEST_OTP_FIRST: &str = "Please request OTP first.";
pub const SIGNUP_FAILED: &str = "Signup failed.";
pub const SIGNUP_ERROR: &str = "An error occurred during signup.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Idle,
    OtpRequested {
        resend_in: u32,
    },
    Submitted,
}

impl SignupPhase {
    fn otp_sent() -> Self {
        Self::OtpRequested {
            resend_in: RESEND_COOLDOWN_SECS,
        }
    }

    pub fn otp_requested(self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn can_resend(self) -> bool {
        matches!(self, Self::OtpRequested { resend_in: 0 })
    }

    /// Seconds left before resend unlocks, while counting down.
    pub fn resend_in(self) -> Option<u32> {
        match self {
            Self::OtpRequested { resend_in } if resend_in > 0 => Some(resend_in),
            _ => None,
        }
    }

    /// One second of countdown.
    pub fn tick(self) -> Self {
        match self {
            Self::OtpRequested { resend_in } => Self::OtpRequested {
                resend_in: resend_in.saturating_sub(1),
            },
            other => other,
        }
    }
}

/// First OTP request. Returns the next phase and the server's message.
pub async fn request_otp(api: &dyn Api, email: &str) -> Result<(SignupPhase, String), ClientError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ClientError::validation(EMAIL_REQUIRED));
    }
    let reply = api.send_otp(email).await?;
    log::info!("OTP requested for {email}");
    Ok((SignupPhase::otp_sent(), reply.message.unwrap_or_default()))
}

pub async fn resend_otp(
    api: &dyn Api,
    phase: SignupPhase,
    email: &str,
) -> Result<(SignupPhase, String), ClientError> {
    if !phase.can_resend() {
        return Err(ClientError::validation(RESEND_TOO_SOON));
    }
    request_otp(api, email).await
}

pub fn otp_error_message(e: &ClientError) -> String {
    e.user_message(OTP_FAILED, OTP_ERROR)
}

/// Posts the form once an OTP has been requested, then stores the session.
pub async fn submit(
    api: &dyn Api,
    store: &dyn SessionStore,
    phase: SignupPhase,
    form: &SignupRequest,
) -> Result<Session, ClientError> {
    if !phase.otp_requested() {
        return Err(ClientError::validation(REQUEST_OTP_FIRST));
    }
    // Same email string the OTP was issued to.
    let req = SignupRequest {
        email: form.email.trim().to_string(),
        ..form.clone()
    };
    let reply = api.signup(&req).await?;
    let session = Session {
        email: req.email,
        name: req.full_name.trim().to_string(),
        token: reply.token,
        image: None,
    };
    session::save(store, &session)?;
    log::info!("signed up {}", session.email);
    Ok(session)
}

pub fn submit_error_message(e: &ClientError) -> String {
    e.user_message(SIGNUP_FAILED, SIGNUP_ERROR)
}

/// Exchanges a Google authorization code for a session. Every failure is
/// logged and swallowed; the caller shows nothing.
pub async fn google_login(api: &dyn Api, store: &dyn SessionStore, code: &str) -> Option<Session> {
    if code.is_empty() {
        log::error!("Google sign-in: empty authorization code");
        return None;
    }
    let reply = match api.google_auth(code).await {
        Ok(r) => r,
        Err(e) => {
            log::error!("Google sign-in: {e}");
            return None;
        }
    };
    let (Some(user), Some(token)) = (reply.user, reply.token) else {
        log::error!("Google sign-in: reply is missing user or token");
        return None;
    };
    let session = Session {
        email: user.email,
        name: user.full_name,
        token,
        image: user.profile_pic,
    };
    if let Err(e) = session::save(store, &session) {
        log::error!("Google sign-in: {e}");
        return None;
    }
    Some(session)
}
