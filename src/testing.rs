//! In-memory `Api` double that records every call in order.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::Api;
use crate::error::ClientError;
use crate::models::{
    CreatedSchool, GoogleAuthResponse, MessageBody, NewSchool, ReviewRequest, School, SchoolOption,
    SignupRequest, TokenBody,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SendOtp(String),
    Signup(SignupRequest),
    GoogleAuth(String),
    SchoolsWithReviews,
    SchoolOptions,
    CreateSchool { token: String, school: NewSchool },
    CreateReview { token: String, review: ReviewRequest },
}

pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub otp_reply: Result<MessageBody, ClientError>,
    pub signup_reply: Result<TokenBody, ClientError>,
    pub google_reply: Result<GoogleAuthResponse, ClientError>,
    pub schools: Result<Vec<School>, ClientError>,
    pub options: Result<Vec<SchoolOption>, ClientError>,
    pub created_ids: RefCell<VecDeque<String>>,
    /// Popped per review call; empty means success.
    pub review_replies: RefCell<VecDeque<Result<(), ClientError>>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            otp_reply: Ok(MessageBody {
                message: Some("OTP sent to your email".into()),
            }),
            signup_reply: Ok(TokenBody {
                token: "jwt-signup".into(),
            }),
            google_reply: Ok(GoogleAuthResponse::default()),
            schools: Ok(Vec::new()),
            options: Ok(Vec::new()),
            created_ids: RefCell::new(VecDeque::from(vec!["new-1".to_string(), "new-2".to_string()])),
            review_replies: RefCell::new(VecDeque::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl Api for FakeApi {
    async fn send_otp(&self, email: &str) -> Result<MessageBody, ClientError> {
        self.record(Call::SendOtp(email.to_string()));
        self.otp_reply.clone()
    }

    async fn signup(&self, req: &SignupRequest) -> Result<TokenBody, ClientError> {
        self.record(Call::Signup(req.clone()));
        self.signup_reply.clone()
    }

    async fn google_auth(&self, code: &str) -> Result<GoogleAuthResponse, ClientError> {
        self.record(Call::GoogleAuth(code.to_string()));
        self.google_reply.clone()
    }

    async fn schools_with_reviews(&self) -> Result<Vec<School>, ClientError> {
        self.record(Call::SchoolsWithReviews);
        self.schools.clone()
    }

    async fn school_options(&self) -> Result<Vec<SchoolOption>, ClientError> {
        self.record(Call::SchoolOptions);
        self.options.clone()
    }

    async fn create_school(&self, token: &str, school: &NewSchool) -> Result<CreatedSchool, ClientError> {
        self.record(Call::CreateSchool {
            token: token.to_string(),
            school: school.clone(),
        });
        self.created_ids
            .borrow_mut()
            .pop_front()
            .map(|id| CreatedSchool { id })
            .ok_or(ClientError::Server {
                status: 500,
                message: None,
            })
    }

    async fn create_review(&self, token: &str, review: &ReviewRequest) -> Result<(), ClientError> {
        self.record(Call::CreateReview {
            token: token.to_string(),
            review: review.clone(),
        });
        self.review_replies.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}
