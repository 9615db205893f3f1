// Backend address and OAuth client id, baked in at build time:
//   STUDENTSAYS_API_BASE=https://api.example.com trunk build --release

const DEFAULT_API_BASE: &str = "http://localhost:5000";

pub const SEND_OTP: &str = "/api/send-otp";
pub const SIGNUP: &str = "/api/signup";
pub const GOOGLE_AUTH: &str = "/api/google-auth";
pub const SCHOOLS_WITH_REVIEWS: &str = "/api/schoolsWithReviews";
pub const SCHOOLS: &str = "/api/schools";
pub const REVIEWS: &str = "/api/reviews";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub google_client_id: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::new(
            option_env!("STUDENTSAYS_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("STUDENTSAYS_GOOGLE_CLIENT_ID").unwrap_or_default(),
        )
    }

    pub fn new(api_base: &str, google_client_id: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            google_client_id: google_client_id.trim().to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub fn google_enabled(&self) -> bool {
        !self.google_client_id.is_empty()
    }
}
