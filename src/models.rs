use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub city: String,
    pub student_class: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailBody<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeBody<'a> {
    pub code: &'a str,
}

/// `{ message }` envelope used by most endpoints, success or not.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleUser {
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

/// Both fields are optional on purpose: a reply missing either is dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GoogleAuthResponse {
    #[serde(default)]
    pub user: Option<GoogleUser>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchoolOption {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
}

impl SchoolOption {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSchool {
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedSchool {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub title: String,
    pub description: String,
    pub rating: u8,
    pub school_id: String,
}

/// Stored under `user-info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub token: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signup_request_uses_camel_case_keys() {
        let req = SignupRequest {
            full_name: "Asha".into(),
            email: "a@x.com".into(),
            password: "p".into(),
            city: "Delhi".into(),
            student_class: "10".into(),
            otp: "123456".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "fullName": "Asha",
                "email": "a@x.com",
                "password": "p",
                "city": "Delhi",
                "studentClass": "10",
                "otp": "123456"
            })
        );
    }

    #[test]
    fn school_reads_mongo_id_and_defaults_missing_counts() {
        let s: School = serde_json::from_value(json!({
            "_id": "65f0",
            "name": "DPS",
            "city": "Delhi"
        }))
        .unwrap();
        assert_eq!(s.id, "65f0");
        assert_eq!(s.state, "");
        assert_eq!(s.review_count, 0);

        let s: School = serde_json::from_value(json!({
            "_id": "65f1",
            "name": "KV",
            "city": "Pune",
            "state": "MH",
            "reviewCount": 7
        }))
        .unwrap();
        assert_eq!(s.review_count, 7);
    }

    #[test]
    fn review_request_sends_school_id_key() {
        let r = ReviewRequest {
            title: "Good".into(),
            description: "Nice labs".into(),
            rating: 4,
            school_id: "65f0".into(),
        };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["schoolId"], "65f0");
        assert_eq!(v["rating"], 4);
    }

    #[test]
    fn google_reply_without_token_still_parses() {
        let r: GoogleAuthResponse = serde_json::from_value(json!({
            "user": { "email": "a@x.com", "fullName": "Asha", "profilePic": "https://img" }
        }))
        .unwrap();
        assert!(r.user.is_some());
        assert!(r.token.is_none());
    }

    #[test]
    fn option_label_shows_city() {
        let o = SchoolOption {
            id: "1".into(),
            name: "DPS".into(),
            city: "Delhi".into(),
        };
        assert_eq!(o.label(), "DPS (Delhi)");
    }
}
