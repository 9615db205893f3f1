//! Review form state and submission.

use crate::api::Api;
use crate::error::ClientError;
use crate::models::{NewSchool, ReviewRequest, SchoolOption};

pub const MAX_RATING: u8 = 5;
/// Picklist value that switches the form to "new school" mode.
pub const ADD_NEW_SCHOOL: &str = "addNewSchool";

pub const SELECT_SCHOOL: &str = "Please select a school.";
pub const NEW_SCHOOL_INCOMPLETE: &str = "Enter the new school's name and city.";
pub const PICK_RATING: &str = "Please choose a rating.";
pub const SIGN_IN_FIRST: &str = "Please sign in to submit a review.";
pub const REVIEW_FAILED: &str = "Could not submit review.";

/// Star selection with hover preview. Hover never touches the stored rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingPicker {
    rating: u8,
    hover: u8,
}

impl RatingPicker {
    pub fn rating(self) -> u8 {
        self.rating
    }

    pub fn select(self, star: u8) -> Self {
        if (1..=MAX_RATING).contains(&star) {
            Self { rating: star, ..self }
        } else {
            self
        }
    }

    pub fn hover(self, star: u8) -> Self {
        if (1..=MAX_RATING).contains(&star) {
            Self { hover: star, ..self }
        } else {
            self
        }
    }

    pub fn leave(self) -> Self {
        Self { hover: 0, ..self }
    }

    pub fn shown(self) -> u8 {
        if self.hover > 0 {
            self.hover
        } else {
            self.rating
        }
    }

    pub fn is_lit(self, star: u8) -> bool {
        self.shown() >= star
    }
}

/// Exactly one source of school id per review.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SchoolChoice {
    #[default]
    Unselected,
    Existing(String),
    /// Uses `ReviewDraft::new_school`.
    New,
}

impl SchoolChoice {
    pub fn from_select_value(value: &str) -> Self {
        match value {
            "" => Self::Unselected,
            ADD_NEW_SCHOOL => Self::New,
            id => Self::Existing(id.to_string()),
        }
    }

    pub fn select_value(&self) -> String {
        match self {
            Self::Unselected => String::new(),
            Self::Existing(id) => id.clone(),
            Self::New => ADD_NEW_SCHOOL.to_string(),
        }
    }
}

/// `new_school` survives switching the picklist away and back.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub choice: SchoolChoice,
    pub new_school: NewSchool,
    pub title: String,
    pub description: String,
    pub rating: RatingPicker,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            choice: SchoolChoice::Unselected,
            new_school: NewSchool {
                name: String::new(),
                city: String::new(),
            },
            title: String::new(),
            description: String::new(),
            rating: RatingPicker::default(),
        }
    }
}

/// A school created by an attempt whose review then failed.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedSchoolMemo {
    pub school: NewSchool,
    pub id: String,
}

pub async fn load_school_options(api: &dyn Api) -> Vec<SchoolOption> {
    match api.school_options().await {
        Ok(list) => list,
        Err(e) => {
            log::error!("Error fetching schools: {e}");
            Vec::new()
        }
    }
}

fn validate<'a>(token: Option<&'a str>, draft: &ReviewDraft) -> Result<&'a str, ClientError> {
    match &draft.choice {
        SchoolChoice::Unselected => return Err(ClientError::validation(SELECT_SCHOOL)),
        SchoolChoice::New
            if draft.new_school.name.trim().is_empty() || draft.new_school.city.trim().is_empty() =>
        {
            return Err(ClientError::validation(NEW_SCHOOL_INCOMPLETE))
        }
        _ => {}
    }
    if draft.rating.rating() == 0 {
        return Err(ClientError::validation(PICK_RATING));
    }
    token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ClientError::validation(SIGN_IN_FIRST))
}

/// Creates the school first when needed, then the review that references it.
/// `memo` carries a school created by a failed earlier attempt so a retry
/// does not create it twice; it is cleared once the review lands.
pub async fn submit_review(
    api: &dyn Api,
    token: Option<&str>,
    draft: &ReviewDraft,
    memo: &mut Option<CreatedSchoolMemo>,
) -> Result<(), ClientError> {
    let token = validate(token, draft)?;

    let school_id = match &draft.choice {
        SchoolChoice::Existing(id) => id.clone(),
        SchoolChoice::New => {
            let s = &draft.new_school;
            let school = NewSchool {
                name: s.name.trim().to_string(),
                city: s.city.trim().to_string(),
            };
            let reused = memo
                .as_ref()
                .filter(|m| m.school == school)
                .map(|m| m.id.clone());
            match reused {
                Some(id) => {
                    log::info!("reusing school {id} from the previous attempt");
                    id
                }
                None => {
                    let created = api.create_school(token, &school).await?;
                    log::info!("created school {} ({})", school.name, created.id);
                    *memo = Some(CreatedSchoolMemo {
                        school,
                        id: created.id.clone(),
                    });
                    created.id
                }
            }
        }
        SchoolChoice::Unselected => return Err(ClientError::validation(SELECT_SCHOOL)),
    };

    let review = ReviewRequest {
        title: draft.title.clone(),
        description: draft.description.clone(),
        rating: draft.rating.rating(),
        school_id,
    };
    api.create_review(token, &review).await?;
    *memo = None;
    Ok(())
}

pub fn error_message(e: &ClientError) -> String {
    e.user_message(REVIEW_FAILED, REVIEW_FAILED)
}
