mod create_account;
mod loader;
mod modal;
mod school_panel;
mod style;
mod submit_review;

pub use create_account::CreateAccount;
pub use loader::Loader;
pub use modal::Modal;
pub use school_panel::SchoolPanel;
pub use submit_review::SubmitReview;
