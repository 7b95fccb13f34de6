pub use super::applicant::Entity as Applicant;
pub use super::application_answer::Entity as ApplicationAnswer;
pub use super::application_form::Entity as ApplicationForm;
pub use super::application_question::Entity as ApplicationQuestion;
pub use super::application_submission::Entity as ApplicationSubmission;
pub use super::club::Entity as Club;
pub use super::profile::Entity as Profile;
pub use super::user::Entity as User;
