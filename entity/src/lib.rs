pub mod prelude;

pub mod applicant;
pub mod application_answer;
pub mod application_form;
pub mod application_question;
pub mod application_submission;
pub mod club;
pub mod profile;
pub mod user;
