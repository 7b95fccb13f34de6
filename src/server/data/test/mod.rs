mod answer;
mod applicant;
mod club;
mod form;
mod submission;
mod user;
