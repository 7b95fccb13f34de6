//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` function for
//! quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let club = factory::create_club(&db).await?;
//! let user = factory::user::UserFactory::new(&db)
//!     .username("organizer")
//!     .club_id(Some(club.id))
//!     .build()
//!     .await?;
//! let form = factory::create_form(&db, club.id).await?;
//! let question = factory::question::QuestionFactory::new(&db, form.id)
//!     .question_type("File")
//!     .build()
//!     .await?;
//! ```

pub mod answer;
pub mod applicant;
pub mod club;
pub mod form;
pub mod helpers;
pub mod question;
pub mod submission;
pub mod user;

pub use answer::create_answer;
pub use applicant::create_applicant;
pub use club::create_club;
pub use form::create_form;
pub use question::create_question;
pub use submission::create_submission;
pub use user::{create_member, create_user};
