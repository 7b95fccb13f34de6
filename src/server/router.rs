//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI path. Handlers
//! that share a path are registered in the same `routes!` call. Swagger UI is served at
//! `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's router with all API endpoints and Swagger UI.
///
/// The returned router still needs its state and the session, CORS and tracing layers
/// applied by `main`.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Clubhouse", description = "Club application management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and login"),
        (name = controller::user::USER_TAG, description = "User accounts"),
        (name = controller::club::CLUB_TAG, description = "Clubs"),
        (name = controller::form::FORM_TAG, description = "Application forms"),
        (name = controller::question::QUESTION_TAG, description = "Form questions"),
        (name = controller::applicant::APPLICANT_TAG, description = "Applicants and their review stage"),
        (name = controller::submission::SUBMISSION_TAG, description = "Application submissions"),
        (name = controller::answer::ANSWER_TAG, description = "Answers within a submission"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::club::get_clubs,
            controller::club::create_club
        ))
        .routes(routes!(
            controller::club::get_club,
            controller::club::update_club,
            controller::club::delete_club
        ))
        .routes(routes!(
            controller::form::get_forms,
            controller::form::create_form
        ))
        .routes(routes!(
            controller::form::get_form,
            controller::form::update_form,
            controller::form::delete_form
        ))
        .routes(routes!(
            controller::question::get_questions,
            controller::question::create_question
        ))
        .routes(routes!(
            controller::question::get_question,
            controller::question::update_question,
            controller::question::delete_question
        ))
        .routes(routes!(
            controller::applicant::get_form_applicants,
            controller::applicant::create_form_applicant
        ))
        .routes(routes!(
            controller::applicant::get_form_applicant,
            controller::applicant::update_form_applicant,
            controller::applicant::delete_form_applicant
        ))
        .routes(routes!(
            controller::applicant::get_applicants,
            controller::applicant::create_applicant
        ))
        .routes(routes!(
            controller::applicant::get_applicant,
            controller::applicant::update_applicant,
            controller::applicant::delete_applicant
        ))
        .routes(routes!(controller::applicant::change_stage))
        .routes(routes!(controller::applicant::register_applicant))
        .routes(routes!(
            controller::submission::get_submissions,
            controller::submission::create_submission
        ))
        .routes(routes!(
            controller::submission::get_submission,
            controller::submission::update_submission,
            controller::submission::delete_submission
        ))
        .routes(routes!(controller::submission::submit_submission))
        .routes(routes!(
            controller::answer::get_answers,
            controller::answer::create_answer
        ))
        .routes(routes!(
            controller::answer::get_answer,
            controller::answer::update_answer,
            controller::answer::delete_answer
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
