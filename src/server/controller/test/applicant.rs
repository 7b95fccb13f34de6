use super::app_state;
use crate::{
    model::applicant::{ApplicantDto, ApplicantStage, ApplicantWriteDto, StageChangeDto, Year},
    server::{
        controller::applicant::{change_stage, create_applicant, create_form_applicant},
        error::AppError,
        middleware::session::AuthSession,
    },
};
use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

fn write_dto(club_association: Option<i32>) -> ApplicantWriteDto {
    ApplicantWriteDto {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        year: Year::Freshman,
        club_association,
        application: None,
    }
}

/// Tests anonymous applicant creation.
///
/// Expected: 201 Created
#[tokio::test]
async fn anonymous_can_apply() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let (state, _media) = app_state(db);

    let response = create_applicant(State(state), Json(write_dto(Some(club.id))))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests applicant creation without any club.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn apply_without_club_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (state, _media) = app_state(db);

    let response = create_applicant(State(state), Json(write_dto(None)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests applying through a nested form route.
///
/// Verifies the club and form come from the path even when the body names none.
///
/// Expected: 201 Created
#[tokio::test]
async fn nested_route_supplies_club_and_form() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (club, form) = factory::helpers::create_club_with_form(db).await?;
    let (state, _media) = app_state(db);

    let response = create_form_applicant(
        State(state),
        Path((club.id, form.id)),
        Json(write_dto(None)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests stage changes through the handler.
///
/// Expected: 401 when anonymous, 200 for a valid step, 400 for a skipped stage
#[tokio::test]
async fn stage_change_status_codes() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let club = factory::create_club(db).await?;
    let user = factory::create_member(db, club.id).await?;
    let applicant = factory::create_applicant(db, club.id).await?;
    let (state, _media) = app_state(db);

    let anonymous = change_stage(
        State(state.clone()),
        session.clone(),
        Path(applicant.id),
        Json(StageChangeDto {
            stage: ApplicantStage::PassedScreening,
        }),
    )
    .await
    .into_response();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    AuthSession::new(session).set_user_id(user.id).await?;

    let advanced = change_stage(
        State(state.clone()),
        session.clone(),
        Path(applicant.id),
        Json(StageChangeDto {
            stage: ApplicantStage::PassedScreening,
        }),
    )
    .await
    .into_response();
    assert_eq!(advanced.status(), StatusCode::OK);

    let skipped = change_stage(
        State(state),
        session.clone(),
        Path(applicant.id),
        Json(StageChangeDto {
            stage: ApplicantStage::PassedSecondRound,
        }),
    )
    .await
    .into_response();
    assert_eq!(skipped.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests an applicant body carrying server-computed fields.
///
/// Verifies `id`, `stage` and the pass flags in the request are ignored.
///
/// Expected: 201 Created with a fresh id, stage Applied and every pass flag false
#[tokio::test]
async fn create_ignores_read_only_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let (state, _media) = app_state(db);

    let payload: ApplicantWriteDto = serde_json::from_value(json!({
        "id": 999,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "year": "Senior",
        "club_association": club.id,
        "stage": "PassedSecondRound",
        "pass_apps": true,
        "pass_first": true,
        "pass_second": true,
        "submission": { "id": 42, "form": 1, "applicant": 1, "status": "Submitted", "answers": [] }
    }))
    .unwrap();

    let response = create_applicant(State(state), Json(payload))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let applicant: ApplicantDto = serde_json::from_slice(&body).unwrap();
    assert_ne!(applicant.id, 999);
    assert_eq!(applicant.year, Year::Senior);
    assert_eq!(applicant.stage, ApplicantStage::Applied);
    assert!(!applicant.pass_apps);
    assert!(!applicant.pass_first);
    assert!(!applicant.pass_second);
    assert!(applicant.submission.is_none());

    Ok(())
}
