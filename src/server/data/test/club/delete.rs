use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a club with forms and applicants.
///
/// Verifies that the club's forms and applicants are removed with it and that
/// profiles pointing at the club lose their club instead of being deleted.
///
/// Expected: Ok(true), dependent rows removed, profile kept with no club
#[tokio::test]
async fn cascades_to_club_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let user = factory::create_member(db, club.id).await?;
    let form = factory::create_form(db, club.id).await?;
    let applicant = factory::create_applicant(db, club.id).await?;

    let deleted = ClubRepository::new(db).delete(club.id).await?;

    assert!(deleted);
    assert!(entity::prelude::ApplicationForm::find_by_id(form.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Applicant::find_by_id(applicant.id)
        .one(db)
        .await?
        .is_none());

    let (_, profile) = entity::prelude::User::find_by_id(user.id)
        .find_also_related(entity::prelude::Profile)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(profile.unwrap().club_id, None);

    Ok(())
}

/// Tests deleting a club that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ClubRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
