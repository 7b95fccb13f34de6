use super::*;

/// Tests renaming a club.
///
/// Expected: Ok(Model) with the new name, persisted
#[tokio::test]
async fn renames_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;

    let repo = ClubRepository::new(db);
    let updated = repo
        .update(
            club.id,
            ClubParams {
                name: "Chess Club".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.name, "Chess Club");
    assert_eq!(repo.get_by_id(club.id).await?.unwrap().name, "Chess Club");

    Ok(())
}
