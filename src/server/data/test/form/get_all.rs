use super::*;

/// Tests that club visibility filters forms by owning club.
///
/// Expected: Ok(Vec) with only the forms of the given club
#[tokio::test]
async fn filters_by_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mine = factory::create_club(db).await?;
    let other = factory::create_club(db).await?;
    let form = factory::create_form(db, mine.id).await?;
    factory::create_form(db, other.id).await?;

    let repo = ApplicationFormRepository::new(db);

    let visible = repo.get_all(Visibility::Club(mine.id)).await?;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, form.id);

    assert_eq!(repo.get_all(Visibility::All).await?.len(), 2);
    assert!(repo.get_all(Visibility::Nothing).await?.is_empty());

    Ok(())
}
