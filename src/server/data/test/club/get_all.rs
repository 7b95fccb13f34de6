use super::*;

/// Tests listing every club.
///
/// Verifies that unrestricted visibility returns all clubs ordered by id.
///
/// Expected: Ok(Vec) with both clubs in insertion order
#[tokio::test]
async fn returns_all_clubs_for_unrestricted_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_club(db).await?;
    let second = factory::create_club(db).await?;

    let clubs = ClubRepository::new(db).get_all(Visibility::All).await?;

    assert_eq!(
        clubs.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests listing clubs restricted to one club.
///
/// Expected: Ok(Vec) containing only that club
#[tokio::test]
async fn restricts_to_single_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_club(db).await?;
    let mine = factory::create_club(db).await?;

    let clubs = ClubRepository::new(db)
        .get_all(Visibility::Club(mine.id))
        .await?;

    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].id, mine.id);

    Ok(())
}

/// Tests listing clubs with no visibility.
///
/// Expected: Ok(empty Vec) even though clubs exist
#[tokio::test]
async fn returns_nothing_for_hidden_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_club(db).await?;

    let clubs = ClubRepository::new(db).get_all(Visibility::Nothing).await?;

    assert!(clubs.is_empty());

    Ok(())
}
