use super::*;
use test_utils::factory::applicant::ApplicantFactory;

/// Tests the default ordering.
///
/// Expected: applicants sorted by first name ascending
#[tokio::test]
async fn orders_by_first_name_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    ApplicantFactory::new(db, club.id).first_name("Carol").build().await?;
    ApplicantFactory::new(db, club.id).first_name("Alice").build().await?;
    ApplicantFactory::new(db, club.id).first_name("Bob").build().await?;

    let applicants = ApplicantRepository::new(db)
        .get_all(
            Visibility::Club(club.id),
            ApplicantFilter::default(),
            ApplicantOrdering::default(),
        )
        .await?;

    let names: Vec<_> = applicants.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    Ok(())
}

/// Tests descending ordering by year.
///
/// Expected: seniors first, ties kept in id order
#[tokio::test]
async fn orders_by_year_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let freshman = ApplicantFactory::new(db, club.id).year(1).build().await?;
    let senior = ApplicantFactory::new(db, club.id).year(4).build().await?;
    let other_senior = ApplicantFactory::new(db, club.id).year(4).build().await?;

    let applicants = ApplicantRepository::new(db)
        .get_all(
            Visibility::Club(club.id),
            ApplicantFilter::default(),
            ApplicantOrdering::parse(Some("-year")),
        )
        .await?;

    let ids: Vec<_> = applicants.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![senior.id, other_senior.id, freshman.id]);

    Ok(())
}

/// Tests that visibility and path filters both apply.
///
/// Expected: only applicants of the visible club that applied to the filtered form
#[tokio::test]
async fn applies_visibility_and_form_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (club, form) = factory::helpers::create_club_with_form(db).await?;
    let other_form = factory::create_form(db, club.id).await?;
    let other_club = factory::create_club(db).await?;

    let wanted = ApplicantFactory::new(db, club.id)
        .application_id(Some(form.id))
        .build()
        .await?;
    ApplicantFactory::new(db, club.id)
        .application_id(Some(other_form.id))
        .build()
        .await?;
    factory::create_applicant(db, other_club.id).await?;

    let repo = ApplicantRepository::new(db);

    let filtered = repo
        .get_all(
            Visibility::Club(club.id),
            ApplicantFilter {
                club_id: Some(club.id),
                form_id: Some(form.id),
            },
            ApplicantOrdering::default(),
        )
        .await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, wanted.id);

    let club_only = repo
        .get_all(
            Visibility::Club(club.id),
            ApplicantFilter::default(),
            ApplicantOrdering::default(),
        )
        .await?;
    assert_eq!(club_only.len(), 2);

    let hidden = repo
        .get_all(
            Visibility::Nothing,
            ApplicantFilter::default(),
            ApplicantOrdering::default(),
        )
        .await?;
    assert!(hidden.is_empty());

    Ok(())
}
