use super::*;

/// Tests finding an answer by its submission and question pair.
///
/// Expected: Ok(Some) for the answered question, Ok(None) for another question
#[tokio::test]
async fn finds_answer_for_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, form, _, submission) =
        factory::helpers::create_submission_with_dependencies(db).await?;
    let answered = factory::create_question(db, form.id).await?;
    let unanswered = factory::create_question(db, form.id).await?;
    let answer = factory::create_answer(db, submission.id, answered.id).await?;

    let repo = AnswerRepository::new(db);

    let found = repo
        .find_by_submission_and_question(submission.id, answered.id)
        .await?
        .unwrap();
    assert_eq!(found.id, answer.id);
    assert!(repo
        .find_by_submission_and_question(submission.id, unanswered.id)
        .await?
        .is_none());

    Ok(())
}
