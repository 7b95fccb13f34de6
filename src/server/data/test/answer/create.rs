use super::*;

/// Tests storing a file answer.
///
/// Expected: Ok(Model) with the file path and no text
#[tokio::test]
async fn stores_file_path() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, form, _, submission) =
        factory::helpers::create_submission_with_dependencies(db).await?;
    let question = factory::question::QuestionFactory::new(db, form.id)
        .question_type("File")
        .build()
        .await?;

    let answer = AnswerRepository::new(db)
        .create(
            submission.id,
            AnswerRecord {
                question_id: question.id,
                answer_text: None,
                answer_file: Some("answers/abc_cv.pdf".to_string()),
            },
        )
        .await?;

    assert_eq!(answer.submission_id, submission.id);
    assert_eq!(answer.answer_text, None);
    assert_eq!(answer.answer_file.as_deref(), Some("answers/abc_cv.pdf"));

    Ok(())
}

/// Tests replacing an answer's contents.
///
/// Expected: text replaced and file cleared
#[tokio::test]
async fn update_replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, form, _, submission) =
        factory::helpers::create_submission_with_dependencies(db).await?;
    let question = factory::create_question(db, form.id).await?;
    let answer = factory::create_answer(db, submission.id, question.id).await?;

    let updated = AnswerRepository::new(db)
        .update(
            answer.id,
            AnswerRecord {
                question_id: question.id,
                answer_text: Some("Changed my mind".to_string()),
                answer_file: None,
            },
        )
        .await?;

    assert_eq!(updated.answer_text.as_deref(), Some("Changed my mind"));
    assert_eq!(updated.answer_file, None);

    Ok(())
}
