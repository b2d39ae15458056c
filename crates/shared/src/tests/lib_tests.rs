use serde_json::json;

use crate::{
    domain::{
        AnswerSet, AssessmentId, ChoiceOption, MatchScore, Profile, ProfileSectionKind, Question,
        QuestionKind, Recommendation,
    },
    error::{ApiErrorBody, ContractError},
    protocol::{HealthStatus, QuestionnaireResponse, ResultsResponse, SubmissionRequest},
};

#[test]
fn question_ids_and_option_values_accept_numbers() {
    let body = json!({
        "questions": [
            {
                "id": 1,
                "text": "How do you prefer to work?",
                "type": "single_choice",
                "options": [[1, "Alone"], ["2", "In a small team"]]
            },
            {
                "id": "7",
                "text": "Anything else?",
                "type": "free_response",
                "optional": true
            }
        ]
    });

    let parsed: QuestionnaireResponse = serde_json::from_value(body).expect("questionnaire");
    assert_eq!(parsed.questions.len(), 2);

    let first = &parsed.questions[0];
    assert_eq!(first.field_name(), "q1");
    assert_eq!(first.kind, QuestionKind::SingleChoice);
    assert!(first.is_required());
    assert_eq!(
        first.options(),
        &[
            ChoiceOption::new("1", "Alone"),
            ChoiceOption::new("2", "In a small team")
        ]
    );

    let second = &parsed.questions[1];
    assert_eq!(second.field_name(), "q7");
    assert!(second.kind.is_free_response());
    assert!(!second.is_required());
    assert!(second.options().is_empty());
}

#[test]
fn unknown_question_type_is_kept_as_other() {
    let question: Question = serde_json::from_value(json!({
        "id": 3,
        "text": "Pick any",
        "type": "multiple_choice",
        "optional": null,
        "options": [["a", "A"]]
    }))
    .expect("question");

    assert_eq!(question.kind, QuestionKind::Other);
    assert!(!question.kind.is_free_response());
    assert!(question.is_required());
}

#[test]
fn null_text_or_type_does_not_reject_the_questionnaire() {
    let parsed: QuestionnaireResponse = serde_json::from_value(json!({
        "questions": [
            {"id": 1, "text": "How do you prefer to work?", "type": "single_choice",
             "options": [["1", "Alone"]]},
            {"id": 2, "text": null, "type": null, "options": [["a", "A"]]},
            {"id": 3, "type": 7}
        ]
    }))
    .expect("questionnaire");

    assert_eq!(parsed.questions.len(), 3);
    assert_eq!(parsed.questions[0].text(), "How do you prefer to work?");

    let second = &parsed.questions[1];
    assert_eq!(second.text, None);
    assert_eq!(second.text(), "");
    assert_eq!(second.kind, QuestionKind::SingleChoice);
    assert_eq!(second.options().len(), 1);

    let third = &parsed.questions[2];
    assert_eq!(third.text(), "");
    assert_eq!(third.kind, QuestionKind::SingleChoice);
}

#[test]
fn profile_tolerates_missing_and_malformed_sections() {
    let profile: Profile = serde_json::from_value(json!({
        "work_style": {"description": "Focused", "explanation": "Deep work"},
        "interaction_level": "not an object",
        "task_preference": {"description": 42},
        "strengths": ["Detail oriented", 3, {"x": 1}]
    }))
    .expect("profile");

    let work_style = profile
        .section(ProfileSectionKind::WorkStyle)
        .expect("work style");
    assert_eq!(work_style.description.as_deref(), Some("Focused"));
    assert!(profile.section(ProfileSectionKind::Environment).is_none());
    assert!(profile
        .section(ProfileSectionKind::InteractionLevel)
        .is_none());
    assert_eq!(
        profile
            .section(ProfileSectionKind::TaskPreference)
            .and_then(|section| section.description.as_deref()),
        Some("42")
    );
    assert_eq!(profile.strengths(), &["Detail oriented", "3"]);
}

#[test]
fn results_drop_recommendations_that_are_not_objects() {
    let results: ResultsResponse = serde_json::from_value(json!({
        "assessment_id": "abc",
        "profile": null,
        "recommendations": [{"title": "Archivist"}, "garbage", {"title": "Data Analyst"}]
    }))
    .expect("results");

    assert_eq!(results.assessment_id, Some(AssessmentId::from("abc")));
    assert!(results.profile.is_none());
    let titles: Vec<_> = results
        .recommendations
        .expect("recommendations")
        .iter()
        .map(|rec| rec.title().map(str::to_string))
        .collect();
    assert_eq!(
        titles,
        vec![Some("Archivist".to_string()), Some("Data Analyst".to_string())]
    );
}

// The backend sends scores in two encodings; both must keep rendering until
// it is normalized upstream.
#[test]
fn numeric_score_is_already_a_percentage() {
    assert_eq!(MatchScore::Percent(85.0).display_percent(), 85.0);
    assert_eq!(MatchScore::Percent(72.5).display_percent(), 72.5);
}

#[test]
fn string_score_is_a_fraction_scaled_and_rounded() {
    assert_eq!(
        MatchScore::Fraction("0.55".into()).display_percent(),
        55.0
    );
    assert_eq!(
        MatchScore::Fraction(" 0.876 ".into()).display_percent(),
        88.0
    );
    assert_eq!(
        MatchScore::Fraction("n/a".into()).display_percent(),
        0.0
    );
}

#[test]
fn recommendation_falls_back_to_alternate_fields() {
    let rec: Recommendation = serde_json::from_value(json!({
        "title": "Technical Writer",
        "match_score": 0,
        "fit_score": "0.91",
        "description": "",
        "reasoning": "Matches your written communication preference",
        "highlights": ["Async work"],
        "considerations": ["Tight deadlines"]
    }))
    .expect("recommendation");

    assert_eq!(rec.display_percent(), 91.0);
    assert_eq!(
        rec.summary(),
        Some("Matches your written communication preference")
    );
    assert_eq!(rec.highlights(), &["Async work"]);
    assert_eq!(rec.challenges(), &["Tight deadlines"]);
    assert!(rec.company().is_none());
    assert!(rec.url().is_none());
}

#[test]
fn recommendation_without_score_displays_zero() {
    let rec: Recommendation =
        serde_json::from_value(json!({"match_score": {"nested": true}})).expect("rec");
    assert!(rec.score().is_none());
    assert_eq!(rec.display_percent(), 0.0);
}

#[test]
fn submission_request_sends_null_job_description() {
    let mut answers = AnswerSet::new();
    answers.insert("q1", "2");
    answers.insert("q7", "");

    let body = serde_json::to_value(SubmissionRequest::new(answers)).expect("serialize");
    assert_eq!(
        body,
        json!({"answers": {"q1": "2", "q7": ""}, "job_description": null})
    );
}

#[test]
fn error_body_message_prefers_string_detail() {
    let body: ApiErrorBody =
        serde_json::from_value(json!({"detail": "Assessment not found"})).expect("body");
    assert_eq!(body.message().as_deref(), Some("Assessment not found"));

    let body: ApiErrorBody =
        serde_json::from_value(json!({"detail": [{"loc": ["body"], "msg": "field required"}]}))
            .expect("body");
    let message = body.message().expect("message");
    assert!(message.contains("field required"), "unexpected: {message}");

    let body: ApiErrorBody = serde_json::from_value(json!({})).expect("body");
    assert!(body.message().is_none());
}

#[test]
fn assessment_id_parse_rejects_blank_values() {
    assert_eq!(
        AssessmentId::parse("  abc-123 ").expect("id"),
        AssessmentId::from("abc-123")
    );
    assert_eq!(
        AssessmentId::parse("   "),
        Err(ContractError::EmptyAssessmentId)
    );
}

#[test]
fn health_status_keeps_extra_fields() {
    let health: HealthStatus =
        serde_json::from_value(json!({"status": "healthy", "version": "1.2"})).expect("health");
    assert!(health.is_healthy());
    assert_eq!(health.extra.get("version"), Some(&json!("1.2")));
}
