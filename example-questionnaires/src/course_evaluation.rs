use questionnaire::Questionnaire;

/// An end-of-course evaluation as plain JSON records.
pub const COURSE_EVALUATION_JSON: &str = r#"[
    {
        "type": "scale",
        "title": "The course met my expectations",
        "optTexts": ["Strongly disagree", "Disagree", "Neutral", "Agree", "Strongly agree"],
        "optValues": [1, 2, 3, 4, 5]
    },
    {
        "type": "radio",
        "title": "Would you recommend this course?",
        "optTexts": ["Yes", "No"],
        "optValues": [true, false]
    },
    {
        "type": "checkbox",
        "title": "Which sessions did you attend?",
        "optTexts": ["Week 1", "Week 2", "Week 3", "Week 4"]
    },
    {
        "type": "text",
        "title": "Anything else?"
    }
]"#;

/// The course evaluation, parsed and validated.
pub fn course_evaluation() -> anyhow::Result<Questionnaire> {
    Ok(Questionnaire::from_json_str(COURSE_EVALUATION_JSON)?)
}
