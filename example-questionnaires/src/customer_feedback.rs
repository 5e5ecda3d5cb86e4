use questionnaire::{ItemCandidate, Questionnaire};

/// Candidate records for a short customer feedback form.
pub fn customer_feedback_candidates() -> Vec<ItemCandidate> {
    vec![
        ItemCandidate::new("text", "What is your name?"),
        ItemCandidate::new("radio", "How did you hear about us?")
            .with_texts(["Search engine", "A friend", "Advertisement"])
            .with_values(["search", "referral", "ad"]),
        ItemCandidate::new("checkbox", "Which products do you use?")
            .with_texts(["Desktop app", "Mobile app", "Web app"]),
        ItemCandidate::new("scale", "How satisfied are you overall?")
            .with_texts(["1", "2", "3", "4", "5"])
            .with_values([1, 2, 3, 4, 5]),
    ]
}

/// The customer feedback form, validated.
pub fn customer_feedback() -> anyhow::Result<Questionnaire> {
    Ok(Questionnaire::from_candidates(
        customer_feedback_candidates(),
    )?)
}
