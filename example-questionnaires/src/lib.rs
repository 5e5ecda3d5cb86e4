pub mod course_evaluation;
pub mod customer_feedback;

// Re-export course_evaluation items
pub use course_evaluation::{COURSE_EVALUATION_JSON, course_evaluation};

// Re-export customer_feedback items
pub use customer_feedback::{customer_feedback, customer_feedback_candidates};
