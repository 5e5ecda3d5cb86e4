use crate::{Item, Response};

/// Trait for whatever collects answers from a respondent.
///
/// A renderer (CLI prompt, web form, test script) implements this and is
/// asked once per item. It decides how the item is presented.
pub trait Respondent {
    /// The error type for this respondent.
    type Error: Into<anyhow::Error>;

    /// Ask the respondent to answer an item.
    ///
    /// # Returns
    /// * `Ok(Some(response))` if the item was answered
    /// * `Ok(None)` if the respondent skipped it
    /// * `Err` on cancellation or failure
    fn answer(&self, item: &Item) -> Result<Option<Response>, Self::Error>;
}
