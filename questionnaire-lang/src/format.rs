use std::fmt;

use crate::LangError;

const PLACEHOLDER: &str = "%d";

/// Count the `%d` placeholders in a template.
pub(crate) fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

/// Substitute positional `%d` placeholders in order.
///
/// The number of arguments must equal the number of placeholders.
///
/// ```
/// use questionnaire_lang::format_template;
///
/// let text = format_template("Pick %d to %d", &[1, 3]).unwrap();
/// assert_eq!(text, "Pick 1 to 3");
/// ```
pub fn format_template<T: fmt::Display>(template: &str, args: &[T]) -> Result<String, LangError> {
    let expected = placeholder_count(template);
    if expected != args.len() {
        return Err(LangError::PlaceholderArity {
            expected,
            given: args.len(),
        });
    }

    let mut parts = template.split(PLACEHOLDER);
    let mut out = String::with_capacity(template.len());
    out.push_str(parts.next().unwrap_or_default());
    for (arg, part) in args.iter().zip(parts) {
        out.push_str(&arg.to_string());
        out.push_str(part);
    }
    Ok(out)
}
