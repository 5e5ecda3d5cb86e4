//! Prints the course evaluation as a plain text form and fills it in.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p example-questionnaires --example plain_text -- zh-CN
//! ```

use example_questionnaires::course_evaluation;
use questionnaire::{Item, ItemKind, Locale, LocaleTable, MessageKey, ScriptedRespondent};

fn render(item: &Item, table: &LocaleTable, locale: Locale) -> anyhow::Result<String> {
    let mut out = format!("{} [{}]\n", item.title(), item.kind());
    if item.kind() == ItemKind::Text {
        out.push_str(&format!("  ({})\n", table.get(locale, MessageKey::Input)?));
    }
    for option in item.options() {
        out.push_str(&format!("  {}. {} = {}\n", option.index + 1, option.text, option.value));
    }
    if item.kind() == ItemKind::Checkbox {
        let hint = table.format(
            locale,
            MessageKey::CheckboxOutOfRange,
            &[1, item.opt_texts().len()],
        )?;
        out.push_str(&format!("  {hint}\n"));
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let locale: Locale = match std::env::args().nth(1) {
        Some(code) => code.parse()?,
        None => Locale::default(),
    };
    let table = LocaleTable::builtin()?;

    let mut questionnaire = course_evaluation()?;
    log::info!("rendering {} item(s) in {locale}", questionnaire.len());

    println!("{}\n", table.get(locale, MessageKey::Loading)?);
    for item in &questionnaire {
        println!("{}", render(item, table, locale)?);
    }
    println!(
        "[{}] [{}]\n",
        table.get(locale, MessageKey::Back)?,
        table.get(locale, MessageKey::Submit)?
    );

    questionnaire.collect(
        &ScriptedRespondent::new()
            .with_option("The course met my expectations", 4)
            .with_option("Would you recommend this course?", 0)
            .with_options("Which sessions did you attend?", [0, 2]),
    )?;

    for item in &questionnaire {
        match item.response() {
            Some(response) => println!("{}: {response:?}", item.title()),
            None => println!("{}: {}", item.title(), table.get(locale, MessageKey::Required)?),
        }
    }
    Ok(())
}
