use handlebars::{no_escape, Handlebars, TemplateError};

pub const REVIEW_ENTRY_TEMPLATE: &str = "review_entry";
pub const REVIEW_BODY_TEMPLATE: &str = "review_body";

pub fn handlebars() -> Result<Handlebars<'static>, TemplateError> {
    let mut hb = Handlebars::new();

    // output is Markdown and YAML, never HTML
    hb.register_escape_fn(no_escape);

    hb.register_template_string(REVIEW_ENTRY_TEMPLATE, include_str!("./review_entry.hbs"))?;
    hb.register_template_string(REVIEW_BODY_TEMPLATE, include_str!("./review_body.hbs"))?;

    Ok(hb)
}
