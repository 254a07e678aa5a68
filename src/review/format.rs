use super::{
    submission::ReviewDetails,
    template::{self, REVIEW_BODY_TEMPLATE, REVIEW_ENTRY_TEMPLATE},
};
use chrono::{DateTime, Utc};
use handlebars::{html_escape, Handlebars, RenderError, TemplateError};
use serde::Serialize;
use serde_json::Value;

const REVIEW_INDENT: &str = "    ";

/// Everything derived from one submission that ends up on GitHub.
#[derive(Debug, Clone)]
pub struct FormattedReview {
    pub title: String,
    pub body: String,
    /// One `reviews:` list item, newline terminated.
    pub entry: String,
    pub commit_message: String,
}

#[derive(Serialize)]
struct EntryContext {
    author: String,
    author_link: String,
    date: String,
    review: String,
    difficulty: Option<String>,
    quality: Option<String>,
    session_taken: String,
}

#[derive(Serialize)]
struct BodyContext<'a> {
    quoted_review: String,
    difficulty: Option<String>,
    quality: Option<String>,
    reference: String,
    user: String,
    cited_date: String,
    session_taken: &'a str,
    entry: &'a str,
}

pub struct Formatter {
    hb: Handlebars<'static>,
}

impl Formatter {
    pub fn new() -> Result<Self, TemplateError> {
        Ok(Formatter {
            hb: template::handlebars()?,
        })
    }

    pub fn format(
        &self,
        details: &ReviewDetails,
        now: DateTime<Utc>,
    ) -> Result<FormattedReview, RenderError> {
        let difficulty = details.difficulty().map(|r| r.to_string());
        let quality = details.quality().map(|r| r.to_string());
        let review = normalize(&details.review).trim_end_matches('\n').to_owned();

        let entry = self.hb.render(
            REVIEW_ENTRY_TEMPLATE,
            &EntryContext {
                author: yaml_quoted(&details.user),
                author_link: yaml_quoted(&details.reference),
                date: now.format("%Y-%m-%d").to_string(),
                review: review.replace('\n', &format!("\n{}", REVIEW_INDENT)),
                difficulty: difficulty.clone(),
                quality: quality.clone(),
                session_taken: yaml_quoted(&details.session_taken),
            },
        )?;

        let body = self.hb.render(
            REVIEW_BODY_TEMPLATE,
            &BodyContext {
                quoted_review: quote(&review),
                difficulty,
                quality,
                reference: html_escape(&details.reference),
                user: html_escape(&details.user),
                cited_date: now.format("%b %d %Y").to_string(),
                session_taken: &details.session_taken,
                entry: &entry,
            },
        )?;

        Ok(FormattedReview {
            title: format!("New review for {} by {}", details.course, details.user),
            body,
            entry,
            commit_message: format!("Add review for {}", details.course),
        })
    }
}

/// Unix newlines, no control characters other than tab and newline.
/// Unicode line and paragraph separators become newlines since YAML
/// scanners break lines on them; byte order marks are dropped.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .filter_map(|c| match c {
            '\u{2028}' | '\u{2029}' => Some('\n'),
            '\u{feff}' => None,
            '\n' | '\t' => Some(c),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

fn quote(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON string literals are valid YAML double-quoted scalars.
fn yaml_quoted(text: &str) -> String {
    Value::String(normalize(text)).to_string()
}
