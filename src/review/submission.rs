use super::rating::Rating;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of an inbound review POST.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Submission {
    #[serde(deserialize_with = "null_as_default")]
    pub recaptcha: Recaptcha,
    #[serde(deserialize_with = "null_as_default")]
    pub details: ReviewDetails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Recaptcha {
    #[serde(deserialize_with = "lenient_string")]
    pub token: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub course: String,
    #[serde(deserialize_with = "lenient_string")]
    pub user: String,
    #[serde(deserialize_with = "lenient_string")]
    pub review: String,
    #[serde(deserialize_with = "lenient_string")]
    pub reference: String,
    pub difficulty: Option<Value>,
    pub quality: Option<Value>,
    #[serde(deserialize_with = "lenient_string")]
    pub session_taken: String,
}

/// `null` reads as the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strings as-is, numbers and booleans in their JSON form, anything else empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        value @ (Value::Number(_) | Value::Bool(_)) => value.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

impl ReviewDetails {
    pub fn difficulty(&self) -> Option<Rating> {
        Rating::from_value(self.difficulty.as_ref())
    }

    pub fn quality(&self) -> Option<Rating> {
        Rating::from_value(self.quality.as_ref())
    }

    /// Name of the field that violates the non-empty requirement, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.course.trim().is_empty() {
            Some("course")
        } else if self.user.trim().is_empty() {
            Some("user")
        } else {
            None
        }
    }

    /// File name stem for the course: lower-cased, whitespace removed.
    pub fn course_slug(&self) -> String {
        self.course
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_full_submission() {
        let body = r#"{
            "recaptcha": {"token": "tok"},
            "details": {
                "course": "CPSC 110",
                "user": "Alice",
                "review": "Great course",
                "reference": "https://example.com",
                "difficulty": "4",
                "quality": 10,
                "sessionTaken": "2023W1"
            }
        }"#;

        let submission: Submission = serde_json::from_str(body).unwrap();

        assert_eq!(submission.recaptcha.token, "tok");
        assert_eq!(submission.details.course, "CPSC 110");
        assert_eq!(submission.details.session_taken, "2023W1");
        assert_eq!(submission.details.difficulty(), Some(Rating::clamped(4.0)));
        assert_eq!(submission.details.quality(), Some(Rating::clamped(5.0)));
    }

    #[test]
    fn should_default_missing_fields() {
        let submission: Submission = serde_json::from_str("{}").unwrap();

        assert!(submission.recaptcha.token.is_empty());
        assert_eq!(submission.details.missing_field(), Some("course"));
        assert_eq!(submission.details.difficulty(), None);
    }

    #[test]
    fn should_accept_null_and_numeric_fields() {
        let body = r#"{
            "recaptcha": {"token": null},
            "details": {
                "course": 110,
                "user": "Alice",
                "review": "ok",
                "reference": null,
                "sessionTaken": null
            }
        }"#;

        let submission: Submission = serde_json::from_str(body).unwrap();

        assert!(submission.recaptcha.token.is_empty());
        assert_eq!(submission.details.course, "110");
        assert!(submission.details.reference.is_empty());
        assert!(submission.details.session_taken.is_empty());
        assert_eq!(submission.details.missing_field(), None);
    }

    #[test]
    fn should_default_null_sections() {
        let submission: Submission =
            serde_json::from_str(r#"{"recaptcha": null, "details": null}"#).unwrap();

        assert!(submission.recaptcha.token.is_empty());
        assert_eq!(submission.details.missing_field(), Some("course"));
    }

    #[test]
    fn should_require_user() {
        let details = ReviewDetails {
            course: "CPSC 110".to_owned(),
            user: "  ".to_owned(),
            ..Default::default()
        };

        assert_eq!(details.missing_field(), Some("user"));
    }

    #[test]
    fn should_build_course_slug() {
        let details = ReviewDetails {
            course: "CPSC 110".to_owned(),
            ..Default::default()
        };
        assert_eq!(details.course_slug(), "cpsc110");

        let details = ReviewDetails {
            course: " Math\t221 / Honours? ".to_owned(),
            ..Default::default()
        };
        assert_eq!(details.course_slug(), "math221honours");
    }
}
