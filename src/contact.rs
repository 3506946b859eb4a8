use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const NAME_MAX_CHARS: usize = 100;
pub const COMPANY_MAX_CHARS: usize = 100;
pub const MESSAGE_MAX_CHARS: usize = 2_000;
pub const EMAIL_MAX_CHARS: usize = 254;
/// Stand-in for the network round trip of a real submission.
pub const SIMULATED_LATENCY_MS: u32 = 1_000;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*\.[a-zA-Z]{2,63}$",
    )
    .expect("static pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    General,
    Project,
    Partnership,
    Careers,
    Press,
}

impl Reason {
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Project,
        Self::Partnership,
        Self::Careers,
        Self::Press,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Project => "project",
            Self::Partnership => "partnership",
            Self::Careers => "careers",
            Self::Press => "press",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General inquiry",
            Self::Project => "Start a project",
            Self::Partnership => "Partnership",
            Self::Careers => "Careers",
            Self::Press => "Press",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Inline errors, at most one per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, FieldError)>);

impl FieldErrors {
    fn push(&mut self, field: Field, error: FieldError) {
        self.0.push((field, error));
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, error)| error)
    }

    /// Typing into a field clears its error.
    pub fn clear(&mut self, field: Field) {
        self.0.retain(|(candidate, _)| *candidate != field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub reason: Reason,
    pub message: String,
    /// Decoy field hidden from people; anything typed here came from a bot.
    pub website: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            reason: Reason::General,
            message: String::new(),
            website: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub reason: Reason,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Dispatch(ContactPayload),
    /// Decoy was filled: show success, send nothing.
    Discarded,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Some(error) = check_length(Field::Name, &self.name, NAME_MIN_CHARS, NAME_MAX_CHARS) {
            errors.push(Field::Name, error);
        }

        if self.email.trim().is_empty() {
            errors.push(Field::Email, FieldError::Required(Field::Email));
        } else if !is_valid_email(self.email.trim()) {
            errors.push(Field::Email, FieldError::InvalidEmail);
        }

        if self.company.trim().chars().count() > COMPANY_MAX_CHARS {
            errors.push(
                Field::Company,
                FieldError::TooLong {
                    field: Field::Company,
                    max: COMPANY_MAX_CHARS,
                },
            );
        }

        if let Some(error) =
            check_length(Field::Message, &self.message, MESSAGE_MIN_CHARS, MESSAGE_MAX_CHARS)
        {
            errors.push(Field::Message, error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn submit(&self) -> Result<Submission, FieldErrors> {
        self.validate()?;

        if !self.website.is_empty() {
            return Ok(Submission::Discarded);
        }

        Ok(Submission::Dispatch(ContactPayload {
            name: sanitize_input(&self.name),
            email: sanitize_input(&self.email),
            company: sanitize_input(&self.company),
            reason: self.reason,
            message: sanitize_input(&self.message),
        }))
    }
}

fn check_length(field: Field, value: &str, min: usize, max: usize) -> Option<FieldError> {
    let value = value.trim();
    let count = value.chars().count();
    if value.is_empty() {
        Some(FieldError::Required(field))
    } else if count < min {
        Some(FieldError::TooShort { field, min })
    } else if count > max {
        Some(FieldError::TooLong { field, max })
    } else {
        None
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().count() > EMAIL_MAX_CHARS {
        return false;
    }
    if email.contains("..") || email.starts_with('.') || email.ends_with('.') {
        return false;
    }
    EMAIL.is_match(email)
}

/// Escapes markup-significant characters and trims surrounding whitespace.
pub fn sanitize_input(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.trim().chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            '`' => escaped.push_str("&#x60;"),
            '$' => escaped.push_str("&#x24;"),
            '\\' => escaped.push_str("&#x5C;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Lina Vesper".to_string(),
            email: "lina@70arc.co".to_string(),
            company: "70Arc".to_string(),
            reason: Reason::Project,
            message: "We need a weightless launch event.".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn email_without_tld_fails_and_with_tld_passes() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a..b@c.io"));
        assert!(!is_valid_email(".a@b.co"));
        assert!(!is_valid_email("a@b.c0"));

        let mut form = valid_form();
        form.email = "a@b".to_string();
        let errors = form.validate().expect_err("missing TLD");
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn short_message_gets_a_length_specific_error() {
        let mut form = valid_form();
        form.message = "Hi there".to_string();

        let errors = form.validate().expect_err("message too short");
        let error = errors.get(Field::Message).expect("message error");
        assert_eq!(
            error,
            &FieldError::TooShort {
                field: Field::Message,
                min: MESSAGE_MIN_CHARS
            }
        );
        assert_eq!(error.to_string(), "Message must be at least 10 characters");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate().expect_err("empty form");
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::Name).map(ToString::to_string).as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn overlong_fields_are_rejected_at_their_limits() {
        let mut form = valid_form();
        form.name = "n".repeat(NAME_MAX_CHARS);
        form.company = "c".repeat(COMPANY_MAX_CHARS);
        form.message = "m".repeat(MESSAGE_MAX_CHARS);
        assert_eq!(form.validate(), Ok(()));

        form.name.push('n');
        form.company.push('c');
        form.message.push('m');
        let errors = form.validate().expect_err("every field over its limit");
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::Company),
            Some(&FieldError::TooLong {
                field: Field::Company,
                max: COMPANY_MAX_CHARS
            })
        );
        assert_eq!(
            errors.get(Field::Message).map(ToString::to_string).as_deref(),
            Some("Message must be at most 2000 characters")
        );
        assert!(errors.get(Field::Name).is_some());
    }

    #[test]
    fn filled_decoy_is_accepted_but_nothing_is_dispatched() {
        let mut form = valid_form();
        form.website = "http://spam.example".to_string();

        assert_eq!(form.submit(), Ok(Submission::Discarded));
    }

    #[test]
    fn decoy_does_not_bypass_validation() {
        let mut form = valid_form();
        form.website = "bot".to_string();
        form.name = String::new();

        assert!(form.submit().is_err());
    }

    #[test]
    fn dispatched_payload_is_sanitised() {
        let mut form = valid_form();
        form.message = "  <script>alert('hi')</script>  ".to_string();

        let Ok(Submission::Dispatch(payload)) = form.submit() else {
            panic!("valid form should dispatch");
        };
        assert_eq!(
            payload.message,
            "&lt;script&gt;alert(&#x27;hi&#x27;)&lt;&#x2F;script&gt;"
        );
        assert_eq!(payload.reason, Reason::Project);
    }

    #[test]
    fn clearing_a_field_error_leaves_the_rest() {
        let mut errors = ContactForm::default().validate().expect_err("empty form");
        errors.clear(Field::Email);
        assert!(errors.get(Field::Email).is_none());
        assert_eq!(errors.len(), 2);
        assert_eq!(Reason::parse("press"), Some(Reason::Press));
    }
}
