//! Contact Form Validation
//!
//! Pure field validation for the contact form. All fields are checked
//! independently on submit so every error surfaces at once; editing a
//! field clears only that field's error.

/// Simulated network latency for the fake submission
pub const SUBMIT_DELAY_MS: u32 = 2_000;
/// How long the success banner stays up before auto-clearing
pub const SUCCESS_VISIBLE_MS: u32 = 5_000;

/// Contact form fields, addressed by variant instead of string keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Current form field values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

/// Per-field validation errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }
}

/// Validate every field independently.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }
    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_plausible_email(email) {
        errors.email = Some("Email is invalid");
    }
    if form.subject.trim().is_empty() {
        errors.subject = Some("Subject is required");
    }
    if form.message.trim().is_empty() {
        errors.message = Some("Message is required");
    }

    errors
}

/// Basic something@something.something shape, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Collaboration".into(),
            message: "Let's build something.".into(),
        }
    }

    #[test]
    fn empty_form_surfaces_all_four_errors_at_once() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.subject, Some("Subject is required"));
        assert_eq!(errors.message, Some("Message is required"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set(Field::Name, "   ".into());
        let errors = validate(&form);
        assert_eq!(errors.name, Some("Name is required"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn malformed_email_yields_exactly_the_email_error() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email".into());
        let errors = validate(&form);
        assert_eq!(errors.email, Some("Email is invalid"));
        assert!(errors.name.is_none());
        assert!(errors.subject.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn email_shape_edge_cases() {
        for bad in ["@example.com", "ada@", "ada@example", "ada@.com", "ada@com.", "a b@c.d"] {
            assert!(!is_plausible_email(bad), "{bad:?} should be rejected");
        }
        for good in ["ada@example.com", "a@b.c", "first.last@sub.domain.org"] {
            assert!(is_plausible_email(good), "{good:?} should be accepted");
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut errors = validate(&ContactForm::default());
        errors.clear(Field::Email);
        assert!(errors.email.is_none());
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.subject, Some("Subject is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }
}
