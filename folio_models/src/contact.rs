use nutype::nutype;

use crate::{
    email_address::{EmailAddress, EmailAddressWithName},
    sanitize::{multi_line, single_line},
};

/// A contact form submission exactly as it was received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed validation. All fields are sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

impl ContactMessageAuthor {
    /// The author as `Name <email>`, suitable for a `Reply-To` header.
    pub fn mailbox(&self) -> EmailAddressWithName {
        self.email.clone().with_name(self.name.clone().into_inner())
    }
}

#[nutype(
    sanitize(with = |s: String| single_line(&s)),
    validate(len_char_min = 2, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    sanitize(with = |s: String| single_line(&s)),
    validate(len_char_min = 3, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    sanitize(with = |s: String| multi_line(&s)),
    validate(len_char_min = 10, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactValidationError {
    pub field: ContactField,
    pub message: &'static str,
}

/// All rule violations of a rejected submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactValidationErrors(Vec<ContactValidationError>);

impl ContactValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactValidationError> {
        self.0.iter()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|error| error.message)
    }

    fn push(&mut self, field: ContactField, message: &'static str) {
        self.0.push(ContactValidationError { field, message });
    }
}

struct TextRule {
    field: ContactField,
    min: usize,
    empty: &'static str,
    too_short: &'static str,
    too_long: &'static str,
}

const NAME_RULE: TextRule = TextRule {
    field: ContactField::Name,
    min: 2,
    empty: "Please enter your name.",
    too_short: "Name must be at least 2 characters.",
    too_long: "Name must be at most 256 characters.",
};

const SUBJECT_RULE: TextRule = TextRule {
    field: ContactField::Subject,
    min: 3,
    empty: "Please enter a subject.",
    too_short: "Subject must be at least 3 characters.",
    too_long: "Subject must be at most 256 characters.",
};

const MESSAGE_RULE: TextRule = TextRule {
    field: ContactField::Message,
    min: 10,
    empty: "Please enter your message.",
    too_short: "Message must be at least 10 characters.",
    too_long: "Message must be at most 4096 characters.",
};

impl TextRule {
    fn check<T, E>(
        &self,
        errors: &mut ContactValidationErrors,
        sanitized: String,
        new: impl FnOnce(String) -> Result<T, E>,
    ) -> Option<T> {
        if sanitized.is_empty() {
            errors.push(self.field, self.empty);
            return None;
        }

        let too_short = sanitized.chars().count() < self.min;
        new(sanitized)
            .inspect_err(|_| {
                let message = if too_short {
                    self.too_short
                } else {
                    self.too_long
                };
                errors.push(self.field, message);
            })
            .ok()
    }
}

impl ContactSubmission {
    /// Checks every field against its rule. Violations are collected for all
    /// fields instead of stopping at the first one.
    pub fn validate(&self) -> Result<ContactMessage, ContactValidationErrors> {
        let mut errors = ContactValidationErrors::default();

        let name = NAME_RULE.check(
            &mut errors,
            single_line(&self.name),
            ContactMessageAuthorName::try_new,
        );

        let email = single_line(&self.email);
        let email = if email.is_empty() {
            errors.push(ContactField::Email, "Please enter your email address.");
            None
        } else {
            email
                .parse::<EmailAddress>()
                .inspect_err(|_| {
                    errors.push(ContactField::Email, "Please enter a valid email address.")
                })
                .ok()
        };

        let subject = SUBJECT_RULE.check(
            &mut errors,
            single_line(&self.subject),
            ContactMessageSubject::try_new,
        );

        let content = MESSAGE_RULE.check(
            &mut errors,
            multi_line(&self.message),
            ContactMessageContent::try_new,
        );

        match (name, email, subject, content) {
            (Some(name), Some(email), Some(subject), Some(content)) if errors.is_empty() => {
                Ok(ContactMessage {
                    author: ContactMessageAuthor { name, email },
                    subject,
                    content,
                })
            }
            _ => Err(errors),
        }
    }
}
