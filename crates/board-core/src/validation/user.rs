//! User creation payload validation

use serde_json::Value;

use super::errors::ValidationErrors;
use super::{INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE};

/// Column limit shared by first_name, last_name, and email
pub const MAX_FIELD_CHARS: usize = 100;

const FIELDS: [&str; 3] = ["first_name", "last_name", "email"];

/// Validated user-creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Outcome of the pure field checks for user creation.
///
/// `email` is populated whenever the email type check passed, even if other
/// fields failed, so the service layer can still run the uniqueness lookup
/// and report `invalid_email` alongside the field errors.
#[derive(Debug)]
pub struct UserCheck {
    pub errors: ValidationErrors,
    pub email: Option<String>,
    fields: Option<NewUser>,
}

impl UserCheck {
    /// Record that the email is already taken
    pub fn reject_email_taken(&mut self) {
        self.errors
            .insert("invalid_email", "user with such email already exists");
    }

    /// Finish validation: the request struct is only handed out when no
    /// error was recorded, by this check or merged in afterwards.
    pub fn finish(self) -> Result<NewUser, ValidationErrors> {
        match self.fields {
            Some(fields) if self.errors.is_empty() => Ok(fields),
            _ => Err(self.errors),
        }
    }
}

/// Run the pure field checks for a user-creation payload.
///
/// A missing required key short-circuits with a single `invalid_json_format`
/// error; no further checks run. Otherwise type and length errors for
/// different fields are all collected into one mapping.
pub fn check_new_user(payload: &Value) -> UserCheck {
    let mut errors = ValidationErrors::new();

    let values: Vec<&Value> = match FIELDS.iter().map(|name| payload.get(name)).collect() {
        Some(values) => values,
        None => {
            errors.insert(INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE);
            return UserCheck {
                errors,
                email: None,
                fields: None,
            };
        }
    };

    for (value, name) in values.iter().zip(FIELDS) {
        if !value.is_string() {
            errors.insert(
                format!("invalid_{name}_type"),
                format!("{name} should be a string"),
            );
        }
    }

    for (value, name) in values.iter().zip(FIELDS) {
        if let Some(s) = value.as_str() {
            if s.chars().count() > MAX_FIELD_CHARS {
                errors.insert(
                    format!("invalid_{name}_length"),
                    format!("{name} should be less than {MAX_FIELD_CHARS} characters long"),
                );
            }
        }
    }

    let email = values[2].as_str().map(str::to_owned);
    if let Some(s) = &email {
        if !email_format_is_valid(s) {
            errors.insert("invalid_email_format", "email format is invalid");
        }
    }

    let fields = if errors.is_empty() {
        // All three are strings here, presence and types already checked
        Some(NewUser {
            first_name: values[0].as_str().unwrap_or_default().to_owned(),
            last_name: values[1].as_str().unwrap_or_default().to_owned(),
            email: values[2].as_str().unwrap_or_default().to_owned(),
        })
    } else {
        None
    };

    UserCheck {
        errors,
        email,
        fields,
    }
}

/// Basic `local@domain.tld` shape check
fn email_format_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
