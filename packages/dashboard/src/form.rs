//! Create-form fields and their validation.

use api::models::{is_valid_age, is_valid_email, is_valid_name};
use api::NewStudent;
use thiserror::Error;

/// Why a form could not be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Age must be a valid number, got '{0}'")]
    InvalidAge(String),

    #[error("Age must be between 5 and 120, got {0}")]
    AgeOutOfRange(i64),

    #[error("Name must be between 2 and 100 characters")]
    InvalidName,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Raw text of the create form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub email: String,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the fields and build the request body.
    ///
    /// Empty fields are reported first (in form order), then an unparsable age,
    /// then the rules the service itself enforces.
    pub fn validate(&self) -> Result<NewStudent, ValidationError> {
        let name = self.name.trim();
        let age = self.age.trim();
        let email = self.email.trim();

        for (label, value) in [("name", name), ("age", age), ("email", email)] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(label));
            }
        }

        let age: i64 = age
            .parse()
            .map_err(|_| ValidationError::InvalidAge(age.to_string()))?;

        if !is_valid_name(name) {
            return Err(ValidationError::InvalidName);
        }
        if !is_valid_age(age) {
            return Err(ValidationError::AgeOutOfRange(age));
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let age = u32::try_from(age).map_err(|_| ValidationError::AgeOutOfRange(age))?;
        Ok(NewStudent {
            name: name.to_string(),
            age,
            email: email.to_string(),
        })
    }

    /// Reset every field after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, age: &str, email: &str) -> StudentForm {
        StudentForm {
            name: name.into(),
            age: age.into(),
            email: email.into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let data = form("  Ada Lovelace ", " 21", "ada@example.com")
            .validate()
            .unwrap();
        assert_eq!(
            data,
            NewStudent {
                name: "Ada Lovelace".into(),
                age: 21,
                email: "ada@example.com".into(),
            }
        );
    }

    #[test]
    fn test_missing_fields_in_order() {
        assert_eq!(
            form("", "", "").validate(),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            form("Ada", "  ", "").validate(),
            Err(ValidationError::MissingField("age"))
        );
        assert_eq!(
            form("Ada", "21", "").validate(),
            Err(ValidationError::MissingField("email"))
        );
    }

    #[test]
    fn test_age_must_be_a_number() {
        assert_eq!(
            form("Ada", "twenty", "ada@example.com").validate(),
            Err(ValidationError::InvalidAge("twenty".into()))
        );
    }

    #[test]
    fn test_service_rules() {
        assert_eq!(
            form("A", "21", "ada@example.com").validate(),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            form("Ada", "-3", "ada@example.com").validate(),
            Err(ValidationError::AgeOutOfRange(-3))
        );
        assert_eq!(
            form("Ada", "121", "ada@example.com").validate(),
            Err(ValidationError::AgeOutOfRange(121))
        );
        assert_eq!(
            form("Ada", "21", "ada.example.com").validate(),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_clear() {
        let mut f = form("Ada", "21", "ada@example.com");
        f.clear();
        assert_eq!(f, StudentForm::new());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField("email").to_string(),
            "Please fill in the email field"
        );
        assert_eq!(
            ValidationError::AgeOutOfRange(200).to_string(),
            "Age must be between 5 and 120, got 200"
        );
    }
}
