use crate::validation::{ValidationError, check_non_negative, check_text};
use serde::{Deserialize, Serialize};

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;
pub const CPF_LEN: usize = 11;

/// The editable fields of a student, excluding the course assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub cpf: String,
}

impl StudentFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("first_name", &self.first_name, NAME_MAX_LEN, true)?;
        check_text("last_name", &self.last_name, NAME_MAX_LEN, true)?;
        check_text("email", &self.email, EMAIL_MAX_LEN, true)?;
        if !self.email.contains('@') {
            return Err(ValidationError::new("email", "must be an email address"));
        }
        check_non_negative("age", self.age)?;
        validate_cpf(&self.cpf)
    }
}

/// A CPF is stored unformatted: exactly 11 digits, no dots or dashes
pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.len() != CPF_LEN || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            "cpf",
            format!("must be exactly {CPF_LEN} digits"),
        ));
    }
    Ok(())
}
