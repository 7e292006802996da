//! Minimum-requirement validation.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{CharClass, class_counts};
use crate::error::{PasswordError, Requirement};

/// Requirements checked by [`validate_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub min_length: usize,
    pub require_all_classes: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_all_classes: true,
        }
    }
}

/// Checks a password against `policy`.
///
/// Requirements are checked in a fixed order (length, lowercase, uppercase,
/// digit, symbol) and the first one that fails is reported.
pub fn validate_password(
    password: &SecretString,
    policy: &ValidationPolicy,
) -> Result<(), PasswordError> {
    let pwd = password.expose_secret();
    if pwd.chars().count() < policy.min_length {
        return Err(Requirement::MinLength(policy.min_length).into());
    }

    if policy.require_all_classes {
        let counts = class_counts(pwd);
        if let Some((class, _)) = CharClass::ALL
            .into_iter()
            .zip(counts)
            .find(|&(_, count)| count == 0)
        {
            return Err(Requirement::from(class).into());
        }
    }

    Ok(())
}
