use super::error::DomainError;

pub(crate) const MIN_USERNAME_CHARS: usize = 3;
pub(crate) const MIN_PASSWORD_CHARS: usize = 3;

/// A blog as listed under its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlogSummary {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: Option<String>,
    pub(crate) blogs: Vec<BlogSummary>,
}

/// A user without their blogs; enough for login and token checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserAccount {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RegisterRequest {
    pub(crate) username: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) password: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Registration {
    pub(crate) username: String,
    pub(crate) name: Option<String>,
    pub(crate) password: String,
}

impl RegisterRequest {
    /// Password rules are reported before username rules.
    pub(crate) fn validate(self) -> Result<Registration, DomainError> {
        let password = self.password.unwrap_or_default();
        if password.is_empty() {
            return Err(DomainError::Validation {
                field: "password",
                message: "is required",
            });
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(DomainError::Validation {
                field: "password",
                message: "must be at least 3 characters long",
            });
        }

        let username = self.username.unwrap_or_default().trim().to_string();
        if username.is_empty() {
            return Err(DomainError::Validation {
                field: "username",
                message: "is required",
            });
        }
        if username.chars().count() < MIN_USERNAME_CHARS {
            return Err(DomainError::Validation {
                field: "username",
                message: "must be at least 3 characters long",
            });
        }

        let name = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Registration {
            username,
            name,
            password,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl LoginRequest {
    /// Anything unusable is reported as bad credentials, never as a field error.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(DomainError::InvalidCredentials);
        }
        Ok(Self {
            username: username.to_string(),
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DomainError, LoginRequest, RegisterRequest};

    fn register(username: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            username: username.map(str::to_string),
            name: Some("Superuser".to_string()),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn missing_password_is_reported_first() {
        let err = register(Some("ju"), None)
            .validate()
            .expect_err("password is required");
        assert_eq!(err.to_string(), "password is required");
    }

    #[test]
    fn short_password_is_rejected() {
        let err = register(Some("just"), Some("oo"))
            .validate()
            .expect_err("password too short");
        assert_eq!(err.to_string(), "password must be at least 3 characters long");
    }

    #[test]
    fn short_username_is_rejected() {
        let err = register(Some("ju"), Some("oorrrr"))
            .validate()
            .expect_err("username too short");
        assert_eq!(err.to_string(), "username must be at least 3 characters long");
    }

    #[test]
    fn missing_username_is_rejected() {
        let err = register(None, Some("oorrrr"))
            .validate()
            .expect_err("username is required");
        assert_eq!(err.to_string(), "username is required");
    }

    #[test]
    fn valid_registration_trims_username_and_drops_blank_name() {
        let registration = RegisterRequest {
            username: Some("  Seviche  ".to_string()),
            name: Some("  ".to_string()),
            password: Some("okbyby".to_string()),
        }
        .validate()
        .expect("must validate");

        assert_eq!(registration.username, "Seviche");
        assert_eq!(registration.name, None);
        assert_eq!(registration.password, "okbyby");
    }

    #[test]
    fn login_with_blank_fields_is_invalid_credentials() {
        let err = LoginRequest {
            username: "  ".to_string(),
            password: "secret".to_string(),
        }
        .validate()
        .expect_err("blank username must fail");
        assert!(matches!(err, DomainError::InvalidCredentials));
    }
}
