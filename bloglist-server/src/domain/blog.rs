use super::error::DomainError;

/// The user a blog belongs to, as shown next to the blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlogOwner {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Blog {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
    pub(crate) user: Option<BlogOwner>,
}

/// Blog fields as they arrive from a client, before validation.
#[derive(Debug, Clone, Default)]
pub(crate) struct BlogInput {
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) likes: Option<i64>,
}

/// Validated blog fields, used both for creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlogFields {
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
}

impl BlogInput {
    pub(crate) fn validate(self) -> Result<BlogFields, DomainError> {
        let title = required_text("title", self.title)?;
        let url = required_text("url", self.url)?;
        let likes = self.likes.unwrap_or(0);
        if likes < 0 {
            return Err(DomainError::Validation {
                field: "likes",
                message: "must be a non-negative integer",
            });
        }

        Ok(BlogFields {
            title,
            author: optional_text(self.author),
            url,
            likes,
        })
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    optional_text(value).ok_or(DomainError::Validation {
        field,
        message: "is required",
    })
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{BlogInput, DomainError};

    fn input(title: Option<&str>, url: Option<&str>, likes: Option<i64>) -> BlogInput {
        BlogInput {
            title: title.map(str::to_string),
            author: Some("Michael Chan".to_string()),
            url: url.map(str::to_string),
            likes,
        }
    }

    #[test]
    fn missing_likes_defaults_to_zero() {
        let fields = input(Some("React patterns"), Some("https://reactpatterns.com/"), None)
            .validate()
            .expect("must validate");
        assert_eq!(fields.likes, 0);
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = input(None, Some("https://reactpatterns.com/"), Some(7))
            .validate()
            .expect_err("title is required");
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn blank_url_is_rejected() {
        let err = input(Some("React patterns"), Some("   "), Some(7))
            .validate()
            .expect_err("url is required");
        assert_validation_field(err, "url");
    }

    #[test]
    fn negative_likes_are_rejected() {
        let err = input(Some("React patterns"), Some("https://reactpatterns.com/"), Some(-1))
            .validate()
            .expect_err("likes must be >= 0");
        assert_validation_field(err, "likes");
    }

    #[test]
    fn fields_are_trimmed_and_blank_author_dropped() {
        let fields = BlogInput {
            title: Some("  Go To Statement Considered Harmful ".to_string()),
            author: Some("   ".to_string()),
            url: Some(" http://example.com ".to_string()),
            likes: Some(5),
        }
        .validate()
        .expect("must validate");

        assert_eq!(fields.title, "Go To Statement Considered Harmful");
        assert_eq!(fields.author, None);
        assert_eq!(fields.url, "http://example.com");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
