use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::{PostData, PostStatus, User};

// `Validate` trait: callers check these rules before dispatching anything,
// so a rejected form never reaches the gateways.

/// Registration form payload.
#[derive(Debug, Clone, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = required_email_domain, message = "Email not valid must end with .com"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = password, message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Login form payload.
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Post editor payload. `publish` resolves to the published/draft status.
#[derive(Debug, Clone, Default, Validate, Deserialize)]
pub struct PostInput {
    #[validate(custom(function = not_blank, message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = not_blank, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub publish: bool,
}

impl PostInput {
    /// Attach the author's identity and resolve the publish flag, producing
    /// the record handed to the document store.
    pub fn into_post_data(self, author: &User) -> PostData {
        let mut extra = BTreeMap::new();
        extra.insert(
            "authorEmail".to_string(),
            serde_json::Value::String(author.email.clone()),
        );

        PostData {
            title: self.title,
            content: self.content,
            author_id: author.uid.clone(),
            author_name: author.display_name().to_string(),
            status: Some(PostStatus::from_publish(self.publish)),
            publish: self.publish,
            extra,
        }
    }
}

fn required_email_domain(email: &str) -> Result<(), ValidationError> {
    if email.ends_with(".com") {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain"))
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn signup() -> SignUpRequest {
        SignUpRequest {
            name: "New User".to_string(),
            email: "newuser@example.com".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
        }
    }

    fn author() -> User {
        User {
            uid: "user1".to_string(),
            name: None,
            email: "maha@example.com".to_string(),
            created_at: Utc::now(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn valid_signup_passes() {
        assert!(signup().validate().is_ok());
    }

    #[test]
    fn signup_rejects_emails_outside_the_domain() {
        let mut form = signup();
        form.email = "newuser@example.org".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn signup_rejects_short_passwords() {
        let mut form = signup();
        form.password = "12345".to_string();
        form.confirm_password = "12345".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn signup_rejects_mismatched_confirmation() {
        let mut form = signup();
        form.confirm_password = "different-password".to_string();
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(
            fields["confirm_password"][0].message.as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn post_input_rejects_blank_fields() {
        let form = PostInput {
            title: "   ".to_string(),
            content: String::new(),
            publish: false,
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
    }

    #[test]
    fn post_input_resolves_author_and_status() {
        let form = PostInput {
            title: "First".to_string(),
            content: "Body".to_string(),
            publish: true,
        };
        let data = form.into_post_data(&author());
        assert_eq!(data.author_id, "user1");
        assert_eq!(data.author_name, "maha");
        assert_eq!(data.status, Some(PostStatus::Published));
        assert_eq!(
            data.extra["authorEmail"],
            serde_json::json!("maha@example.com")
        );
    }
}
