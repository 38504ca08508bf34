use std::sync::LazyLock;

use regex::Regex;

static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is valid"));

pub const DEFAULT_ALLOWED_PROVIDERS: &[&str] = &["yahoo.com", "gmail.com", "outlook.com"];
pub const DEFAULT_DISPOSABLE_PROVIDERS: &[&str] = &["yopmail.com"];

/// Which email providers are accepted.
///
/// Provider domains are compared exactly against the part after `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPolicy {
    allowed: Vec<String>,
    disposable: Vec<String>,
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_ALLOWED_PROVIDERS.iter().map(|s| s.to_string()).collect(),
            disposable: DEFAULT_DISPOSABLE_PROVIDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl EmailPolicy {
    pub fn with_allowed(mut self, domain: impl Into<String>) -> Self {
        self.allowed.push(domain.into());
        self
    }

    pub fn with_disposable(mut self, domain: impl Into<String>) -> Self {
        self.disposable.push(domain.into());
        self
    }

    pub fn check(&self, email: &str) -> Result<(), EmailError> {
        if email.is_empty() {
            return Err(EmailError::Empty);
        }
        if email.chars().any(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }
        if !EMAIL_FORMAT.is_match(email) {
            return Err(EmailError::InvalidFormat);
        }

        let domain = email
            .split_once('@')
            .map(|(_, domain)| domain)
            .ok_or(EmailError::InvalidFormat)?;

        // Disposable wins even if the same domain was also allowed.
        if self.disposable.iter().any(|d| d == domain) {
            return Err(EmailError::DisposableProvider(domain.to_string()));
        }
        if !self.allowed.iter().any(|d| d == domain) {
            return Err(EmailError::UnsupportedProvider(domain.to_string()));
        }
        Ok(())
    }

    pub fn is_valid(&self, email: &str) -> bool {
        self.check(email).is_ok()
    }
}

/// Validate an address against the default provider policy.
pub fn validate_email(email: &str) -> bool {
    EmailPolicy::default().is_valid(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    Empty,
    ContainsWhitespace,
    InvalidFormat,
    DisposableProvider(String),
    UnsupportedProvider(String),
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailError::Empty => write!(f, "email address is empty"),
            EmailError::ContainsWhitespace => write!(f, "email address contains whitespace"),
            EmailError::InvalidFormat => write!(f, "email address is not well formed"),
            EmailError::DisposableProvider(domain) => {
                write!(f, "disposable email provider: {}", domain)
            }
            EmailError::UnsupportedProvider(domain) => {
                write!(f, "unsupported email provider: {}", domain)
            }
        }
    }
}

impl std::error::Error for EmailError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("test@yahoo.com"));
        assert!(validate_email("user@gmail.com"));
        assert!(validate_email("example@outlook.com"));
        assert!(validate_email("first.last-name@gmail.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email("invalid@domain.com"));
        assert!(!validate_email("user@yopmail.com"));
        assert!(!validate_email("noatsign.com"));
        assert!(!validate_email("invalid@domain."));
        assert!(!validate_email(" invalid@domain.com"));
        assert!(!validate_email("invalid@domain.com "));
    }

    #[test]
    fn test_empty_email() {
        assert!(!validate_email(""));
        assert_eq!(EmailPolicy::default().check(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_space_in_email() {
        let policy = EmailPolicy::default();
        for email in ["user @gmail.com", "user@ gmail.com", "user@ gmail .com"] {
            assert_eq!(policy.check(email), Err(EmailError::ContainsWhitespace));
        }
    }

    #[test]
    fn test_error_reasons() {
        let policy = EmailPolicy::default();
        assert_eq!(policy.check("a@@gmail.com"), Err(EmailError::InvalidFormat));
        assert_eq!(
            policy.check("user@yopmail.com"),
            Err(EmailError::DisposableProvider("yopmail.com".into()))
        );
        assert_eq!(
            policy.check("user@domain.com"),
            Err(EmailError::UnsupportedProvider("domain.com".into()))
        );
    }

    #[test]
    fn test_provider_match_is_exact() {
        assert!(!validate_email("user@GMAIL.com"));
        assert!(!validate_email("user@mail.gmail.com"));
    }

    #[test]
    fn test_custom_policy() {
        let policy = EmailPolicy::default()
            .with_allowed("school.edu")
            .with_disposable("gmail.com");

        assert!(policy.is_valid("student@school.edu"));
        assert_eq!(
            policy.check("user@gmail.com"),
            Err(EmailError::DisposableProvider("gmail.com".into()))
        );
    }
}
