//! Configuration issues
//!
//! Config loading never panics on bad values. Instead, validation returns a
//! list of structured issues and the caller decides what to do: warnings are
//! printed, errors stop startup.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required string field is empty.
    EmptyValue { field: String },
    /// A numeric field is zero where zero makes no sense.
    ZeroValue { field: String },
    /// The same category key appears more than once.
    DuplicateCategory { key: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let e = ConfigIssue::error(
            ConfigIssueCode::EmptyValue {
                field: "api.base_url".into(),
            },
            "api.base_url is empty",
        );
        assert!(e.is_error());

        let w = ConfigIssue::warning(
            ConfigIssueCode::ZeroValue {
                field: "package.default_limit".into(),
            },
            "no dishes can be picked from unlisted categories",
        );
        assert!(!w.is_error());
        assert_eq!(w.severity, Severity::Warning);
    }
}
