//! Declarative form validation
//!
//! A rule names the field it covers, the message key the UI resolves to a
//! translated string, and a predicate that returns `true` when the value
//! is acceptable. Rule lists are plain `const` slices, evaluated in order;
//! every failing rule is reported, not just the first.

/// One failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Field identifier the UI highlights
    pub field: &'static str,
    /// Translation key for the error message
    pub message_key: &'static str,
}

/// One validation rule over a form value
pub struct Rule<T> {
    pub field: &'static str,
    pub message_key: &'static str,
    /// Returns `true` when the value passes
    pub check: fn(&T) -> bool,
}

/// Run every rule, collecting all failures in rule order.
pub fn validate<T>(value: &T, rules: &[Rule<T>]) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(value))
        .map(|rule| FieldError {
            field: rule.field,
            message_key: rule.message_key,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Login {
        username: String,
        password: String,
    }

    const RULES: &[Rule<Login>] = &[
        Rule {
            field: "username",
            message_key: "login.username_required",
            check: |login| !login.username.is_empty(),
        },
        Rule {
            field: "password",
            message_key: "login.password_required",
            check: |login| !login.password.is_empty(),
        },
    ];

    #[test]
    fn reports_all_failures_in_order() {
        let login = Login {
            username: String::new(),
            password: String::new(),
        };
        let errors = validate(&login, RULES);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[1].field, "password");
    }

    #[test]
    fn valid_value_passes() {
        let login = Login {
            username: "anna".to_string(),
            password: "secret".to_string(),
        };
        assert!(validate(&login, RULES).is_empty());
    }
}
