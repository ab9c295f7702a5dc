//! Confirmation prompts
//!
//! Destructive actions (reset, removing a shared email) are confirmed by the
//! presentation layer before they run. The wording lives here so every front
//! end shows the same text.

use std::fmt;

/// Title and body of a yes/no confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    /// Label of the button that goes ahead
    pub action: &'static str,
}

impl Confirmation {
    /// Prompt shown before resetting a budget's spend
    pub fn reset(budget_name: &str) -> Self {
        Self {
            title: format!("Reset {}", budget_name),
            message: format!(
                "Resetting {} will remove all purchase history and set spending back to $0.00",
                budget_name
            ),
            action: "Reset",
        }
    }

    /// Prompt shown before removing an email from the shared-with list
    pub fn remove_email(email: &str) -> Self {
        Self {
            title: format!("Remove {}?", email),
            message: format!(
                "Removing {} will no longer allow them to see this budget",
                email
            ),
            action: "Remove",
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_wording() {
        let prompt = Confirmation::reset("Groceries");
        assert_eq!(prompt.title, "Reset Groceries");
        assert!(prompt.message.contains("back to $0.00"));
        assert_eq!(prompt.action, "Reset");
    }

    #[test]
    fn test_remove_wording() {
        let prompt = Confirmation::remove_email("b@x.com");
        assert_eq!(prompt.title, "Remove b@x.com?");
        assert_eq!(
            prompt.to_string(),
            "Remove b@x.com?\nRemoving b@x.com will no longer allow them to see this budget"
        );
    }
}
