//! Shared-with list formatting
//!
//! Dimmed rows are shown in parentheses since the terminal output is plain
//! text.

use crate::services::SharedListView;

/// Format the shared-with list as the viewer sees it
pub fn format_shared_list(view: &SharedListView, share_label: &str) -> String {
    let mut output = String::new();

    match view {
        SharedListView::Hidden => output.push_str("Not shared with anyone.\n"),
        SharedListView::Entries(entries) => {
            output.push_str("Shared with:\n");
            for entry in entries {
                let label = if entry.is_dimmed {
                    format!("({})", entry.label())
                } else {
                    entry.label()
                };
                let marker = if entry.removable { "*" } else { " " };
                output.push_str(&format!("  {} {}\n", marker, label));
            }
        }
    }

    output.push_str(&format!("\n{}\n", share_label));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SharedEntry;

    #[test]
    fn test_hidden() {
        let output = format_shared_list(&SharedListView::Hidden, "Add email address to share");
        assert!(output.starts_with("Not shared with anyone."));
        assert!(output.ends_with("Add email address to share\n"));
    }

    #[test]
    fn test_rows() {
        let view = SharedListView::Entries(vec![
            SharedEntry {
                email: "a@x.com".into(),
                is_owner: true,
                is_dimmed: true,
                removable: false,
            },
            SharedEntry {
                email: "b@x.com".into(),
                is_owner: false,
                is_dimmed: false,
                removable: true,
            },
        ]);

        let output = format_shared_list(&view, "Only owner can share");
        assert!(output.contains("    (a@x.com (Owner))\n"));
        assert!(output.contains("  * b@x.com\n"));
    }
}
