use serde::{Deserialize, Serialize};

/// Visual style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl BadgeVariant {
    pub fn code(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Info => "info",
            BadgeVariant::Light => "light",
            BadgeVariant::Dark => "dark",
        }
    }

    /// CSS class list for the badge element
    pub fn css_class(&self) -> String {
        if self.needs_dark_text() {
            format!("badge badge--{} badge--text-dark", self.code())
        } else {
            format!("badge badge--{}", self.code())
        }
    }

    /// Light backgrounds get dark text
    pub fn needs_dark_text(&self) -> bool {
        matches!(
            self,
            BadgeVariant::Warning | BadgeVariant::Info | BadgeVariant::Light
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_text_variants() {
        assert!(BadgeVariant::Warning.needs_dark_text());
        assert!(BadgeVariant::Info.needs_dark_text());
        assert!(!BadgeVariant::Danger.needs_dark_text());
        assert_eq!(
            BadgeVariant::Warning.css_class(),
            "badge badge--warning badge--text-dark"
        );
        assert_eq!(BadgeVariant::Success.css_class(), "badge badge--success");
    }
}
