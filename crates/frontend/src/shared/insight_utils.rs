//! Severity classification for free-text insight strings.
//!
//! Display-only heuristic over the pipeline's prose, not a data contract:
//! it decides which banner style a line gets, nothing else.

/// Banner severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSeverity {
    Critical,
    Warning,
    Opportunity,
    Info,
}

impl InsightSeverity {
    pub fn css_class(self) -> &'static str {
        match self {
            InsightSeverity::Critical => "insight insight--critical",
            InsightSeverity::Warning => "insight insight--warning",
            InsightSeverity::Opportunity => "insight insight--opportunity",
            InsightSeverity::Info => "insight insight--info",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            InsightSeverity::Critical => "alert-octagon",
            InsightSeverity::Warning => "alert-triangle",
            InsightSeverity::Opportunity => "lightbulb",
            InsightSeverity::Info => "info",
        }
    }
}

/// Bucket an insight line by substring.
///
/// The literal siren marker wins outright; "alert"/"declining" mark
/// warnings; "opportunity"/"top performer"/"growth" mark upside; anything
/// else is informational.
pub fn classify_insight(text: &str) -> InsightSeverity {
    if text.contains("🚨") {
        return InsightSeverity::Critical;
    }
    let lower = text.to_lowercase();
    if lower.contains("alert") || lower.contains("declining") {
        InsightSeverity::Warning
    } else if lower.contains("opportunity")
        || lower.contains("top performer")
        || lower.contains("growth")
    {
        InsightSeverity::Opportunity
    } else {
        InsightSeverity::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn siren_marker_is_critical() {
        assert_eq!(
            classify_insight("🚨 3 key accounts stopped ordering entirely"),
            InsightSeverity::Critical
        );
    }

    #[test]
    fn alert_and_declining_are_warnings() {
        assert_eq!(
            classify_insight("ALERT: Henderson market down 12%"),
            InsightSeverity::Warning
        );
        assert_eq!(
            classify_insight("44 declining accounts need follow-up"),
            InsightSeverity::Warning
        );
    }

    #[test]
    fn upside_language_is_opportunity() {
        assert_eq!(
            classify_insight("Opportunity: Crystal frames up 34% in St George"),
            InsightSeverity::Opportunity
        );
        assert_eq!(
            classify_insight("SUNDANCE OPTICAL is a top performer this year"),
            InsightSeverity::Opportunity
        );
        assert_eq!(
            classify_insight("Matte category shows steady growth"),
            InsightSeverity::Opportunity
        );
    }

    #[test]
    fn everything_else_is_info() {
        assert_eq!(
            classify_insight("Territory covers 135 active accounts."),
            InsightSeverity::Info
        );
    }

    #[test]
    fn critical_marker_wins_over_other_keywords() {
        assert_eq!(
            classify_insight("🚨 declining growth alert"),
            InsightSeverity::Critical
        );
    }
}
