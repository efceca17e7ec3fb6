//! Analysis prompt catalog.
//!
//! Static mapping from analysis intent to the full instruction text sent to
//! the vision model. Read-only at runtime. The selector in the panel UI is
//! populated from the same catalog, so every selectable value has exactly
//! one instruction.

use crate::error::AnalysisError;
use serde::Serialize;

/// The kinds of analysis the panel can request. Closed set, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalysisIntent {
    Summary,
    Insights,
    Accessibility,
    Diagnosis,
    Comparison,
    Forecasting,
}

const SUMMARY: &str = "This image shows a monitoring dashboard. Only focus on the panels on the dashboard. DO NOT INCLUDE the AI analysis panel in your analysis. Provide a brief summary of what the dashboard is displaying, focusing on the most critical and relevant data points. Lighter colours on the heatmap indicate higher usage, darker colours indicate lower usage. Always start with \"This dashboard shows...\" and ensure that the summary captures the key insights without going into too much detail.";

const INSIGHTS: &str = "This image shows a monitoring dashboard. Only focus on the panels on the dashboard. DO NOT INCLUDE the AI analysis panel in your analysis. Please explain what the data is showing and share any insights you can gather from it. Lighter colours on the heatmap indicate higher usage, darker colours indicate lower usage. Always start with \"This dashboard shows...\" and provide detailed insights into the data presented, highlighting any trends, patterns, or anomalies you observe.";

const ACCESSIBILITY: &str = "This image shows a monitoring dashboard. Only focus on the panels on the dashboard. DO NOT INCLUDE the AI analysis panel in your analysis. Please explain what the data is showing in great detail, aiming to provide a clear description for users who may be visually impaired. Describe each panel's content and structure comprehensively. Lighter colours on the heatmap indicate higher usage, darker colours indicate lower usage. Always start with \"This dashboard shows...\" and ensure that all aspects of the data are explained in a way that is accessible to all users.";

const DIAGNOSIS: &str = "This image shows a monitoring dashboard. Only focus on the panels on the dashboard. DO NOT INCLUDE the AI analysis panel in your analysis. Please analyze the data for any potential issues or problems, highlighting correlations and any critical points of concern. Lighter colours on the heatmap indicate higher usage, darker colours indicate lower usage. Always start with \"This dashboard shows...\" and provide a detailed diagnosis of any potential issues or inefficiencies indicated by the data.";

const COMPARISON: &str = "This image shows a monitoring dashboard. Only focus on the panels on the dashboard. DO NOT INCLUDE the AI analysis panel in your analysis. Compare the data across different panels to highlight any correlations, discrepancies, or significant differences. Lighter colours on the heatmap indicate higher usage, darker colours indicate lower usage. Always start with \"This dashboard shows...\" and provide a comparative analysis, explaining how the data in various panels relate to each other.";

const FORECASTING: &str = "This image shows a monitoring dashboard. Only focus on the panels on the dashboard. DO NOT INCLUDE the AI analysis panel in your analysis. Based on the current data, provide a forecast of future trends and usage patterns. Lighter colours on the heatmap indicate higher usage, darker colours indicate lower usage. Always start with \"This dashboard shows...\" and offer insights into what future data might look like, explaining the basis of your forecasts.";

impl AnalysisIntent {
    /// Catalog order — also the order the selector renders in.
    pub const ALL: [AnalysisIntent; 6] = [
        AnalysisIntent::Summary,
        AnalysisIntent::Insights,
        AnalysisIntent::Accessibility,
        AnalysisIntent::Diagnosis,
        AnalysisIntent::Comparison,
        AnalysisIntent::Forecasting,
    ];

    /// Human-readable label shown in the selector. Doubles as the wire id.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisIntent::Summary => "Summary",
            AnalysisIntent::Insights => "Insights",
            AnalysisIntent::Accessibility => "Accessibility",
            AnalysisIntent::Diagnosis => "Diagnosis",
            AnalysisIntent::Comparison => "Comparison",
            AnalysisIntent::Forecasting => "Forecasting",
        }
    }

    /// Parse a selector label back into an intent.
    ///
    /// The enum itself is closed, so this boundary is the only place an
    /// unknown intent can arise: the webview hands us a plain string.
    pub fn from_label(label: &str) -> Result<Self, AnalysisError> {
        Self::ALL
            .iter()
            .copied()
            .find(|intent| intent.label() == label)
            .ok_or_else(|| AnalysisError::UnknownIntent(label.to_string()))
    }

    /// Full instruction text for this intent. Pure read, total on the enum.
    pub fn instruction(&self) -> &'static str {
        match self {
            AnalysisIntent::Summary => SUMMARY,
            AnalysisIntent::Insights => INSIGHTS,
            AnalysisIntent::Accessibility => ACCESSIBILITY,
            AnalysisIntent::Diagnosis => DIAGNOSIS,
            AnalysisIntent::Comparison => COMPARISON,
            AnalysisIntent::Forecasting => FORECASTING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_has_a_label_roundtrip() {
        for intent in AnalysisIntent::ALL {
            assert_eq!(AnalysisIntent::from_label(intent.label()).unwrap(), intent);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = AnalysisIntent::from_label("Sentiment").unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownIntent(_)));
    }

    #[test]
    fn instructions_are_distinct_and_nonempty() {
        let mut seen = Vec::new();
        for intent in AnalysisIntent::ALL {
            let text = intent.instruction();
            assert!(!text.is_empty());
            assert!(!seen.contains(&text), "duplicate instruction for {:?}", intent);
            seen.push(text);
        }
    }

    #[test]
    fn instructions_share_the_required_opening() {
        for intent in AnalysisIntent::ALL {
            assert!(intent.instruction().contains("This dashboard shows"));
        }
    }
}
