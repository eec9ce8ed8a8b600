use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input to an opportunity search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HuntQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl HuntQuery {
    /// Query focused on a single domain, e.g. `"Cloud Computing"`.
    #[must_use]
    pub fn domain(domain_focus: impl Into<String>) -> Self {
        Self {
            domain_focus: Some(domain_focus.into()),
            ..Self::default()
        }
    }
}

/// Input to a company readiness analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl AnalysisQuery {
    #[must_use]
    pub fn company(company_name: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
            ..Self::default()
        }
    }
}

/// Input to outbound email generation or delivery.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmailDraft {
    pub client_name: String,
    pub company: String,
    pub email: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_context: Option<String>,
}
