use serde::{Deserialize, Serialize};

/// Response of the claims-search endpoint. Every field is optional upstream,
/// so missing lists decode as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckResponse {
    #[serde(default)]
    pub claims: Vec<FactCheckClaim>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckClaim {
    #[serde(default)]
    pub text: String,
    pub claimant: Option<String>,
    pub claim_date: Option<String>,
    #[serde(default)]
    pub claim_review: Vec<ClaimReview>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReview {
    pub publisher: Option<Publisher>,
    pub url: Option<String>,
    #[serde(default)]
    pub textual_rating: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Publisher {
    pub name: Option<String>,
    pub site: Option<String>,
}

/// Response of the web-search endpoint, items in upstream rank order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: String,
}

/// Evidence gathered for one verification attempt.
#[derive(Debug, Clone, Default)]
pub struct EvidenceBundle {
    pub fact_check: FactCheckResponse,
    pub search: SearchResponse,
}

impl EvidenceBundle {
    pub fn is_empty(&self) -> bool {
        self.fact_check.claims.is_empty() && self.search.items.is_empty()
    }
}
