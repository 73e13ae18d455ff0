//! Renders claim text and gathered evidence into the adjudication prompt.
//!
//! Output is deterministic for a given claim and bundle: the same inputs
//! always produce byte-identical prompts.

use std::fmt::Write;

use crate::evidence::{EvidenceBundle, FactCheckResponse, SearchResponse};

pub const NO_FACT_CHECK_DATA: &str = "No fact-check data.";
pub const NO_SEARCH_RESULTS: &str = "No search results.";

/// Search results beyond this rank are dropped from the prompt.
pub const MAX_SEARCH_RESULTS: usize = 3;

/// One `Claim:` line per fact-check claim followed by one `Rating:` line per
/// review, claims separated by a blank line. All claims are rendered.
pub fn render_fact_check(response: &FactCheckResponse) -> String {
    if response.claims.is_empty() {
        return NO_FACT_CHECK_DATA.to_string();
    }

    let mut out = String::new();
    for claim in &response.claims {
        let _ = writeln!(out, "Claim: {}", claim.text);
        for review in &claim.claim_review {
            let _ = writeln!(out, "Rating: {}", review.textual_rating);
        }
        out.push('\n');
    }
    out
}

/// `Title:` / `Snippet:` pairs for the top [`MAX_SEARCH_RESULTS`] items.
pub fn render_search(response: &SearchResponse) -> String {
    if response.items.is_empty() {
        return NO_SEARCH_RESULTS.to_string();
    }

    let mut out = String::new();
    for item in response.items.iter().take(MAX_SEARCH_RESULTS) {
        let _ = writeln!(out, "Title: {}", item.title);
        let _ = writeln!(out, "Snippet: {}", item.snippet);
        out.push('\n');
    }
    out
}

pub fn build_prompt(claim: &str, evidence: &EvidenceBundle) -> String {
    format!(
        "You are a professional fact-checking AI.\n\
         \n\
         Analyze the claim using the evidence below.\n\
         \n\
         CLAIM:\n\
         {claim}\n\
         \n\
         FACT CHECK DATA:\n\
         {fact_check}\n\
         \n\
         SEARCH RESULTS:\n\
         {search}\n\
         \n\
         Respond ONLY with a valid JSON object containing exactly these three fields:\n\
         \n\
         {{\n  \
           \"verdict\": \"TRUE or FALSE or PARTIALLY_TRUE or UNVERIFIABLE\",\n  \
           \"confidence\": 0-100,\n  \
           \"summary\": \"brief explanation\"\n\
         }}\n",
        fact_check = render_fact_check(&evidence.fact_check),
        search = render_search(&evidence.search),
    )
}
