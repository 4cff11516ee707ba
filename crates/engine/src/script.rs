//! Roster marker script generation.
//!
//! Produces a pasteable JavaScript snippet that auto-selects attendance state
//! on a third-party roster page by fuzzy name match. Matching semantics of
//! the generated text: a row containing every token of a name is selected
//! automatically; partial token overlap is only logged for human review;
//! names with no matching row are logged as unmatched.

use crate::identity::split_key;
use crate::model::ParticipantSummary;

const TEMPLATE: &str = r#"(() => {
  const ROSTER = __ROSTER__;

  const rows = Array.from(document.querySelectorAll("table tr"));

  const matchCount = (tokens, text) =>
    tokens.filter((token) => text.includes(token)).length;

  ROSTER.forEach((tokens) => {
    let best = null;
    let bestCount = 0;
    rows.forEach((row) => {
      const count = matchCount(tokens, row.textContent.toLowerCase());
      if (count > bestCount) {
        best = row;
        bestCount = count;
      }
    });

    const label = tokens.join(" ");
    if (best && bestCount === tokens.length) {
      const control = best.querySelector("input[type=checkbox], input[type=radio]");
      if (control) control.click();
    } else if (bestCount > 0) {
      console.log(`partial match for "${label}", review manually`);
    } else {
      console.log(`no match for "${label}"`);
    }
  });
})();
"#;

/// Lowercase match tokens for one summary, split by the same separator rule
/// used for identity resolution. Nameless summaries yield nothing.
pub fn name_tokens(summary: &ParticipantSummary) -> Option<Vec<String>> {
    let name = summary.user_name.as_deref().filter(|n| !n.is_empty())?;
    Some(split_key(name).iter().map(|t| t.to_lowercase()).collect())
}

/// Generate the marker script for every surviving summary.
pub fn generate_marker_script(summaries: &[ParticipantSummary]) -> String {
    let roster: Vec<Vec<String>> = summaries.iter().filter_map(name_tokens).collect();
    let roster_json = serde_json::to_string(&roster).unwrap_or_else(|_| "[]".to_string());
    TEMPLATE.replace("__ROSTER__", &roster_json)
}
