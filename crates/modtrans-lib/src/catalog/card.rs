//! Per-mod card summary for listings

use super::filter::{CardAction, FilterState, Translation, card_action, matching_translations};
use super::model::Mod;
use super::state::ModId;
use std::cmp::Ordering;

/// Everything a listing line needs for one visible mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub id: ModId,
    pub mod_ref: &'a Mod,
    pub version_label: String,
    pub loaders_label: String,
    /// Shown only when the available translations share one author
    pub author_label: Option<&'a str>,
    pub action: CardAction<'a>,
}

impl<'a> CardView<'a> {
    pub fn build(id: ModId, m: &'a Mod, filter: &FilterState) -> Self {
        let translations = matching_translations(m, filter);

        Self {
            id,
            mod_ref: m,
            version_label: version_range_label(&m.version_strings()),
            loaders_label: m.distinct_loaders().join(" - "),
            author_label: single_author(&translations),
            action: card_action(translations),
        }
    }
}

fn single_author<'a>(translations: &[Translation<'a>]) -> Option<&'a str> {
    let mut authors = translations.iter().map(|t| t.version.author.as_str());
    let first = authors.next()?;
    authors.all(|a| a == first).then_some(first)
}

/// `min - max` over distinct dotted versions, or the single value
///
/// Range-style entries (leading `<`) are left out. When nothing is left
/// the first raw version is shown, or `N/A` for a mod without versions.
pub fn version_range_label(versions: &[&str]) -> String {
    let mut usable: Vec<&str> = Vec::new();
    for &v in versions {
        if !v.starts_with('<') && !usable.contains(&v) {
            usable.push(v);
        }
    }
    usable.sort_by(|a, b| compare_dotted(a, b));

    match (usable.first(), usable.last()) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{min} - {max}"),
        _ => versions.first().map_or_else(|| "N/A".to_string(), |v| v.to_string()),
    }
}

/// Numeric comparison part by part; missing or non-numeric parts count as 0
fn compare_dotted(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| -> Vec<u64> { s.split('.').map(|p| p.parse().unwrap_or(0)).collect() };
    let (left, right) = (parse(a), parse(b));

    (0..left.len().max(right.len()))
        .map(|i| {
            let l = left.get(i).copied().unwrap_or(0);
            let r = right.get(i).copied().unwrap_or(0);
            l.cmp(&r)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    include!("card.test.rs");
}
