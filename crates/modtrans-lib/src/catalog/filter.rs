//! Filter engine
//!
//! Two deliberately different contracts live here:
//!
//! - [`matching_translations`] narrows a mod's version entries by exact
//!   (case-insensitive) equality and pairs each survivor with a lang file.
//! - [`card_matches`] decides card visibility with looser substring checks
//!   over the mod's aggregated strings.
//!
//! A card can therefore be visible while offering zero translations.

use super::model::{LangFile, Mod, VersionEntry};

/// Current user filters; `None` or empty means "no constraint"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub version: Option<String>,
    pub loader: Option<String>,
    pub author: Option<String>,
}

/// Typed user input that mutates a [`FilterState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    Search(String),
    Version(Option<String>),
    Loader(Option<String>),
    Author(Option<String>),
    Reset,
}

impl FilterState {
    pub fn apply(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::Search(text) => self.search = text,
            FilterEvent::Version(choice) => self.version = normalize(choice),
            FilterEvent::Loader(choice) => self.loader = normalize(choice),
            FilterEvent::Author(choice) => self.author = normalize(choice),
            FilterEvent::Reset => *self = Self::default(),
        }
    }

    pub fn with(mut self, event: FilterEvent) -> Self {
        self.apply(event);
        self
    }

    /// Any of version/loader/author is set (search text is not counted)
    pub fn has_choice(&self) -> bool {
        self.version_choice().is_some()
            || self.loader_choice().is_some()
            || self.author_choice().is_some()
    }

    fn version_choice(&self) -> Option<String> {
        lowered(&self.version)
    }

    fn loader_choice(&self) -> Option<String> {
        lowered(&self.loader)
    }

    fn author_choice(&self) -> Option<String> {
        lowered(&self.author)
    }
}

fn normalize(choice: Option<String>) -> Option<String> {
    choice.filter(|c| !c.trim().is_empty())
}

fn lowered(choice: &Option<String>) -> Option<String> {
    choice
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
}

/// A version entry paired with the lang file that translates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation<'a> {
    pub version: &'a VersionEntry,
    pub lang_file: &'a LangFile,
}

/// Version entries satisfying every active equality filter, each paired
/// with the first lang file (lowest index) by the same author
///
/// Entries without a lang file are dropped. Linkage is by author only, so
/// two entries by one author resolve to the same lang file.
pub fn matching_translations<'a>(m: &'a Mod, filter: &FilterState) -> Vec<Translation<'a>> {
    let version = filter.version_choice();
    let loader = filter.loader_choice();
    let author = filter.author_choice();

    m.versions
        .iter()
        .filter(|v| version.as_deref().is_none_or(|want| v.version.to_lowercase() == want))
        .filter(|v| loader.as_deref().is_none_or(|want| v.loader.to_lowercase() == want))
        .filter(|v| author.as_deref().is_none_or(|want| v.author.to_lowercase() == want))
        .filter_map(|v| {
            let wanted = v.author.to_lowercase();
            m.lang_files
                .iter()
                .find(|l| l.author.to_lowercase() == wanted)
                .map(|lang_file| Translation {
                    version: v,
                    lang_file,
                })
        })
        .collect()
}

/// Card visibility: substring containment on name and aggregated strings
pub fn card_matches(m: &Mod, filter: &FilterState) -> bool {
    if !m.name.to_lowercase().contains(&filter.search.to_lowercase()) {
        return false;
    }

    let contains = |haystack: Vec<&str>, needle: Option<String>| match needle {
        Some(needle) => haystack.join(" ").to_lowercase().contains(&needle),
        None => true,
    };

    contains(m.version_strings(), filter.version_choice())
        && contains(m.distinct_loaders(), filter.loader_choice())
        && contains(m.distinct_authors(), filter.author_choice())
}

/// What the card's button should offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction<'a> {
    /// Exactly one translation: download it directly
    Download(Translation<'a>),
    /// Zero or several: let the user pick (or learn there is nothing)
    Select(Vec<Translation<'a>>),
}

pub fn card_action<'a>(translations: Vec<Translation<'a>>) -> CardAction<'a> {
    match <[Translation<'a>; 1]>::try_from(translations) {
        Ok([single]) => CardAction::Download(single),
        Err(others) => CardAction::Select(others),
    }
}

#[cfg(test)]
mod tests {
    include!("filter.test.rs");
}
