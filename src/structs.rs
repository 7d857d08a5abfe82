use serde::{Deserialize, Serialize};
use crate::utils::corpus::Corpus;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct CanonicalVerse {
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
    pub original_text: String,
    pub translation_text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct ChapterTitle {
    pub number: u32,
    pub original_title: String,
    pub translated_title: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct ReaderChapter<'a> {
    #[serde(flatten)]
    pub title: ChapterTitle,
    pub verses: Vec<&'a CanonicalVerse>,
}

#[derive(Serialize, Debug)]
pub(crate) struct VerseView<'a> {
    #[serde(flatten)]
    pub verse: &'a CanonicalVerse,
    pub reference: String,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct JsonDataResponse {
    pub is_good: bool,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct CorpusStatus {
    pub is_loaded: bool,
    pub source: String,
    pub verse_count: usize,
    pub loaded_at: String,
    pub reason: String,
}

pub(crate) struct AppSettings {
    pub source: String,
    pub loaded_at: String,
}

/// Outcome of the one ingestion run made at startup.
pub(crate) enum CorpusState {
    Loaded(Corpus),
    Unavailable(String),
}
