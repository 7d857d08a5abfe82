use rand::prelude::IndexedRandom;
use rand::Rng;
use crate::static_vars::{CHAPTER_COUNT, CHAPTER_TITLES_ENGLISH, CHAPTER_TITLES_SANSKRIT};
use crate::structs::{CanonicalVerse, ChapterTitle, ReaderChapter, VerseView};

/// The normalized verse sequence, sorted by `(chapter, verse)`.
///
/// Built once by ingestion and never mutated afterwards; views borrow from it.
#[derive(Debug, Clone, Default)]
pub(crate) struct Corpus {
    verses: Vec<CanonicalVerse>,
}

impl Corpus {
    /// Takes ownership of the verses and sorts them. The sort is stable, so
    /// duplicates keep their source order; unnumbered records sort first.
    pub(crate) fn new(mut verses: Vec<CanonicalVerse>) -> Corpus {
        verses.sort_by_key(|v| (v.chapter, v.verse));
        Corpus { verses }
    }

    pub(crate) fn len(&self) -> usize {
        self.verses.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn verses(&self) -> &[CanonicalVerse] {
        &self.verses
    }

    pub(crate) fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&CanonicalVerse> {
        self.verses.choose(rng)
    }

    pub(crate) fn verses_of_chapter(&self, chapter: u32) -> Vec<&CanonicalVerse> {
        self.verses
            .iter()
            .filter(|v| v.chapter == Some(chapter))
            .collect()
    }

    pub(crate) fn reader_chapter(&self, chapter: u32) -> Option<ReaderChapter<'_>> {
        let title = chapter_title(chapter)?;
        Some(ReaderChapter {
            title,
            verses: self.verses_of_chapter(chapter),
        })
    }
}

pub(crate) fn chapter_title(chapter: u32) -> Option<ChapterTitle> {
    if !(1..=CHAPTER_COUNT).contains(&chapter) {
        return None;
    }
    let idx = (chapter - 1) as usize;
    Some(ChapterTitle {
        number: chapter,
        original_title: CHAPTER_TITLES_SANSKRIT[idx].to_string(),
        translated_title: CHAPTER_TITLES_ENGLISH[idx].to_string(),
    })
}

/// The fixed chapter index. Independent of whatever data was loaded.
pub(crate) fn list_chapters() -> Vec<ChapterTitle> {
    (1..=CHAPTER_COUNT).filter_map(chapter_title).collect()
}

pub(crate) fn verse_reference(verse: &CanonicalVerse) -> String {
    let show = |n: Option<u32>| n.map_or_else(|| "?".to_string(), |n| n.to_string());
    format!("Chapter {} • Verse {}", show(verse.chapter), show(verse.verse))
}

pub(crate) fn verse_view(verse: &CanonicalVerse) -> VerseView<'_> {
    VerseView {
        verse,
        reference: verse_reference(verse),
    }
}
