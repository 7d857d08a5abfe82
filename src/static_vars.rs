pub(crate) const DEFAULT_SOURCE: &str = "gita.json";
pub const SOURCE_ENV_VAR: &str = "GITA_SOURCE";

pub(crate) const CHAPTER_COUNT: u32 = 18;

pub(crate) const TRANSLATION_PLACEHOLDER: &str = "Translation unavailable.";
/// Closing mark appended to non-empty Sanskrit text (space, danda, danda)
pub(crate) const DANDA_TERMINATOR: &str = " ।।";

pub(crate) const LOAD_FAILURE_MESSAGE: &str =
    "Error loading text. Make sure gita.json is in the same folder.";

// Source field aliases, highest priority first
pub(crate) const ORIGINAL_TEXT_ALIASES: &[&str] = &["sanskrit", "text", "shloka"];
pub(crate) const TRANSLATION_TEXT_ALIASES: &[&str] = &[
    "translation",
    "meaning",
    "english_meaning",
    "transliteration",
    "word_meanings",
];
pub(crate) const CHAPTER_ALIASES: &[&str] = &["chapter", "chapter_number", "chapter_id"];
pub(crate) const VERSE_ALIASES: &[&str] = &["verse", "verse_number", "verse_id"];

pub(crate) const CHAPTER_TITLES_SANSKRIT: [&str; 18] = [
    "अर्जुनविषादयोग",
    "सांख्ययोग",
    "कर्मयोग",
    "ज्ञानकर्मसंन्यासयोग",
    "कर्मसंन्यासयोग",
    "ध्यानयोग",
    "ज्ञानविज्ञानयोग",
    "अक्षरब्रह्मयोग",
    "राजविद्याराजगुह्ययोग",
    "विभूतियोग",
    "विश्वरूपदर्शनयोग",
    "भक्तियोग",
    "क्षेत्रक्षेत्रज्ञविभागयोग",
    "गुणत्रयविभागयोग",
    "पुरुषोत्तमयोग",
    "दैवासुरसंपद्विभागयोग",
    "श्रद्धात्रयविभागयोग",
    "मोक्षसंन्यासयोग",
];

pub(crate) const CHAPTER_TITLES_ENGLISH: [&str; 18] = [
    "The Distress of Arjuna",
    "The Path of Knowledge",
    "The Path of Selfless Action",
    "Wisdom in Action",
    "The Path of Renunciation",
    "The Path of Meditation",
    "Knowledge and Realization",
    "The Imperishable Eternal",
    "The Royal Secret",
    "The Divine Splendor",
    "The Vision of the Cosmic Form",
    "The Path of Devotion",
    "Nature, the Enjoyer, and Consciousness",
    "The Three Modes of Material Nature",
    "The Supreme Divine Personality",
    "The Divine and Demoniac Natures",
    "The Three Divisions of Faith",
    "Liberation and Renunciation",
];
