use serde_json::Value;
use crate::static_vars::{
    CHAPTER_ALIASES, ORIGINAL_TEXT_ALIASES, TRANSLATION_TEXT_ALIASES, VERSE_ALIASES,
};
use crate::utils::json::is_present;

/// One logical field of a source record and the keys it may appear under,
/// highest priority first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldAliases {
    pub field: &'static str,
    pub keys: &'static [&'static str],
}

pub(crate) const ORIGINAL_TEXT: FieldAliases = FieldAliases {
    field: "original_text",
    keys: ORIGINAL_TEXT_ALIASES,
};
pub(crate) const TRANSLATION_TEXT: FieldAliases = FieldAliases {
    field: "translation_text",
    keys: TRANSLATION_TEXT_ALIASES,
};
pub(crate) const CHAPTER: FieldAliases = FieldAliases {
    field: "chapter",
    keys: CHAPTER_ALIASES,
};
pub(crate) const VERSE: FieldAliases = FieldAliases {
    field: "verse",
    keys: VERSE_ALIASES,
};

impl FieldAliases {
    pub(crate) fn first_present<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.keys
            .iter()
            .map(|key| &record[*key])
            .find(|value| is_present(value))
    }

    /// Text fields only ever take string values; anything else, and strings
    /// that are blank once whitespace is trimmed, are passed over.
    pub(crate) fn first_text<'a>(&self, record: &'a Value) -> Option<&'a str> {
        self.keys
            .iter()
            .filter_map(|key| record[*key].as_str())
            .find(|s| !s.trim().is_empty())
    }

    /// Accepts JSON integers and numeric strings such as `"12"`. Only the first
    /// present alias is read: if it does not parse, the result is `None` and
    /// later aliases are not consulted.
    pub(crate) fn first_number(&self, record: &Value) -> Option<u32> {
        match self.first_present(record)? {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        }
    }
}
