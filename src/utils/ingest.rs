use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;
use crate::static_vars::TRANSLATION_PLACEHOLDER;
use crate::structs::CanonicalVerse;
use crate::utils::aliases::{CHAPTER, ORIGINAL_TEXT, TRANSLATION_TEXT, VERSE};
use crate::utils::cleaning::{clean_original_text, clean_translation_text};
use crate::utils::corpus::Corpus;

/// Any failure to obtain the verse document. Callers treat every variant the
/// same way; the variants only sharpen the logged diagnostic.
#[derive(Debug, Error)]
pub(crate) enum IngestionError {
    #[error("could not read '{source_path}': {err}")]
    Read {
        source_path: String,
        err: std::io::Error,
    },
    #[error("could not fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },
    #[error("'{url}' answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("'{source_path}' is not valid JSON: {reason}")]
    Parse { source_path: String, reason: String },
    #[error("'{source_path}' does not contain a JSON array of verses")]
    NotArray { source_path: String },
}

fn remote_url(source: &str) -> Option<Url> {
    match Url::parse(source) {
        Ok(u) if u.scheme() == "http" || u.scheme() == "https" => Some(u),
        _ => None,
    }
}

fn fetch_remote_document(url: &Url) -> Result<Value, IngestionError> {
    match ureq::get(url.as_str()).call() {
        Ok(r) => r.into_json::<Value>().map_err(|e| IngestionError::Parse {
            source_path: url.to_string(),
            reason: e.to_string(),
        }),
        Err(ureq::Error::Status(status, _)) => Err(IngestionError::Status {
            url: url.to_string(),
            status,
        }),
        Err(e) => Err(IngestionError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn read_local_document(path: &str) -> Result<Value, IngestionError> {
    let json_string = std::fs::read_to_string(path).map_err(|err| IngestionError::Read {
        source_path: path.to_string(),
        err,
    })?;
    serde_json::from_str(json_string.as_str()).map_err(|e| IngestionError::Parse {
        source_path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Loads the verse document from a local path or an `http(s)://` URL.
pub(crate) fn fetch_document(source: &str) -> Result<Value, IngestionError> {
    match remote_url(source) {
        Some(url) => fetch_remote_document(&url),
        None => read_local_document(source),
    }
}

pub(crate) fn normalize_record(record: &Value) -> CanonicalVerse {
    let chapter = CHAPTER.first_number(record);
    let verse = VERSE.first_number(record);
    for (aliases, value) in [(CHAPTER, chapter), (VERSE, verse)] {
        if value.is_none() {
            debug!("record has no usable {} in {:?}", aliases.field, aliases.keys);
        }
    }
    CanonicalVerse {
        chapter,
        verse,
        original_text: clean_original_text(ORIGINAL_TEXT.first_text(record).unwrap_or("")),
        translation_text: clean_translation_text(
            TRANSLATION_TEXT
                .first_text(record)
                .unwrap_or(TRANSLATION_PLACEHOLDER),
        ),
    }
}

/// Maps every source record to a canonical verse and sorts the result.
pub(crate) fn normalize_document(source: &str, document: &Value) -> Result<Corpus, IngestionError> {
    let records = document.as_array().ok_or_else(|| IngestionError::NotArray {
        source_path: source.to_string(),
    })?;
    Ok(Corpus::new(records.iter().map(normalize_record).collect()))
}

pub(crate) fn ingest(source: &str) -> Result<Corpus, IngestionError> {
    let document = fetch_document(source)?;
    let corpus = normalize_document(source, &document)?;
    if corpus.is_empty() {
        warn!("'{}' contains no verses", source);
    } else {
        info!("loaded {} verses from '{}'", corpus.len(), source);
    }
    Ok(corpus)
}
