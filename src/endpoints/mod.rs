pub(crate) mod chapters;
pub(crate) mod corpus_guard;
pub(crate) mod error;
pub(crate) mod status;
pub(crate) mod verses;
pub(crate) mod version;
