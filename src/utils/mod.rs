pub(crate) mod aliases;
pub(crate) mod cleaning;
pub(crate) mod corpus;
pub(crate) mod ingest;
pub(crate) mod json;
pub(crate) mod json_responses;
pub(crate) mod launch;
pub(crate) mod response;
pub(crate) mod time;
