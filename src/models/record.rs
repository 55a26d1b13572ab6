use serde::Deserialize;

/// The fields the catalog reads from a `question.json`. Any of them may be absent;
/// other keys (`answer`, `hint`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub question: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_difficulty")]
    pub difficulty: String,
}
