use serde::{Deserialize, Deserializer, Serialize};

/// One selectable entry returned by the search endpoint.
///
/// The backend serialises primary keys as integers while templates carry
/// them as strings (`data-selected="42"`), so `id` accepts either and is
/// always held as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Str(String),
        Int(i64),
        UInt(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Str(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::UInt(n) => n.to_string(),
    })
}

/// Parse the endpoint body: a JSON array of `{ id, text }`.
pub fn parse_options(body: &str) -> Result<Vec<SelectOption>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Normalise a raw control value into a parent scope; blank means unset.
pub fn parent_scope(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
