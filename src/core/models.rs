use serde::{Deserialize, Deserializer, Serialize};

const UNTITLED: &str = "タイトルなし";
const NO_CONTENT: &str = "内容なし";

/// A retrieved search result handed to the summarizer.
///
/// Missing or `null` fields deserialize to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl Document {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}

/// Raw result as returned by the search provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    pub title: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
}

impl SearchHit {
    /// Converts a provider hit into a displayable document, filling blanks
    /// with the front-end's placeholder labels.
    #[must_use]
    pub fn into_document(self) -> Document {
        Document {
            title: self
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            url: self.url.unwrap_or_default(),
            content: self
                .content
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| NO_CONTENT.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub results: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub query: String,
    pub source_count: usize,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_vec<'de, D>(deserializer: D) -> Result<Vec<Document>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Document>>::deserialize(deserializer)?.unwrap_or_default())
}
