use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

// Archive records are scraped from heterogeneous sources, so any field
// may be absent on the wire.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct ProblemSummary {
    pub id         : String,
    pub title      : String,
    pub url        : Option<String>,
    pub source     : Option<String>,
    pub difficulty : Option<String>,
    pub tags       : Vec<String>,
}

// The envelopes carry a few more fields on the wire (`limit`, `offset`,
// `updated_at`); the client does not read them, so they are not modeled.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct TagsResponse {
    pub ok: bool,
    #[serde(default)]
    pub data: Vec<TagCount>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SearchResponse {
    pub ok: bool,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub data: Vec<ProblemSummary>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(default)]
    pub problems: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_time: Option<String>,
}
