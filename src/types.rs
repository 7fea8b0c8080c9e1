use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Privilege tier a Sirv token is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    ReadOnly,
    Admin,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Domain-shaped view of one hosted media file. Created transiently per API
/// response; nothing in this layer persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub owner_id: Option<String>,
    pub filename: String,
    pub media_id: Uuid,
    pub ctime: DateTime<Utc>,
    pub mtime: DateTime<Utc>,
    pub content_type: String,
    pub meta: ImageMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMeta {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub sort: HashMap<String, String>,
    pub from: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_source")]
    pub source: FileSource,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSource {
    pub filename: String,
    pub dirname: String,
    pub ctime: DateTime<Utc>,
    pub mtime: DateTime<Utc>,
    pub content_type: String,
    #[serde(default)]
    pub meta: ImageMeta,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStat {
    pub ctime: DateTime<Utc>,
    pub mtime: DateTime<Utc>,
    pub content_type: String,
    #[serde(default)]
    pub meta: ImageMeta,
}

/// Body of the per-user marker file written next to uploaded images.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerMarker {
    pub uuid: String,
    pub timestamp: i64,
}

/// Mapping of discipline tag to whether a climb carries that discipline.
pub type DisciplineFlags = HashMap<String, bool>;

/// Parallel percentage/color sequences feeding the discipline breakdown
/// chart. Percentages sum to 100 across the observed disciplines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentAndColor {
    pub percents: Vec<f64>,
    pub colors: Vec<String>,
}
