//! # Sirv Integration Module
//!
//! This module provides the interface to the Sirv media-hosting REST API used
//! by the site for user-uploaded climbing photos. It handles token
//! acquisition, file search, file metadata, uploads, deletes and directory
//! management, abstracting the HTTP details behind a small client type.
//!
//! ## Overview
//!
//! The module implements an SDK-like surface for the Sirv v2 API operations
//! the site needs. Each operation resolves a bearer token, issues a single
//! request against the configured base endpoint, interprets the status code
//! and maps the body into a domain-shaped result.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (web handlers)
//!          ↓
//! Sirv Integration Layer
//!     ├── Authentication (client-credential bearer tokens)
//!     └── File Operations (search, stat, readdir, mkdir, upload, delete)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Sirv REST API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] - Token acquisition against the `/token` endpoint. Two privilege
//! tiers exist (read-only and admin), selected per operation. Credentials come
//! from the injected [`crate::config::SirvConfig`]; an unconfigured tier skips
//! the network entirely and yields no token.
//!
//! [`files`] - The file operations. Search results are mapped into
//! [`crate::types::MediaRecord`] values carrying a deterministic `media_id`
//! derived from the file path, so callers can cross-reference media without a
//! separate store.
//!
//! ## Error Handling Philosophy
//!
//! Operations split into two camps by caller criticality:
//!
//! - **Hard failures** - search, stat, upload and delete return an error whose
//!   message embeds the operation name and the transport status text. The
//!   caller's workflow cannot proceed without the result.
//! - **Best-effort operations** - directory creation and the owner-marker
//!   write log their failure and return `false`. Duplicate-directory creation
//!   is expected, and the marker is bookkeeping only.
//!
//! No retries, timeouts or backpressure are implemented in this layer; a
//! failed call surfaces immediately.
//!
//! ## API Coverage
//!
//! - `POST /token` - bearer token from a client id/secret pair
//! - `POST /files/search` - search by owner directory or by filenames
//! - `GET /files/stat` - metadata for a single file
//! - `GET /files/readdir` - raw directory listing
//! - `POST /files/mkdir` - per-user directory creation
//! - `POST /files/upload` - raw image bytes and the owner marker file
//! - `POST /files/delete` - file removal

use reqwest::{Client, StatusCode};

use crate::config::SirvConfig;

pub mod auth;
pub mod files;

/// Client for the Sirv REST API.
///
/// Wraps a reqwest [`Client`] and the immutable configuration snapshot. All
/// operations live in the [`auth`] and [`files`] impl blocks. The client is
/// cheap to clone and safe to share across tasks; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct SirvClient {
    http: Client,
    config: SirvConfig,
}

impl SirvClient {
    /// Creates a client over the given configuration snapshot.
    pub fn new(config: SirvConfig) -> Self {
        SirvClient {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SirvConfig {
        &self.config
    }

    /// Joins an API path onto the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }
}

/// Builds the hard-failure error for an operation: the operation name plus
/// the transport status text, e.g. `get_user_images failed: 502 Bad Gateway`.
pub fn op_error(op: &str, status: StatusCode) -> Box<dyn std::error::Error + Send + Sync> {
    format!("{} failed: {}", op, status).into()
}
