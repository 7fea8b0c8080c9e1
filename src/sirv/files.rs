use std::collections::HashMap;

use chrono::Utc;
use reqwest::{StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    Res, info,
    types::{
        FileStat, MediaRecord, OwnerMarker, Privilege, SearchHit, SearchRequest, SearchResponse,
    },
    utils::media_id_from_filename,
    warning,
};

use super::{SirvClient, op_error};

/// Marker file written into each user directory; never surfaced as media.
pub const OWNER_MARKER_FILENAME: &str = "uid.txt";

/// Root directory under which per-user media lives.
pub const USERS_ROOT: &str = "/users";

/// Extensions accepted as displayable images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "avif"];

const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";

impl SirvClient {
    /// Retrieves the images owned by one user, newest first.
    ///
    /// Searches the user's directory on Sirv, filters the hits down to actual
    /// image files (dropping the owner marker and anything in trash), and
    /// maps each hit into a [`MediaRecord`] carrying a deterministic
    /// `media_id` derived from the file path.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - UUID of the owning user; scopes the search to
    ///   `/users/{owner_id}`
    /// * `page_size` - Maximum number of hits requested from the API
    /// * `token` - Optional pre-acquired token; a read-only token is acquired
    ///   when absent
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok((Vec<MediaRecord>, Vec<Uuid>))` - Records sorted by creation time
    ///   descending, and their derived media ids in the same order
    /// - `Err` - Transport failure, or any non-200 status (the error message
    ///   carries the operation name and status text)
    ///
    /// # Example
    ///
    /// ```
    /// let (images, ids) = client.get_user_images(&uuid, 40, None).await?;
    /// for (record, id) in images.iter().zip(&ids) {
    ///     println!("{} -> {}", record.filename, id);
    /// }
    /// ```
    pub async fn get_user_images(
        &self,
        owner_id: &str,
        page_size: u32,
        token: Option<String>,
    ) -> Res<(Vec<MediaRecord>, Vec<Uuid>)> {
        let token = self.resolve_token(token, Privilege::ReadOnly).await?;
        let request = owner_scope_query(owner_id, page_size);

        let response = self
            .http
            .post(self.endpoint("/files/search"))
            .bearer_auth(&token)
            .json(&request)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(op_error("get_user_images", response.status()));
        }

        let body: SearchResponse = response.json().await?;
        let media = map_user_hits(body.hits, owner_id);
        let media_ids = media.iter().map(|m| m.media_id).collect();

        Ok((media, media_ids))
    }

    /// Looks up media records for an explicit list of file paths.
    ///
    /// An empty input short-circuits to an empty result without a network
    /// call. The returned records carry no owner (the caller asked by path,
    /// not by user) and their metadata is reduced to width, height and
    /// format.
    ///
    /// # Arguments
    ///
    /// * `filenames` - Full Sirv file paths, e.g. `/users/{uuid}/photo.jpg`
    /// * `token` - Optional pre-acquired token; read-only acquisition when
    ///   absent
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok((Vec<MediaRecord>, Vec<Uuid>))` - One record per hit plus the
    ///   derived media ids
    /// - `Err` - Transport failure or any non-200 status
    pub async fn get_media_by_filenames(
        &self,
        filenames: &[String],
        token: Option<String>,
    ) -> Res<(Vec<MediaRecord>, Vec<Uuid>)> {
        if filenames.is_empty() {
            return Ok((Vec::new(), Vec::new()));
        }

        let token = self.resolve_token(token, Privilege::ReadOnly).await?;
        let request = filenames_query(filenames);

        let response = self
            .http
            .post(self.endpoint("/files/search"))
            .bearer_auth(&token)
            .json(&request)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(op_error("get_media_by_filenames", response.status()));
        }

        let body: SearchResponse = response.json().await?;
        let media = map_filename_hits(body.hits);
        let media_ids = media.iter().map(|m| m.media_id).collect();

        Ok((media, media_ids))
    }

    /// Fetches the metadata of a single file.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - UUID of the owning user, recorded on the result
    /// * `filename` - Full Sirv file path to stat
    /// * `token` - Optional pre-acquired token; read-only acquisition when
    ///   absent
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(MediaRecord)` - The file's metadata with owner set
    /// - `Err` - Transport failure or any non-200 status
    pub async fn stat_file(
        &self,
        owner_id: &str,
        filename: &str,
        token: Option<String>,
    ) -> Res<MediaRecord> {
        let token = self.resolve_token(token, Privilege::ReadOnly).await?;

        let response = self
            .http
            .get(self.endpoint("/files/stat"))
            .query(&[("filename", filename)])
            .bearer_auth(&token)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(op_error("stat_file", response.status()));
        }

        let stat: FileStat = response.json().await?;
        Ok(record_from_stat(stat, filename, owner_id))
    }

    /// Lists a user's directory on Sirv.
    ///
    /// The raw listing is currently only logged; the call always resolves to
    /// `Ok(None)` on success. The surrounding site has no consumer for the
    /// listing yet, so no richer contract is offered.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(None)` - The listing was fetched (and logged)
    /// - `Err` - Transport failure or any non-200 status
    pub async fn read_user_dir(&self, owner_id: &str, token: Option<String>) -> Res<Option<Value>> {
        let token = self.resolve_token(token, Privilege::ReadOnly).await?;

        let response = self
            .http
            .get(self.endpoint("/files/readdir"))
            .query(&[("dirname", user_dir(owner_id).as_str())])
            .bearer_auth(&token)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(op_error("read_user_dir", response.status()));
        }

        let listing: Value = response.json().await?;
        info!("readdir {}: {}", user_dir(owner_id), listing);

        Ok(None)
    }

    /// Creates the per-user media directory.
    ///
    /// Best-effort: any failure (transport or status) is logged and reported
    /// as `false` rather than raised. Callers invoke this on every profile
    /// touch, so the directory usually exists already and a failed mkdir is
    /// expected.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - UUID of the user whose directory is created
    ///
    /// # Returns
    ///
    /// `true` when the API answered with a 200–204 status, `false` otherwise.
    pub async fn create_user_dir(&self, owner_id: &str) -> bool {
        match self.try_create_user_dir(owner_id).await {
            Ok(created) => created,
            Err(e) => {
                warning!("create_user_dir {}: {}", owner_id, e);
                false
            }
        }
    }

    async fn try_create_user_dir(&self, owner_id: &str) -> Res<bool> {
        let token = self.resolve_token(None, Privilege::Admin).await?;

        let response = self
            .http
            .post(self.endpoint("/files/mkdir"))
            .query(&[("dirname", user_dir(owner_id).as_str())])
            .bearer_auth(&token)
            .send()
            .await?;

        Ok(is_write_success(response.status()))
    }

    /// Uploads raw image bytes to the given path.
    ///
    /// # Arguments
    ///
    /// * `filename` - Full Sirv destination path
    /// * `bytes` - Raw image bytes; sent with an `image/jpeg` content type
    /// * `token` - Optional pre-acquired token; an admin token is acquired
    ///   when absent
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(String)` - The destination filename, on a 200–204 status
    /// - `Err` - Transport failure or any other status
    pub async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        token: Option<String>,
    ) -> Res<String> {
        let token = self.resolve_token(token, Privilege::Admin).await?;

        let response = self
            .http
            .post(self.endpoint("/files/upload"))
            .query(&[("filename", filename)])
            .bearer_auth(&token)
            .header(CONTENT_TYPE, UPLOAD_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await?;

        if !is_write_success(response.status()) {
            return Err(op_error("upload", response.status()));
        }

        Ok(filename.to_string())
    }

    /// Deletes a file.
    ///
    /// # Arguments
    ///
    /// * `filename` - Full Sirv path of the file to remove
    /// * `token` - Optional pre-acquired token; an admin token is acquired
    ///   when absent
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(String)` - The deleted filename, on a 200–204 status
    /// - `Err` - Transport failure or any other status
    pub async fn delete_file(&self, filename: &str, token: Option<String>) -> Res<String> {
        let token = self.resolve_token(token, Privilege::Admin).await?;

        let response = self
            .http
            .post(self.endpoint("/files/delete"))
            .query(&[("filename", filename)])
            .bearer_auth(&token)
            .send()
            .await?;

        if !is_write_success(response.status()) {
            return Err(op_error("delete_file", response.status()));
        }

        Ok(filename.to_string())
    }

    /// Writes the owner-marker file recording which user a directory belongs
    /// to.
    ///
    /// The marker body is `{"uuid": <owner lowercased>, "timestamp": <unix
    /// millis>}`. Best-effort bookkeeping: any failure is logged and reported
    /// as `false`.
    ///
    /// # Arguments
    ///
    /// * `filename` - Full Sirv destination path of the marker
    /// * `owner_id` - UUID of the owning user, lowercased into the body
    /// * `token` - Optional pre-acquired token; admin acquisition when absent
    pub async fn write_owner_marker(
        &self,
        filename: &str,
        owner_id: &str,
        token: Option<String>,
    ) -> bool {
        match self.try_write_owner_marker(filename, owner_id, token).await {
            Ok(written) => written,
            Err(e) => {
                warning!("write_owner_marker {}: {}", filename, e);
                false
            }
        }
    }

    async fn try_write_owner_marker(
        &self,
        filename: &str,
        owner_id: &str,
        token: Option<String>,
    ) -> Res<bool> {
        let token = self.resolve_token(token, Privilege::Admin).await?;
        let marker = OwnerMarker {
            uuid: owner_id.to_lowercase(),
            timestamp: Utc::now().timestamp_millis(),
        };

        let response = self
            .http
            .post(self.endpoint("/files/upload"))
            .query(&[("filename", filename)])
            .bearer_auth(&token)
            .json(&marker)
            .send()
            .await?;

        Ok(is_write_success(response.status()))
    }
}

/// Whether a write-style operation's status counts as success (200–204).
pub fn is_write_success(status: StatusCode) -> bool {
    (200..=204).contains(&status.as_u16())
}

pub fn user_dir(owner_id: &str) -> String {
    format!("{}/{}", USERS_ROOT, owner_id)
}

/// Search request scoped to one user's directory, excluding trashed files,
/// newest first.
pub fn owner_scope_query(owner_id: &str, page_size: u32) -> SearchRequest {
    SearchRequest {
        query: format!(
            "dirname:{dir} AND -dirname:*.Trash*",
            dir = user_dir(owner_id)
        ),
        sort: HashMap::from([("ctime".to_string(), "desc".to_string())]),
        from: 0,
        size: page_size,
    }
}

/// Search request matching an explicit list of file paths.
pub fn filenames_query(filenames: &[String]) -> SearchRequest {
    let query = filenames
        .iter()
        .map(|f| format!("filename:\"{}\"", f))
        .collect::<Vec<_>>()
        .join(" OR ");

    SearchRequest {
        query,
        sort: HashMap::new(),
        from: 0,
        size: filenames.len() as u32,
    }
}

pub fn is_image_filename(filename: &str) -> bool {
    let lowered = filename.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(&format!(".{}", ext)))
}

/// Maps owner-scoped search hits into media records: image files only, the
/// owner marker dropped, sorted by creation time descending.
pub fn map_user_hits(hits: Vec<SearchHit>, owner_id: &str) -> Vec<MediaRecord> {
    let mut media: Vec<MediaRecord> = hits
        .into_iter()
        .map(|hit| hit.source)
        .filter(|source| {
            source.filename != OWNER_MARKER_FILENAME && is_image_filename(&source.filename)
        })
        .map(|source| {
            let path = format!("{}/{}", source.dirname, source.filename);
            MediaRecord {
                owner_id: Some(owner_id.to_string()),
                media_id: media_id_from_filename(&path),
                filename: path,
                ctime: source.ctime,
                mtime: source.mtime,
                content_type: source.content_type,
                meta: source.meta,
            }
        })
        .collect();

    media.sort_by(|a, b| b.ctime.cmp(&a.ctime));
    media
}

/// Maps filename-lookup hits into media records with no owner attached.
pub fn map_filename_hits(hits: Vec<SearchHit>) -> Vec<MediaRecord> {
    hits.into_iter()
        .map(|hit| {
            let source = hit.source;
            let path = format!("{}/{}", source.dirname, source.filename);
            MediaRecord {
                owner_id: None,
                media_id: media_id_from_filename(&path),
                filename: path,
                ctime: source.ctime,
                mtime: source.mtime,
                content_type: source.content_type,
                meta: source.meta,
            }
        })
        .collect()
}

fn record_from_stat(stat: FileStat, filename: &str, owner_id: &str) -> MediaRecord {
    MediaRecord {
        owner_id: Some(owner_id.to_string()),
        media_id: media_id_from_filename(filename),
        filename: filename.to_string(),
        ctime: stat.ctime,
        mtime: stat.mtime,
        content_type: stat.content_type,
        meta: stat.meta,
    }
}
