//! Thumbnail handlers
//!
//! Uploads land in the configured upload dir under a unique name; the row
//! keeps the original filename, size and mime type. Replacing or deleting
//! a thumbnail removes the old file from disk (best effort).

use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use shared::models::{Thumbnail, ThumbnailPublic};

use crate::api::SearchQuery;
use crate::auth::CurrentUser;
use crate::common::{AppError, AppResult};
use crate::db::repository::thumbnail::{NewThumbnail, ThumbnailChanges};
use crate::db::repository::ThumbnailRepository;
use crate::state::AppState;

/// Maximum upload size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted image extensions
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Text fields plus the uploaded image pulled out of a multipart body.
#[derive(Default)]
struct UploadForm {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    is_active: Option<bool>,
    file: Option<UploadedFile>,
}

struct UploadedFile {
    original_name: String,
    data: Vec<u8>,
    extension: String,
    mime_type: String,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            "url" => form.url = Some(read_text(field).await?),
            "is_active" => {
                let text = read_text(field).await?;
                form.is_active = text.parse().ok();
            }
            "image" | "file" => {
                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .ok_or_else(|| AppError::bad_request("No filename provided"))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(format!("Multipart error: {e}")))?
                    .to_vec();

                form.file = Some(validate_image(original_name, data)?);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::bad_request(format!("Multipart error: {e}")))
}

fn validate_image(original_name: String, data: Vec<u8>) -> Result<UploadedFile, AppError> {
    if data.is_empty() {
        return Err(AppError::bad_request("Empty file provided"));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::bad_request(format!(
            "File too large. Maximum size is {}MB",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    let extension = PathBuf::from(&original_name)
        .extension()
        .and_then(|e| e.to_str().map(|s| s.to_lowercase()))
        .ok_or_else(|| AppError::bad_request("Invalid file extension"))?;

    if !SUPPORTED_FORMATS.contains(&extension.as_str()) {
        return Err(AppError::bad_request(format!(
            "Only image files are allowed. Supported: {}",
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    let mime_type = mime_guess::from_ext(&extension)
        .first()
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| AppError::bad_request("Only image files are allowed"))?
        .to_string();

    Ok(UploadedFile {
        original_name,
        data,
        extension,
        mime_type,
    })
}

/// Write the upload under a unique name and return the serving path.
fn store_file(upload_dir: &str, file: &UploadedFile) -> Result<String, AppError> {
    fs::create_dir_all(upload_dir)
        .map_err(|e| AppError::internal(format!("Failed to create upload dir: {e}")))?;

    let stored_name = format!("{}.{}", Uuid::new_v4(), file.extension);
    let path = PathBuf::from(upload_dir).join(&stored_name);
    fs::write(&path, &file.data)
        .map_err(|e| AppError::internal(format!("Failed to save file: {e}")))?;

    Ok(format!("/uploads/{stored_name}"))
}

/// Best-effort removal of a previously stored file.
fn remove_stored_file(upload_dir: &str, image_url: &str) {
    if let Some(name) = image_url.strip_prefix("/uploads/") {
        let path = PathBuf::from(upload_dir).join(name);
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove stored file");
        }
    }
}

/// POST /thumbnails/admin - multipart upload
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Thumbnail>)> {
    let form = read_form(multipart).await?;

    let title = form
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::bad_request("Title is required"))?;
    let file = form
        .file
        .as_ref()
        .ok_or_else(|| AppError::bad_request("Image file is required"))?;

    let image_url = store_file(&state.config.upload_dir, file)?;

    let repo = ThumbnailRepository::new(state.pool.clone());
    let thumb = repo
        .create(
            &NewThumbnail {
                title,
                description: form.description.as_deref(),
                image_url: &image_url,
                original_file_name: &file.original_name,
                file_size: file.data.len() as i64,
                mime_type: &file.mime_type,
                url: form.url.as_deref(),
            },
            user.id,
        )
        .await?;

    tracing::info!(
        thumbnail_id = thumb.id,
        size = file.data.len(),
        "Thumbnail uploaded"
    );

    Ok((StatusCode::CREATED, Json(thumb)))
}

/// PUT /thumbnails/admin/{id} - multipart; a new image replaces the old
/// file on disk.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> AppResult<Json<Thumbnail>> {
    let repo = ThumbnailRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Thumbnail not found"))?;

    let form = read_form(multipart).await?;

    let mut changes = ThumbnailChanges {
        title: form.title.as_deref(),
        description: form.description.as_deref(),
        url: form.url.as_deref(),
        is_active: form.is_active,
        ..Default::default()
    };

    let new_image_url = match form.file.as_ref() {
        Some(file) => Some((store_file(&state.config.upload_dir, file)?, file)),
        None => None,
    };
    if let Some((ref image_url, file)) = new_image_url {
        changes.image_url = Some(image_url.as_str());
        changes.original_file_name = Some(&file.original_name);
        changes.file_size = Some(file.data.len() as i64);
        changes.mime_type = Some(&file.mime_type);
    }

    let thumb = repo.update(id, &changes, user.id).await?;

    if new_image_url.is_some() {
        remove_stored_file(&state.config.upload_dir, &existing.image_url);
    }

    Ok(Json(thumb))
}

/// DELETE /thumbnails/admin/{id} - soft delete, removes the stored file
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = ThumbnailRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Thumbnail not found"))?;

    repo.soft_delete(id, user.id).await?;
    remove_stored_file(&state.config.upload_dir, &existing.image_url);

    Ok(Json(serde_json::json!({ "message": "Thumbnail deleted" })))
}

pub async fn admin_list(State(state): State<AppState>) -> AppResult<Json<Vec<Thumbnail>>> {
    let repo = ThumbnailRepository::new(state.pool.clone());
    Ok(Json(repo.find_all_with_inactive().await?))
}

pub async fn admin_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Thumbnail>> {
    let repo = ThumbnailRepository::new(state.pool.clone());
    let thumb = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Thumbnail not found"))?;
    Ok(Json(thumb))
}

/// GET /thumbnails - public projection, active only
pub async fn public_list(State(state): State<AppState>) -> AppResult<Json<Vec<ThumbnailPublic>>> {
    let repo = ThumbnailRepository::new(state.pool.clone());
    let thumbs = repo.find_active().await?;
    Ok(Json(thumbs.into_iter().map(Into::into).collect()))
}

pub async fn public_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ThumbnailPublic>> {
    let repo = ThumbnailRepository::new(state.pool.clone());
    let thumb = repo
        .find_by_id(id)
        .await?
        .filter(|t| t.is_active)
        .ok_or_else(|| AppError::not_found("Thumbnail not found"))?;
    Ok(Json(thumb.into()))
}

pub async fn public_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<ThumbnailPublic>>> {
    let repo = ThumbnailRepository::new(state.pool.clone());
    let thumbs = match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => repo.search(term).await?,
        None => repo.find_active().await?,
    };
    Ok(Json(thumbs.into_iter().map(Into::into).collect()))
}
