//! Multipart parsing and validation for resume uploads.

use axum::extract::Multipart;
use bytes::Bytes;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::DocumentKind;

pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Raw fields of an upload form. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub job_id: Option<String>,
    pub uploaded_by: Option<String>,
}

impl UploadForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("file") => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await?;
                    form.file = Some(UploadedFile { filename, data });
                }
                Some("job_id") => form.job_id = Some(field.text().await?),
                Some("uploaded_by") => form.uploaded_by = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }

    pub fn job_id(&self) -> Result<Uuid, AppError> {
        let raw = self
            .job_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("job_id is required".to_string()))?;
        Uuid::parse_str(raw)
            .map_err(|_| AppError::Validation(format!("job_id '{raw}' is not a valid UUID")))
    }

    pub fn uploaded_by(&self) -> Option<&str> {
        self.uploaded_by
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Checks presence, size and extension. Returns the file with its detected kind.
pub fn validate_file(
    file: Option<UploadedFile>,
    max_bytes: usize,
) -> Result<(UploadedFile, DocumentKind), AppError> {
    let file = file.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

    if file.filename.trim().is_empty() {
        return Err(AppError::Validation("Uploaded file has no filename".to_string()));
    }
    if file.data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if file.data.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File is {} bytes; the limit is {max_bytes} bytes",
            file.data.len()
        )));
    }

    let kind = DocumentKind::from_filename(&file.filename)
        .ok_or_else(|| AppError::UnsupportedMediaType(UNSUPPORTED_FORMAT.to_string()))?;

    Ok((file, kind))
}
