//! Request body extractor accepting JSON or multipart form data.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// A file part received in a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field the file was sent under
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Body that may arrive as `application/json` or `multipart/form-data`.
///
/// For multipart bodies the text parts are deserialized into `T` as if they were a
/// url-encoded form, and file parts are collected in `files`. Empty text parts are
/// treated as absent.
#[derive(Debug)]
pub struct JsonOrMultipart<T> {
    pub data: T,
    pub files: Vec<UploadedFile>,
}

impl<T> JsonOrMultipart<T> {
    /// Removes and returns the first file sent under `field`.
    pub fn take_file(&mut self, field: &str) -> Option<UploadedFile> {
        let index = self.files.iter().position(|f| f.field == field)?;
        Some(self.files.remove(index))
    }
}

impl<T, S> FromRequest<S> for JsonOrMultipart<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        if !is_multipart {
            let Json(data) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;

            return Ok(Self {
                data,
                files: Vec::new(),
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut text_fields: Vec<(String, String)> = Vec::new();
        let mut files = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    files.push(UploadedFile {
                        field: name,
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    if !value.is_empty() {
                        text_fields.push((name, value));
                    }
                }
            }
        }

        let data = decode_form(&text_fields)?;

        Ok(Self { data, files })
    }
}

/// Deserializes multipart text parts through the url-encoded form deserializer.
fn decode_form<T: DeserializeOwned>(fields: &[(String, String)]) -> Result<T, AppError> {
    let encoded =
        serde_urlencoded::to_string(fields).map_err(|e| AppError::BadRequest(e.to_string()))?;

    serde_urlencoded::from_str(&encoded)
        .map_err(|e| AppError::BadRequest(format!("Invalid form data: {}", e)))
}
