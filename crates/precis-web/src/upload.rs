use axum::extract::Multipart;

use crate::errors::AppError;

/// An uploaded file with its data and display name.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse a multipart form upload, requiring the `pdfFile` field.
///
/// Unknown fields are drained and ignored. A readable form without the file
/// field is a client error, same as an empty form.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "pdfFile" {
            let filename = field.file_name().unwrap_or("upload.pdf").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Multipart(e.to_string()))?
                .to_vec();
            file = Some(UploadedFile { filename, data });
        } else {
            let _ = field.bytes().await;
        }
    }

    file.ok_or(AppError::MissingFile)
}
