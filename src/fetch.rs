//! Remote document fetching
//!
//! Used by the URL-based entry point: both documents are downloaded
//! server-side, then staged and merged through the same workflow as a
//! direct upload. Remote documents honor the same size cap that
//! `DefaultBodyLimit` enforces for direct uploads.

use crate::error::{Error, Result};

/// Download the document at `url` into memory, refusing anything
/// larger than `max_bytes`.
///
/// Non-2xx responses are errors. A declared `Content-Length` over the
/// cap fails fast; otherwise the cap is enforced while streaming. The
/// payload is not inspected here; a non-PDF body surfaces later as a
/// merge failure.
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
    max_bytes: usize,
) -> Result<Vec<u8>> {
    tracing::info!(url, "Fetching remote document");
    let mut response = client.get(url).send().await?.error_for_status()?;

    if let Some(len) = response.content_length() {
        if len as usize > max_bytes {
            return Err(Error::RemoteTooLarge(max_bytes));
        }
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if bytes.len() + chunk.len() > max_bytes {
            return Err(Error::RemoteTooLarge(max_bytes));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CAP: usize = 1024 * 1024;

    #[tokio::test]
    async fn test_fetch_document_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/doc.pdf")
            .with_status(200)
            .with_body(b"%PDF-1.5 fake")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/doc.pdf", server.url());
        let bytes = fetch_document(&client, &url, TEST_CAP).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.5 fake");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_document_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing.pdf")
            .with_status(404)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/missing.pdf", server.url());
        let result = fetch_document(&client, &url, TEST_CAP).await;
        assert!(matches!(result.unwrap_err(), Error::Fetch(_)));
    }

    #[tokio::test]
    async fn test_fetch_document_over_size_cap() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/huge.pdf")
            .with_status(200)
            .with_body(vec![0u8; 4096])
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/huge.pdf", server.url());
        let result = fetch_document(&client, &url, 1024).await;
        assert!(matches!(result.unwrap_err(), Error::RemoteTooLarge(1024)));
    }
}
