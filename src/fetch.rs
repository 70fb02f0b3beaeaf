use reqwest::Client;

use crate::error::FinderError;

/// Issue the single GET against the crt.sh search endpoint and return the raw
/// response body. One attempt only; any failure terminates the lookup.
pub async fn fetch(client: &Client, domain: &str) -> Result<Vec<u8>, FinderError> {
    let url = format!(
        "https://crt.sh/?q={}&output=json",
        urlencoding::encode(domain)
    );
    tracing::debug!(%url, "querying crt.sh");

    let resp = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(FinderError::Network)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FinderError::HttpStatus(status));
    }

    let body = resp.bytes().await.map_err(FinderError::Read)?;
    Ok(body.to_vec())
}
