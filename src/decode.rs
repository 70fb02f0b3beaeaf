use serde::Deserialize;

use crate::error::FinderError;

/// One record from the crt.sh JSON array. Only the name field matters; crt.sh
/// sends plenty of other fields (issuer, ids, timestamps) which serde skips.
#[derive(Debug, Deserialize)]
pub struct Certificate {
    /// Newline-separated hostnames covered by the certificate.
    pub name_value: String,
}

/// Parse the raw response body as a JSON array of certificate records.
///
/// crt.sh sometimes answers with an HTML error page instead of JSON; that
/// surfaces here as a decode failure rather than anything fancier.
pub fn decode(body: &[u8]) -> Result<Vec<Certificate>, FinderError> {
    let certs = serde_json::from_slice(body)?;
    Ok(certs)
}
