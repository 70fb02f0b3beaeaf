use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Browser-like identification sent with every request. crt.sh occasionally
/// rejects unadorned client UAs, so we present as a desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Build the HTTP client used for the single crt.sh query.
///
/// The timeout covers the whole request/response cycle; there is no retry
/// path, so an expired timeout terminates the run.
pub fn build_client(timeout_secs: u64) -> reqwest::Result<Client> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        .gzip(true)
        .brotli(true)
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(USER_AGENT)
        .build()
}
