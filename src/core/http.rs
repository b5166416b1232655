//! HTTP utilities for fetching raw dataset files

use crate::Result;
use reqwest::Client;
use tracing::debug;

/// Raw-file base of the public FPL data repository; the season directory
/// (e.g. `2024-25`) and file name are appended.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/vaastav/Fantasy-Premier-League/master/data";

/// Build the HTTP client used for dataset downloads.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("fpl-season/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// GET `url` and return the body as text. Non-2xx statuses are errors.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    debug!(url, "fetching");
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FplError;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_fetch_text_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024-25/teams.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("id,name,short_name\n"))
            .mount(&mock_server)
            .await;

        let client = http_client().unwrap();
        let url = format!("{}/2024-25/teams.csv", mock_server.uri());
        let body = fetch_text(&client, &url).await.unwrap();
        assert_eq!(body, "id,name,short_name\n");
    }

    #[tokio::test]
    async fn test_fetch_text_not_found_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = http_client().unwrap();
        let url = format!("{}/2024-25/missing.csv", mock_server.uri());
        match fetch_text(&client, &url).await {
            Err(FplError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }
}
