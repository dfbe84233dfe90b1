use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};

pub static MENU_URL: &str = "https://augsburg.my-mensa.de/essen.php?mensa=aug_universitaetsstr_uni";

// the backend answers 403 to requests without a recognizable user agent
static USER_AGENT: &str = "AUX Mensa CLI";

pub fn make_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Fetches the menu page and returns the raw markup. Anything other than a
/// 200 aborts the run with the observed status code.
pub async fn fetch_markup(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::Status(status));
    }
    let start = std::time::Instant::now();
    let text = response.text().await?;
    log::trace!("got {} bytes of markup in {:?}", text.len(), start.elapsed());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    use httpmock::prelude::*;

    #[tokio::test]
    async fn returns_the_body_on_200() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/essen.php")
                .header("user-agent", USER_AGENT);
            then.status(200).body("<html><body>Speiseplan</body></html>");
        });

        let client = make_client();
        let markup = fetch_markup(&client, &server.url("/essen.php"))
            .await
            .unwrap();
        assert_eq!(markup, "<html><body>Speiseplan</body></html>");
        mock.assert();
    }

    #[tokio::test]
    async fn rejects_anything_but_200() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/essen.php");
            then.status(403).body("Forbidden");
        });

        let client = make_client();
        let err = fetch_markup(&client, &server.url("/essen.php"))
            .await
            .unwrap_err();
        match err {
            Error::Status(code) => assert_eq!(code, StatusCode::FORBIDDEN),
            other => panic!("expected a status error, got {other:?}"),
        }
    }
}
