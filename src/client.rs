use {super::*, anyhow::Context};

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
    tracing::debug!(url, "fetching");

    let value = self
      .client
      .get(url)
      .send()
      .await
      .with_context(|| format!("failed to reach {url}"))?
      .error_for_status()?
      .json::<T>()
      .await
      .with_context(|| format!("failed to decode response from {url}"))?;

    tracing::debug!(url, "fetched");

    Ok(value)
  }

  pub(crate) async fn fetch_context(
    &self,
    url: &str,
  ) -> Result<CommentsResponse> {
    self.fetch(url).await
  }

  pub(crate) async fn fetch_status(&self, url: &str) -> Result<Comment> {
    self.fetch(url).await
  }

  pub(crate) fn new() -> Result<Self> {
    Ok(Self {
      client: reqwest::Client::builder()
        .user_agent(Self::USER_AGENT)
        .build()
        .context("failed to build HTTP client")?,
    })
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{header, method, path},
    },
  };

  fn status_json() -> Value {
    serde_json::json!({
      "id": "109372",
      "content": "<p>root</p>",
      "replies_count": 2,
      "reblogs_count": 1,
      "favourites_count": 4,
      "account": {
        "username": "alice",
        "display_name": "Alice",
        "url": "https://social.example/@alice"
      }
    })
  }

  #[tokio::test]
  async fn fetch_status_decodes_comment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/v1/statuses/109372"))
      .and(header("user-agent", Client::USER_AGENT))
      .respond_with(ResponseTemplate::new(200).set_body_json(status_json()))
      .mount(&server)
      .await;

    let comment = Client::new()
      .unwrap()
      .fetch_status(&format!("{}/api/v1/statuses/109372", server.uri()))
      .await
      .unwrap();

    assert_eq!(comment.id, "109372");
    assert_eq!(comment.replies_count, 2);
    assert_eq!(comment.favourites_count, 4);
  }

  #[tokio::test]
  async fn fetch_context_decodes_descendants() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/v1/statuses/109372/context"))
      .respond_with(ResponseTemplate::new(200).set_body_json(
        serde_json::json!({
          "ancestors": [],
          "descendants": [status_json()]
        }),
      ))
      .mount(&server)
      .await;

    let response = Client::new()
      .unwrap()
      .fetch_context(&format!(
        "{}/api/v1/statuses/109372/context",
        server.uri()
      ))
      .await
      .unwrap();

    assert!(response.ancestors.is_empty());
    assert_eq!(response.descendants.len(), 1);
  }

  #[tokio::test]
  async fn error_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .respond_with(
        ResponseTemplate::new(404)
          .set_body_json(serde_json::json!({ "error": "Record not found" })),
      )
      .mount(&server)
      .await;

    let result = Client::new()
      .unwrap()
      .fetch_status(&format!("{}/api/v1/statuses/1", server.uri()))
      .await;

    assert!(result.is_err());
  }

  #[tokio::test]
  async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
      .mount(&server)
      .await;

    let error = Client::new()
      .unwrap()
      .fetch_context(&format!("{}/api/v1/statuses/1/context", server.uri()))
      .await
      .unwrap_err();

    assert!(
      error.to_string().starts_with("failed to decode response from"),
      "unexpected error: {error}"
    );
  }
}
