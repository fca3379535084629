use super::*;

#[derive(Debug, Error)]
pub(crate) enum EndpointError {
  #[error("`{src}` has no host")]
  MissingHost { src: String },
  #[error("`{src}` does not end with a status id")]
  MissingStatusId { src: String },
  #[error("`{src}` is not a valid URL")]
  Parse {
    src: String,
    #[source]
    source: url::ParseError,
  },
}

/// The API endpoints backing one post permalink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Endpoint {
  host: String,
  id: String,
}

impl Endpoint {
  pub(crate) fn context_url(&self) -> String {
    format!("{}/context", self.status_url())
  }

  pub(crate) fn host(&self) -> &str {
    &self.host
  }

  pub(crate) fn id(&self) -> &str {
    &self.id
  }

  /// Resolves a permalink such as `https://host/@user/123` to the status
  /// with id `123` on `host`. The id is the last path segment; query and
  /// fragment are ignored and a trailing slash is rejected.
  pub(crate) fn resolve(src: &str) -> Result<Self, EndpointError> {
    let url = Url::parse(src).map_err(|source| EndpointError::Parse {
      src: src.to_string(),
      source,
    })?;

    let host = url
      .host_str()
      .filter(|host| !host.is_empty())
      .ok_or_else(|| EndpointError::MissingHost {
        src: src.to_string(),
      })?;

    let id = url
      .path_segments()
      .and_then(|mut segments| segments.next_back())
      .filter(|segment| !segment.is_empty())
      .ok_or_else(|| EndpointError::MissingStatusId {
        src: src.to_string(),
      })?;

    Ok(Self {
      host: host.to_string(),
      id: id.to_string(),
    })
  }

  pub(crate) fn status_url(&self) -> String {
    format!("https://{}/api/v1/statuses/{}", self.host, self.id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolves_status_and_context_urls() {
    let endpoint = Endpoint::resolve("https://host.example/path/123").unwrap();

    assert_eq!(
      endpoint.status_url(),
      "https://host.example/api/v1/statuses/123"
    );

    assert_eq!(
      endpoint.context_url(),
      "https://host.example/api/v1/statuses/123/context"
    );
  }

  #[test]
  fn resolves_user_permalink() {
    let endpoint =
      Endpoint::resolve("https://example.com/@user/456789").unwrap();

    assert_eq!(endpoint.id(), "456789");
    assert_eq!(endpoint.host(), "example.com");
  }

  #[test]
  fn api_url_is_always_https_without_port() {
    let endpoint =
      Endpoint::resolve("http://example.com:3000/@user/42").unwrap();

    assert_eq!(endpoint.status_url(), "https://example.com/api/v1/statuses/42");
  }

  #[test]
  fn query_and_fragment_are_ignored() {
    let endpoint =
      Endpoint::resolve("https://example.com/@user/42?ref=feed#top").unwrap();

    assert_eq!(endpoint.id(), "42");
  }

  #[test]
  fn trailing_slash_is_rejected() {
    assert!(matches!(
      Endpoint::resolve("https://example.com/@user/42/"),
      Err(EndpointError::MissingStatusId { .. })
    ));
  }

  #[test]
  fn bare_host_is_rejected() {
    assert!(matches!(
      Endpoint::resolve("https://example.com"),
      Err(EndpointError::MissingStatusId { .. })
    ));
  }

  #[test]
  fn relative_url_is_rejected() {
    assert!(matches!(
      Endpoint::resolve("/@user/42"),
      Err(EndpointError::Parse { .. })
    ));
  }

  #[test]
  fn url_without_host_is_rejected() {
    assert!(matches!(
      Endpoint::resolve("mailto:someone/42"),
      Err(EndpointError::MissingHost { .. })
    ));
  }

  #[test]
  fn error_names_the_source() {
    let error = Endpoint::resolve("nope").unwrap_err();

    assert_eq!(error.to_string(), "`nope` is not a valid URL");
  }
}
