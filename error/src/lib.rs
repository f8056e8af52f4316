// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("Location not found: {0}")]
  NotFound(String),
  #[error("Weather service unavailable: {0}")]
  ServiceUnavailable(String),
  /// A newer request was issued before this one resolved.
  #[error("Request superseded by a newer one (generation {generation})")]
  Superseded { generation: u64 },
  #[error("Retry is only available after a failed request")]
  RetryUnavailable,
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Configuration error: {0}")]
  ConfigError(String),
}

impl Error {
  pub fn is_superseded(&self) -> bool {
    matches!(self, Error::Superseded { .. })
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::NotFound(_))
  }
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Error::ServiceUnavailable("request timed out".into())
    } else {
      Error::ServiceUnavailable(err.to_string())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_found_message_names_location() {
    let err = Error::NotFound("Nowhere".into());
    assert_eq!(err.to_string(), "Location not found: Nowhere");
    assert!(err.is_not_found());
    assert!(!err.is_superseded());
  }

  #[test]
  fn superseded_is_recognized() {
    assert!(Error::Superseded { generation: 3 }.is_superseded());
  }
}
