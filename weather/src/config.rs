// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::{API_BASE_URL, REQUEST_TIMEOUT};
use error::Error;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
  pub(crate) api_key: String,
  pub(crate) base_url: String,
  pub(crate) timeout: Duration,
}

impl OpenWeatherConfig {
  pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    Ok(Self {
      api_key,
      base_url: API_BASE_URL.to_string(),
      timeout: REQUEST_TIMEOUT,
    })
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}
