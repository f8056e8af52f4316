// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::WeatherProvider;
use crate::{
  config::OpenWeatherConfig,
  models::{
    api::{daily_forecast, ForecastResponse, WeatherResponse},
    weather::{CurrentConditions, Forecast},
  },
};
use async_trait::async_trait;
use error::Error;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{error, instrument};
use url::Url;

pub struct OpenWeatherClient {
  config: OpenWeatherConfig,
  client: Client,
}

impl OpenWeatherClient {
  pub fn new(config: OpenWeatherConfig) -> Result<Self, Error> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| Error::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { config, client })
  }

  fn build_api_url(&self, endpoint: &str, location: &str) -> Result<Url, Error> {
    Url::parse_with_params(
      &format!("{}/{}", self.config.base_url, endpoint),
      &[
        ("q", location),
        ("appid", self.config.api_key.as_str()),
        ("units", "metric"),
      ],
    )
    .map_err(|e| Error::ConfigError(format!("Failed to build API URL: {}", e)))
  }

  async fn get<T: DeserializeOwned>(&self, endpoint: &str, location: &str) -> Result<T, Error> {
    if location.trim().is_empty() {
      return Err(Error::NotFound("empty location".into()));
    }

    let url = self.build_api_url(endpoint, location)?;
    let response = self.client.get(url).send().await?;

    match response.status() {
      status if status.is_success() => (),
      StatusCode::NOT_FOUND => return Err(Error::NotFound(location.to_string())),
      StatusCode::TOO_MANY_REQUESTS => {
        return Err(Error::ServiceUnavailable("rate limit exceeded".into()))
      }
      status => {
        error!("API request failed with status: {}", status);
        return Err(Error::ServiceUnavailable(format!("API request failed: {}", status)));
      }
    }

    response
      .json()
      .await
      .map_err(|e| Error::ServiceUnavailable(format!("Failed to parse {} response: {}", endpoint, e)))
  }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
  #[instrument(skip(self))]
  async fn fetch_current_conditions(&self, location: &str) -> Result<CurrentConditions, Error> {
    let response: WeatherResponse = self.get("weather", location).await?;
    CurrentConditions::try_from(response)
  }

  #[instrument(skip(self))]
  async fn fetch_forecast(&self, location: &str) -> Result<Forecast, Error> {
    let response: ForecastResponse = self.get("forecast", location).await?;
    daily_forecast(response)
  }
}
