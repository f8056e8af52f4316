// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod openweather;
mod random;

pub use openweather::OpenWeatherClient;
pub use random::RandomProvider;

use crate::models::weather::{CurrentConditions, Forecast};
use async_trait::async_trait;
use error::Error;

/// Source of weather records for a free-text location.
///
/// Implementations fail with [`Error::NotFound`] when the location cannot be
/// resolved and [`Error::ServiceUnavailable`] for anything else.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn fetch_current_conditions(&self, location: &str) -> Result<CurrentConditions, Error>;

  async fn fetch_forecast(&self, location: &str) -> Result<Forecast, Error>;
}
