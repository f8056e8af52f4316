// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod controller;
pub mod models;
pub mod presentation;
pub mod provider;
pub mod render;
pub mod search;

pub use crate::config::OpenWeatherConfig;
pub use controller::{Phase, ViewController, ViewState, WeatherView};
pub use models::condition::{classify, ConditionCategory};
pub use models::weather::{CurrentConditions, Forecast, ForecastEntry};
pub use presentation::{present, DrizzleStyle, PresentationConfig, Presenter};
pub use provider::{OpenWeatherClient, RandomProvider, WeatherProvider};
pub use search::LocationSearch;

pub mod constants {
  use std::time::Duration;
  pub(crate) const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
  pub const FORECAST_DAYS: usize = 5;
}
