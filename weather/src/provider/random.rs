// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::WeatherProvider;
use crate::{
  constants::FORECAST_DAYS,
  models::weather::{CurrentConditions, Forecast, ForecastEntry},
};
use async_trait::async_trait;
use chrono::{Local, NaiveDate, TimeDelta};
use error::Error;
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use std::{
  sync::{Mutex, MutexGuard},
  time::Duration,
};
use tracing::{debug, instrument};

const CONDITIONS: [&str; 6] = ["Clear", "Clouds", "Rain", "Snow", "Thunderstorm", "Mist"];

/// Stand-in for a real weather service: invents plausible records after a
/// fixed delay.
pub struct RandomProvider {
  rng: Mutex<StdRng>,
  delay: Duration,
  start_date: Option<NaiveDate>,
}

impl RandomProvider {
  pub fn new(delay: Duration) -> Self {
    Self::with_rng(StdRng::from_os_rng(), delay)
  }

  pub fn with_rng(rng: StdRng, delay: Duration) -> Self {
    Self {
      rng: Mutex::new(rng),
      delay,
      start_date: None,
    }
  }

  /// Pins the first forecast day instead of using the local date.
  pub fn with_start_date(mut self, date: NaiveDate) -> Self {
    self.start_date = Some(date);
    self
  }

  fn rng(&self) -> MutexGuard<'_, StdRng> {
    self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  fn pick_condition(rng: &mut StdRng) -> &'static str {
    CONDITIONS.choose(rng).copied().unwrap_or("Clear")
  }

  fn current(&self, location: &str) -> CurrentConditions {
    let mut rng = self.rng();
    let condition = Self::pick_condition(&mut rng);
    let temp = f64::from(rng.random_range(5..=35_i32));

    CurrentConditions {
      location: location.to_string(),
      temp,
      feels_like: temp + f64::from(rng.random_range(-3..=3_i32)),
      humidity: rng.random_range(0..=100),
      wind_speed: (rng.random_range(0.0..10.0_f64) * 10.0).round() / 10.0,
      visibility: Some(f64::from(rng.random_range(5..=15_i32))),
      condition: condition.to_string(),
      condition_desc: format!("{} conditions", condition.to_lowercase()),
    }
  }

  fn forecast(&self) -> Result<Forecast, Error> {
    let start = self.start_date.unwrap_or_else(|| Local::now().date_naive());
    let mut rng = self.rng();

    let entries = (0..FORECAST_DAYS as i64)
      .map(|offset| {
        let condition = Self::pick_condition(&mut rng);
        let high = f64::from(rng.random_range(5..=35_i32));
        let low = high - f64::from(rng.random_range(5..=20_i32));
        ForecastEntry {
          date: start + TimeDelta::days(offset),
          condition: condition.to_string(),
          high,
          low,
          description: format!("{} conditions", condition.to_lowercase()),
        }
      })
      .collect();

    Forecast::new(entries)
  }
}

#[async_trait]
impl WeatherProvider for RandomProvider {
  #[instrument(skip(self))]
  async fn fetch_current_conditions(&self, location: &str) -> Result<CurrentConditions, Error> {
    tokio::time::sleep(self.delay).await;
    let current = self.current(location);
    debug!("Generated {} for {}", current.condition, location);
    Ok(current)
  }

  #[instrument(skip(self))]
  async fn fetch_forecast(&self, _location: &str) -> Result<Forecast, Error> {
    tokio::time::sleep(self.delay).await;
    self.forecast()
  }
}
