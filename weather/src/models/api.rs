// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::weather::{CurrentConditions, Forecast, ForecastEntry};
use crate::constants::FORECAST_DAYS;
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use error::Error;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherResponse {
  pub weather: Vec<Weather>,
  pub main: MainWeather,
  pub wind: Wind,
  /// Metres.
  pub visibility: Option<f64>,
  pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Weather {
  pub main: String,
  pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainWeather {
  pub temp: f64,
  pub feels_like: f64,
  pub humidity: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Wind {
  pub speed: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastResponse {
  pub list: Vec<ForecastItem>,
  pub city: City,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastItem {
  pub dt: i64,
  pub main: ForecastMain,
  pub weather: Vec<Weather>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastMain {
  pub temp_min: f64,
  pub temp_max: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct City {
  pub name: String,
  /// Offset from UTC in seconds.
  pub timezone: i32,
}

impl TryFrom<WeatherResponse> for CurrentConditions {
  type Error = Error;

  fn try_from(response: WeatherResponse) -> Result<Self, Error> {
    let weather = response
      .weather
      .into_iter()
      .next()
      .ok_or_else(|| Error::ServiceUnavailable("No weather data available".into()))?;

    Ok(Self {
      location: response.name,
      temp: response.main.temp,
      feels_like: response.main.feels_like,
      humidity: response.main.humidity,
      wind_speed: response.wind.speed,
      visibility: response.visibility.map(|metres| metres / 1000.0),
      condition: weather.main,
      condition_desc: weather.description,
    })
  }
}

#[derive(Debug, Default)]
struct DaySummary {
  high: Option<f64>,
  low: Option<f64>,
  /// (condition, occurrences, first description) in first-seen order.
  conditions: Vec<(String, usize, String)>,
}

impl DaySummary {
  fn add(&mut self, item: ForecastItem) {
    self.high = Some(self.high.map_or(item.main.temp_max, |h| h.max(item.main.temp_max)));
    self.low = Some(self.low.map_or(item.main.temp_min, |l| l.min(item.main.temp_min)));

    if let Some(weather) = item.weather.into_iter().next() {
      match self.conditions.iter_mut().find(|(main, _, _)| *main == weather.main) {
        Some((_, count, _)) => *count += 1,
        None => self.conditions.push((weather.main, 1, weather.description)),
      }
    }
  }

  fn into_entry(self, date: NaiveDate) -> Option<ForecastEntry> {
    let mut dominant: Option<(String, usize, String)> = None;
    for candidate in self.conditions {
      if dominant.as_ref().map_or(true, |(_, best, _)| candidate.1 > *best) {
        dominant = Some(candidate);
      }
    }
    let (condition, _, description) = dominant?;

    Some(ForecastEntry {
      date,
      condition,
      high: self.high?,
      low: self.low?,
      description,
    })
  }
}

/// Collapses the 3-hourly list into one entry per local calendar day and keeps
/// the first five days.
pub(crate) fn daily_forecast(response: ForecastResponse) -> Result<Forecast, Error> {
  let offset = FixedOffset::east_opt(response.city.timezone)
    .ok_or_else(|| Error::ServiceUnavailable("Invalid timezone offset".into()))?;

  let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();
  for item in response.list {
    let date = Utc
      .timestamp_opt(item.dt, 0)
      .single()
      .ok_or_else(|| Error::ServiceUnavailable(format!("Invalid forecast timestamp {}", item.dt)))?
      .with_timezone(&offset)
      .date_naive();
    days.entry(date).or_default().add(item);
  }

  let entries = days
    .into_iter()
    .filter_map(|(date, summary)| summary.into_entry(date))
    .take(FORECAST_DAYS)
    .collect();

  Forecast::new(entries)
}
