// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::condition::{classify, ConditionCategory};
use crate::constants::FORECAST_DAYS;
use chrono::{Duration, NaiveDate};
use error::Error;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
  pub location: String,
  pub temp: f64,
  pub feels_like: f64,
  pub humidity: u8,
  /// Metres per second.
  pub wind_speed: f64,
  /// Kilometres, when the provider reports it.
  pub visibility: Option<f64>,
  pub condition: String,
  pub condition_desc: String,
}

impl CurrentConditions {
  pub fn category(&self) -> ConditionCategory {
    classify(&self.condition)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
  pub date: NaiveDate,
  pub condition: String,
  pub high: f64,
  pub low: f64,
  pub description: String,
}

impl ForecastEntry {
  pub fn category(&self) -> ConditionCategory {
    classify(&self.condition)
  }

  /// "Today", "Tomorrow", or a short label such as "Mon, Oct 20".
  pub fn day_label(&self, today: NaiveDate) -> String {
    if self.date == today {
      "Today".to_string()
    } else if Some(self.date) == today.checked_add_signed(Duration::days(1)) {
      "Tomorrow".to_string()
    } else {
      self.date.format("%a, %b %-d").to_string()
    }
  }
}

/// Five consecutive days of forecast, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast(Vec<ForecastEntry>);

impl Forecast {
  pub fn new(entries: Vec<ForecastEntry>) -> Result<Self, Error> {
    if entries.len() != FORECAST_DAYS {
      return Err(Error::ServiceUnavailable(format!(
        "expected {} forecast entries, got {}",
        FORECAST_DAYS,
        entries.len()
      )));
    }
    if entries.windows(2).any(|pair| pair[0].date >= pair[1].date) {
      return Err(Error::ServiceUnavailable(
        "forecast entries are not in chronological order".into(),
      ));
    }
    Ok(Self(entries))
  }

  pub fn entries(&self) -> &[ForecastEntry] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, ForecastEntry> {
    self.0.iter()
  }
}

impl<'a> IntoIterator for &'a Forecast {
  type Item = &'a ForecastEntry;
  type IntoIter = std::slice::Iter<'a, ForecastEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
