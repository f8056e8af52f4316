// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  controller::{Phase, ViewState, WeatherView},
  models::weather::{CurrentConditions, Forecast},
  presentation::{present, Icon, MotionDirection, PresentationConfig},
};
use chrono::NaiveDate;
use std::fmt::Write;

fn glyph(icon: Icon) -> &'static str {
  match icon {
    Icon::Sun => "☀️",
    Icon::Cloud => "☁️",
    Icon::CloudRain => "🌧️",
    Icon::CloudSnow => "🌨️",
    Icon::Zap => "⚡",
  }
}

fn degrees(value: f64) -> i64 {
  value.round() as i64
}

pub fn render_state(state: &ViewState, today: NaiveDate) -> String {
  match &state.phase {
    Phase::Loading => format!("Loading weather for {}...", state.location),
    Phase::Error { message } => format!(
      "Weather Unavailable\nError: {}\nType `retry` to try again.",
      message
    ),
    Phase::Ready(view) => render_view(view, today),
  }
}

pub fn render_view(view: &WeatherView, today: NaiveDate) -> String {
  format!(
    "{}\n{}\n{}",
    render_current(&view.current, &view.presentation),
    render_forecast(&view.forecast, today),
    render_background(&view.presentation),
  )
}

pub fn render_current(current: &CurrentConditions, presentation: &PresentationConfig) -> String {
  let visibility = current
    .visibility
    .map_or("N/A".to_string(), |km| format!("{}km", km));

  format!(
    "**{}**\n{} {}°  {}\nFeels like {}°\nHumidity {}% | Wind {} m/s | Visibility {}\n",
    current.location,
    glyph(presentation.icon),
    degrees(current.temp),
    current.condition_desc,
    degrees(current.feels_like),
    current.humidity,
    current.wind_speed,
    visibility,
  )
}

pub fn render_forecast(forecast: &Forecast, today: NaiveDate) -> String {
  let mut out = String::from("5-Day Forecast\n");
  for entry in forecast {
    // writing into a String cannot fail
    let _ = writeln!(
      out,
      "{:<12} {} {}° / {}°  {}",
      entry.day_label(today),
      glyph(present(entry.category()).icon),
      degrees(entry.high),
      degrees(entry.low),
      entry.description,
    );
  }
  out
}

pub fn render_background(presentation: &PresentationConfig) -> String {
  let gradient = presentation.backdrop.stops().join(" → ");
  match presentation.particles {
    Some(field) => {
      let motion = match field.direction {
        MotionDirection::AmbientDrift => "drifting",
        MotionDirection::Downward => "falling",
        MotionDirection::Diagonal => "slanting",
      };
      format!("Background: {} with {} {} particles", gradient, field.count, motion)
    }
    None => format!("Background: {}", gradient),
  }
}
