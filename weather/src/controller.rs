// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  models::{
    condition::ConditionCategory,
    weather::{CurrentConditions, Forecast},
  },
  presentation::{PresentationConfig, Presenter},
  provider::WeatherProvider,
};
use error::Error;
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Everything the panels need once a fetch has succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
  pub current: CurrentConditions,
  pub forecast: Forecast,
  pub category: ConditionCategory,
  pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
  Loading,
  Error { message: String },
  Ready(Arc<WeatherView>),
}

/// Immutable snapshot handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
  /// Last location asked for, which is what `retry` re-issues.
  pub location: String,
  /// Bumped by every request; only the newest one may settle the phase.
  pub generation: u64,
  pub phase: Phase,
}

impl ViewState {
  pub fn is_loading(&self) -> bool {
    matches!(self.phase, Phase::Loading)
  }

  pub fn error(&self) -> Option<&str> {
    match &self.phase {
      Phase::Error { message } => Some(message.as_str()),
      _ => None,
    }
  }

  pub fn view(&self) -> Option<&WeatherView> {
    match &self.phase {
      Phase::Ready(view) => Some(view.as_ref()),
      _ => None,
    }
  }

  pub fn category(&self) -> ConditionCategory {
    self.view().map_or(ConditionCategory::Unknown, |view| view.category)
  }
}

pub struct ViewController<P: ?Sized> {
  provider: Arc<P>,
  presenter: Presenter,
  default_location: String,
  timeout: Option<Duration>,
  state: watch::Sender<ViewState>,
}

impl<P: WeatherProvider + ?Sized> ViewController<P> {
  pub fn new(provider: Arc<P>, default_location: impl Into<String>) -> Self {
    let default_location = default_location.into();
    let (state, _) = watch::channel(ViewState {
      location: default_location.clone(),
      generation: 0,
      phase: Phase::Loading,
    });

    Self {
      provider,
      presenter: Presenter::default(),
      default_location,
      timeout: None,
      state,
    }
  }

  pub fn with_presenter(mut self, presenter: Presenter) -> Self {
    self.presenter = presenter;
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  pub fn snapshot(&self) -> ViewState {
    self.state.borrow().clone()
  }

  pub fn subscribe(&self) -> watch::Receiver<ViewState> {
    self.state.subscribe()
  }

  /// First load, for the configured default location.
  pub async fn activate(&self) -> Result<ViewState, Error> {
    let location = self.default_location.clone();
    self.request_location(&location).await
  }

  #[instrument(skip(self))]
  pub async fn request_location(&self, location: &str) -> Result<ViewState, Error> {
    let mut generation = 0;
    self.state.send_modify(|state| {
      state.generation += 1;
      generation = state.generation;
      state.location = location.to_string();
      state.phase = Phase::Loading;
    });
    info!("Requesting weather for {} (generation {})", location, generation);

    let (phase, failure) = match self.load(location).await {
      Ok(view) => (Phase::Ready(Arc::new(view)), None),
      Err(e) => (
        Phase::Error {
          message: e.to_string(),
        },
        Some(e),
      ),
    };

    let mut applied = None;
    self.state.send_if_modified(|state| {
      if state.generation != generation {
        return false;
      }
      state.phase = phase;
      applied = Some(state.clone());
      true
    });

    let Some(snapshot) = applied else {
      debug!("Discarding superseded response for {} (generation {})", location, generation);
      return Err(Error::Superseded { generation });
    };

    match failure {
      Some(e) => {
        warn!("Weather request for {} failed: {}", location, e);
        Err(e)
      }
      None => {
        info!("Weather for {} is ready: {}", location, snapshot.category());
        Ok(snapshot)
      }
    }
  }

  /// Re-issues the last location. Only valid after a failure.
  #[instrument(skip(self))]
  pub async fn retry(&self) -> Result<ViewState, Error> {
    let location = {
      let state = self.state.borrow();
      match state.phase {
        Phase::Error { .. } => state.location.clone(),
        _ => return Err(Error::RetryUnavailable),
      }
    };
    self.request_location(&location).await
  }

  async fn load(&self, location: &str) -> Result<WeatherView, Error> {
    let fetch = async {
      tokio::try_join!(
        self.provider.fetch_current_conditions(location),
        self.provider.fetch_forecast(location),
      )
    };

    let (current, forecast) = match self.timeout {
      Some(limit) => tokio::time::timeout(limit, fetch)
        .await
        .map_err(|_| Error::ServiceUnavailable(format!("request timed out after {:?}", limit)))??,
      None => fetch.await?,
    };

    let category = current.category();
    Ok(WeatherView {
      presentation: self.presenter.present(category),
      category,
      current,
      forecast,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::weather::ForecastEntry;
  use crate::presentation::{Backdrop, DrizzleStyle, MotionDirection};
  use async_trait::async_trait;
  use chrono::{NaiveDate, TimeDelta};
  use std::collections::HashMap;
  use std::sync::Mutex;
  use tokio::sync::Notify;

  /// Answers from a fixed script. Locations with a gate wait for it before
  /// returning current conditions.
  #[derive(Default)]
  struct ScriptedProvider {
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
  }

  impl ScriptedProvider {
    fn gate(&self, location: &str) -> Arc<Notify> {
      let gate = Arc::new(Notify::new());
      self
        .gates
        .lock()
        .unwrap()
        .insert(location.to_string(), gate.clone());
      gate
    }

    fn calls_for(&self, location: &str) -> usize {
      self.calls.lock().unwrap().iter().filter(|l| *l == location).count()
    }

    fn condition_for(location: &str) -> &'static str {
      match location {
        "London" => "Clouds",
        "Seattle" => "Drizzle",
        _ => "Clear",
      }
    }
  }

  #[async_trait]
  impl WeatherProvider for ScriptedProvider {
    async fn fetch_current_conditions(&self, location: &str) -> Result<CurrentConditions, Error> {
      self.calls.lock().unwrap().push(location.to_string());
      let gate = self.gates.lock().unwrap().get(location).cloned();
      if let Some(gate) = gate {
        gate.notified().await;
      }

      if location == "Nowhere" {
        return Err(Error::NotFound(location.to_string()));
      }
      let condition = Self::condition_for(location);
      Ok(CurrentConditions {
        location: location.to_string(),
        temp: 18.0,
        feels_like: 17.0,
        humidity: 60,
        wind_speed: 3.5,
        visibility: None,
        condition: condition.to_string(),
        condition_desc: format!("{} conditions", condition.to_lowercase()),
      })
    }

    async fn fetch_forecast(&self, location: &str) -> Result<Forecast, Error> {
      match location {
        "Nowhere" => return Err(Error::NotFound(location.to_string())),
        "Half" => return Err(Error::ServiceUnavailable("forecast backend down".into())),
        _ => {}
      }
      let start = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
      Forecast::new(
        (0..5)
          .map(|offset| ForecastEntry {
            date: start + TimeDelta::days(offset),
            condition: "Rain".into(),
            high: 15.0,
            low: 8.0,
            description: "rain conditions".into(),
          })
          .collect(),
      )
    }
  }

  fn controller() -> (Arc<ScriptedProvider>, ViewController<ScriptedProvider>) {
    let provider = Arc::new(ScriptedProvider::default());
    (provider.clone(), ViewController::new(provider, "London"))
  }

  #[test]
  fn starts_loading_the_default_location() {
    let (_, controller) = controller();
    let state = controller.snapshot();
    assert!(state.is_loading());
    assert_eq!(state.location, "London");
    assert_eq!(state.generation, 0);
    assert_eq!(state.category(), ConditionCategory::Unknown);
  }

  #[tokio::test]
  async fn activate_loads_london_clouds() {
    let (_, controller) = controller();
    let state = controller.activate().await.unwrap();

    let view = state.view().unwrap();
    assert_eq!(view.current.location, "London");
    assert_eq!(view.current.temp, 18.0);
    assert_eq!(view.category, ConditionCategory::Clouds);
    assert_eq!(view.forecast.len(), 5);

    let particles = view.presentation.particles.unwrap();
    assert_eq!(particles.direction, MotionDirection::AmbientDrift);
    assert_eq!(view.presentation.backdrop, Backdrop::Overcast);
    assert_eq!(controller.snapshot(), state);
  }

  #[tokio::test]
  async fn request_location_reaches_ready() {
    let (_, controller) = controller();
    let state = controller.request_location("X").await.unwrap();

    assert_eq!(state.location, "X");
    assert_eq!(state.generation, 1);
    assert!(state.error().is_none());
    assert_eq!(state.view().unwrap().forecast.len(), 5);
  }

  #[tokio::test]
  async fn slower_older_request_is_superseded() {
    let (provider, controller) = controller();
    let gate = provider.gate("A");

    let (a, b) = tokio::join!(controller.request_location("A"), async {
      let result = controller.request_location("B").await;
      gate.notify_one();
      result
    });

    assert_eq!(a.unwrap_err(), Error::Superseded { generation: 1 });
    assert_eq!(b.unwrap().location, "B");

    let state = controller.snapshot();
    assert_eq!(state.location, "B");
    assert_eq!(state.generation, 2);
    assert_eq!(state.view().unwrap().current.location, "B");
  }

  #[tokio::test]
  async fn not_found_then_retry_reissues_same_query() {
    let (provider, controller) = controller();
    let err = controller.request_location("Nowhere").await.unwrap_err();
    assert!(err.is_not_found());

    let state = controller.snapshot();
    assert_eq!(state.error(), Some("Location not found: Nowhere"));
    assert!(state.view().is_none());

    let retried = controller.retry().await.unwrap_err();
    assert!(retried.is_not_found());
    assert_eq!(provider.calls_for("Nowhere"), 2);
    assert_eq!(controller.snapshot().location, "Nowhere");
    assert_eq!(controller.snapshot().generation, 2);
  }

  #[tokio::test]
  async fn retry_outside_error_is_refused() {
    let (_, controller) = controller();
    controller.activate().await.unwrap();

    assert_eq!(controller.retry().await.unwrap_err(), Error::RetryUnavailable);
    assert_eq!(controller.snapshot().generation, 1);
  }

  #[tokio::test]
  async fn failure_clears_previous_data() {
    let (_, controller) = controller();
    controller.activate().await.unwrap();
    controller.request_location("Nowhere").await.unwrap_err();

    let state = controller.snapshot();
    assert!(state.view().is_none());
    assert!(state.error().is_some());
  }

  #[tokio::test]
  async fn forecast_failure_fails_the_whole_update() {
    let (_, controller) = controller();
    let err = controller.request_location("Half").await.unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable(_)));
    assert!(controller.snapshot().view().is_none());
  }

  #[tokio::test]
  async fn timeout_is_a_service_failure() {
    let provider = Arc::new(ScriptedProvider::default());
    let _never = provider.gate("Slow");
    let controller = ViewController::new(provider, "London").with_timeout(Duration::from_millis(20));

    let err = controller.request_location("Slow").await.unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable(_)));
    assert!(controller.snapshot().error().unwrap().contains("timed out"));
  }

  #[tokio::test]
  async fn subscribers_see_each_transition() {
    let (_, controller) = controller();
    let mut rx = controller.subscribe();
    assert!(!rx.has_changed().unwrap());

    controller.activate().await.unwrap();
    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.category(), ConditionCategory::Clouds);
  }

  #[tokio::test]
  async fn presenter_choice_reaches_the_view() {
    let provider = Arc::new(ScriptedProvider::default());
    let controller =
      ViewController::new(provider, "Seattle").with_presenter(Presenter::new(DrizzleStyle::Distinct));

    let state = controller.activate().await.unwrap();
    let view = state.view().unwrap();
    assert_eq!(view.category, ConditionCategory::Drizzle);
    assert_eq!(
      view.presentation,
      Presenter::new(DrizzleStyle::Distinct).present(ConditionCategory::Drizzle)
    );
  }
}
