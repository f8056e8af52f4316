// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod command;

use anyhow::{Context, Result};
use chrono::Local;
use command::Command;
use config::{Config, ProviderKind};
use error::Error;
use std::{env, sync::Arc};
use tokio::{
  io::{AsyncBufReadExt, BufReader},
  sync::watch,
};
use tracing::{debug, info, instrument};
use weather::{
  render, LocationSearch, OpenWeatherClient, OpenWeatherConfig, Presenter, RandomProvider,
  ViewController, ViewState, WeatherProvider,
};

const DEFAULT_CONFIG_PATH: &str = "widget.toml";

type Controller = ViewController<dyn WeatherProvider>;

enum Request {
  Activate,
  Location(String),
  Retry,
}

pub struct WidgetRunner {
  controller: Arc<Controller>,
  search: LocationSearch,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let config_path =
    env::var("WEATHER_WIDGET_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
  let config = Config::load_or_default(&config_path)?;
  info!(
    "Starting widget with the {} provider for {}",
    config.widget.provider, config.widget.default_location
  );

  let controller = ViewController::new(build_provider(&config)?, config.widget.default_location.clone())
    .with_presenter(Presenter::new(config.presentation.drizzle.into()))
    .with_timeout(config.request_timeout());

  WidgetRunner::new(Arc::new(controller)).run().await
}

fn build_provider(config: &Config) -> Result<Arc<dyn WeatherProvider>> {
  match config.widget.provider {
    ProviderKind::Random => Ok(Arc::new(RandomProvider::new(config.simulated_delay()))),
    ProviderKind::OpenWeather => {
      let api_key = env::var("OPENWEATHER_API_KEY")
        .context("Missing OPENWEATHER_API_KEY environment variable")?;
      let client_config = OpenWeatherConfig::new(api_key)?.with_timeout(config.request_timeout());
      Ok(Arc::new(OpenWeatherClient::new(client_config)?))
    }
  }
}

async fn render_loop(mut rx: watch::Receiver<ViewState>) {
  loop {
    let state = rx.borrow_and_update().clone();
    println!("{}\n", render::render_state(&state, Local::now().date_naive()));
    if rx.changed().await.is_err() {
      break;
    }
  }
}

impl WidgetRunner {
  pub fn new(controller: Arc<Controller>) -> Self {
    Self {
      controller,
      search: LocationSearch,
    }
  }

  #[instrument(skip(self))]
  pub async fn run(&self) -> Result<()> {
    let renderer = tokio::spawn(render_loop(self.controller.subscribe()));
    self.dispatch(Request::Activate);
    println!("Search: {} (`suggest` for ideas, `quit` to leave)", LocationSearch::HINT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
      match Command::parse(&line, &self.search) {
        Command::Search(location) => self.dispatch(Request::Location(location)),
        Command::Retry => self.dispatch(Request::Retry),
        Command::Suggest => self.print_suggestions(),
        Command::Quit => break,
        Command::Ignore => {}
      }
    }

    renderer.abort();
    Ok(())
  }

  /// Runs the request in the background so a newer search can overtake it.
  fn dispatch(&self, request: Request) {
    let controller = self.controller.clone();
    tokio::spawn(async move {
      let result = match request {
        Request::Activate => controller.activate().await,
        Request::Location(location) => controller.request_location(&location).await,
        Request::Retry => controller.retry().await,
      };

      match result {
        Err(Error::RetryUnavailable) => println!("Nothing to retry."),
        Err(e) if e.is_superseded() => debug!("{}", e),
        // failures are already on screen through the error panel
        Err(_) | Ok(_) => {}
      }
    });
  }

  fn print_suggestions(&self) {
    let mut number = 1;
    for group in self.search.suggestions() {
      println!("{}:", group.title);
      for entry in group.entries {
        println!("  #{:<3} {}", number, entry);
        number += 1;
      }
    }
  }
}
