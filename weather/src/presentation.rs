// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::condition::ConditionCategory;
use config::DrizzleSetting;
use serde::Serialize;

const TRANSPARENT: &str = "transparent";
const WHITE: &str = "#ffffff";
const SLATE: &str = "#adb5bd";
const DENSITY_AREA: u32 = 800;
const FPS_LIMIT: u32 = 60;

/// Categories that share one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualGroup {
  Clear,
  Clouds,
  Rain,
  Drizzle,
  Snow,
  Thunderstorm,
  Haze,
  Neutral,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrizzleStyle {
  #[default]
  WithRain,
  Distinct,
}

impl From<DrizzleSetting> for DrizzleStyle {
  fn from(setting: DrizzleSetting) -> Self {
    match setting {
      DrizzleSetting::WithRain => DrizzleStyle::WithRain,
      DrizzleSetting::Distinct => DrizzleStyle::Distinct,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionDirection {
  /// Slow wandering with no fixed heading.
  AmbientDrift,
  Downward,
  /// Storm-driven streaks falling towards the bottom left.
  Diagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleShape {
  Circle,
  Line,
}

/// What a particle does when it leaves the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutMode {
  Out,
  Bounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
  pub min: f64,
  pub max: f64,
}

/// Oscillation of a particle property down to `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pulse {
  pub speed: f64,
  pub floor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleField {
  pub count: u32,
  pub density_area: u32,
  pub color: &'static str,
  pub shape: ParticleShape,
  pub opacity: Span,
  pub opacity_pulse: Option<Pulse>,
  pub size: Span,
  pub size_pulse: Option<Pulse>,
  pub direction: MotionDirection,
  pub speed: Span,
  pub random: bool,
  pub straight: bool,
  pub drift: f64,
  pub out_mode: OutMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
  Sunny,
  Overcast,
  Rain,
  Snow,
  Storm,
  Neutral,
}

impl Backdrop {
  /// Top-to-bottom gradient stops.
  pub fn stops(&self) -> &'static [&'static str] {
    match self {
      Backdrop::Sunny => &["gray-800", "gray-700", "gray-600"],
      Backdrop::Overcast => &["gray-600", "gray-700"],
      Backdrop::Rain | Backdrop::Neutral => &["gray-800", "gray-900"],
      Backdrop::Snow => &["gray-700", "gray-800"],
      Backdrop::Storm => &["gray-900", "black"],
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
  SunGlow,
  LightningFlash,
  RainCurtain { drops: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
  Sun,
  Cloud,
  CloudRain,
  CloudSnow,
  Zap,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresentationConfig {
  pub group: VisualGroup,
  pub background: &'static str,
  pub backdrop: Backdrop,
  pub overlay: Option<Overlay>,
  pub icon: Icon,
  pub particles: Option<ParticleField>,
  pub fps_limit: u32,
}

impl PresentationConfig {
  pub fn particle_count(&self) -> u32 {
    self.particles.map_or(0, |field| field.count)
  }
}

const fn calm(
  group: VisualGroup,
  backdrop: Backdrop,
  overlay: Option<Overlay>,
  icon: Icon,
) -> PresentationConfig {
  PresentationConfig {
    group,
    background: TRANSPARENT,
    backdrop,
    overlay,
    icon,
    particles: None,
    fps_limit: FPS_LIMIT,
  }
}

const fn with_particles(
  group: VisualGroup,
  backdrop: Backdrop,
  overlay: Option<Overlay>,
  icon: Icon,
  field: ParticleField,
) -> PresentationConfig {
  PresentationConfig {
    particles: Some(field),
    ..calm(group, backdrop, overlay, icon)
  }
}

const CLEAR: PresentationConfig = calm(
  VisualGroup::Clear,
  Backdrop::Sunny,
  Some(Overlay::SunGlow),
  Icon::Sun,
);

const NEUTRAL: PresentationConfig = calm(VisualGroup::Neutral, Backdrop::Neutral, None, Icon::Cloud);

const CLOUDS: PresentationConfig = with_particles(
  VisualGroup::Clouds,
  Backdrop::Overcast,
  None,
  Icon::Cloud,
  ParticleField {
    count: 50,
    density_area: DENSITY_AREA,
    color: WHITE,
    shape: ParticleShape::Circle,
    opacity: Span { min: 0.2, max: 0.4 },
    opacity_pulse: Some(Pulse { speed: 0.5, floor: 0.1 }),
    size: Span { min: 20.0, max: 80.0 },
    size_pulse: Some(Pulse { speed: 2.0, floor: 20.0 }),
    direction: MotionDirection::AmbientDrift,
    speed: Span { min: 0.5, max: 1.5 },
    random: true,
    straight: false,
    drift: 0.0,
    out_mode: OutMode::Out,
  },
);

const RAIN: PresentationConfig = with_particles(
  VisualGroup::Rain,
  Backdrop::Rain,
  Some(Overlay::RainCurtain { drops: 100 }),
  Icon::CloudRain,
  ParticleField {
    count: 150,
    density_area: DENSITY_AREA,
    color: SLATE,
    shape: ParticleShape::Line,
    opacity: Span { min: 0.4, max: 0.7 },
    opacity_pulse: None,
    size: Span { min: 1.0, max: 4.0 },
    size_pulse: None,
    direction: MotionDirection::Downward,
    speed: Span { min: 15.0, max: 25.0 },
    random: false,
    straight: true,
    drift: 0.0,
    out_mode: OutMode::Out,
  },
);

const DRIZZLE: PresentationConfig = with_particles(
  VisualGroup::Drizzle,
  Backdrop::Rain,
  None,
  Icon::CloudRain,
  ParticleField {
    count: 80,
    density_area: DENSITY_AREA,
    color: SLATE,
    shape: ParticleShape::Line,
    opacity: Span { min: 0.3, max: 0.5 },
    opacity_pulse: None,
    size: Span { min: 1.0, max: 2.0 },
    size_pulse: None,
    direction: MotionDirection::Downward,
    speed: Span { min: 8.0, max: 14.0 },
    random: false,
    straight: true,
    drift: 0.0,
    out_mode: OutMode::Out,
  },
);

const SNOW: PresentationConfig = with_particles(
  VisualGroup::Snow,
  Backdrop::Snow,
  None,
  Icon::CloudSnow,
  ParticleField {
    count: 150,
    density_area: DENSITY_AREA,
    color: WHITE,
    shape: ParticleShape::Circle,
    opacity: Span { min: 0.4, max: 0.8 },
    opacity_pulse: None,
    size: Span { min: 1.0, max: 4.0 },
    size_pulse: None,
    direction: MotionDirection::Downward,
    speed: Span { min: 1.0, max: 3.0 },
    random: true,
    straight: false,
    drift: 2.0,
    out_mode: OutMode::Out,
  },
);

const THUNDERSTORM: PresentationConfig = with_particles(
  VisualGroup::Thunderstorm,
  Backdrop::Storm,
  Some(Overlay::LightningFlash),
  Icon::Zap,
  ParticleField {
    count: 120,
    density_area: DENSITY_AREA,
    color: SLATE,
    shape: ParticleShape::Line,
    opacity: Span { min: 0.4, max: 0.7 },
    opacity_pulse: None,
    size: Span { min: 1.0, max: 4.0 },
    size_pulse: None,
    direction: MotionDirection::Diagonal,
    speed: Span { min: 12.0, max: 20.0 },
    random: false,
    straight: true,
    drift: 0.0,
    out_mode: OutMode::Out,
  },
);

const HAZE: PresentationConfig = with_particles(
  VisualGroup::Haze,
  Backdrop::Overcast,
  None,
  Icon::Cloud,
  ParticleField {
    count: 60,
    density_area: DENSITY_AREA,
    color: WHITE,
    shape: ParticleShape::Circle,
    opacity: Span { min: 0.1, max: 0.3 },
    opacity_pulse: Some(Pulse { speed: 0.3, floor: 0.05 }),
    size: Span { min: 50.0, max: 120.0 },
    size_pulse: Some(Pulse { speed: 1.0, floor: 40.0 }),
    direction: MotionDirection::AmbientDrift,
    speed: Span { min: 0.2, max: 0.8 },
    random: true,
    straight: false,
    drift: 0.0,
    out_mode: OutMode::Out,
  },
);

/// Maps categories to backgrounds. The only tunable is whether drizzle shares
/// the rain background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presenter {
  drizzle: DrizzleStyle,
}

impl Presenter {
  pub fn new(drizzle: DrizzleStyle) -> Self {
    Self { drizzle }
  }

  pub fn drizzle_style(&self) -> DrizzleStyle {
    self.drizzle
  }

  pub fn group(&self, category: ConditionCategory) -> VisualGroup {
    match category {
      ConditionCategory::Clear => VisualGroup::Clear,
      ConditionCategory::Clouds => VisualGroup::Clouds,
      ConditionCategory::Rain => VisualGroup::Rain,
      ConditionCategory::Drizzle => match self.drizzle {
        DrizzleStyle::WithRain => VisualGroup::Rain,
        DrizzleStyle::Distinct => VisualGroup::Drizzle,
      },
      ConditionCategory::Snow => VisualGroup::Snow,
      ConditionCategory::Thunderstorm => VisualGroup::Thunderstorm,
      ConditionCategory::Mist | ConditionCategory::Fog | ConditionCategory::Haze => {
        VisualGroup::Haze
      }
      ConditionCategory::Unknown => VisualGroup::Neutral,
    }
  }

  pub fn present(&self, category: ConditionCategory) -> PresentationConfig {
    match self.group(category) {
      VisualGroup::Clear => CLEAR,
      VisualGroup::Clouds => CLOUDS,
      VisualGroup::Rain => RAIN,
      VisualGroup::Drizzle => DRIZZLE,
      VisualGroup::Snow => SNOW,
      VisualGroup::Thunderstorm => THUNDERSTORM,
      VisualGroup::Haze => HAZE,
      VisualGroup::Neutral => NEUTRAL,
    }
  }
}

/// Presentation with drizzle drawn as rain.
pub fn present(category: ConditionCategory) -> PresentationConfig {
  Presenter::default().present(category)
}
