// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Serialize;
use std::str::FromStr;

/// Normalized weather condition reported by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConditionCategory {
  Clear,
  Clouds,
  Rain,
  Drizzle,
  Snow,
  Thunderstorm,
  Mist,
  Fog,
  Haze,
  Unknown,
}

/// Canonical names, matched case-insensitively.
const NAMES: [(&str, ConditionCategory); 9] = [
  ("clear", ConditionCategory::Clear),
  ("clouds", ConditionCategory::Clouds),
  ("rain", ConditionCategory::Rain),
  ("drizzle", ConditionCategory::Drizzle),
  ("snow", ConditionCategory::Snow),
  ("thunderstorm", ConditionCategory::Thunderstorm),
  ("mist", ConditionCategory::Mist),
  ("fog", ConditionCategory::Fog),
  ("haze", ConditionCategory::Haze),
];

/// Maps a free-text condition to its category. Anything that is not an exact,
/// case-insensitive match for a known name is `Unknown`.
pub fn classify(raw: &str) -> ConditionCategory {
  NAMES
    .iter()
    .find(|(name, _)| name.eq_ignore_ascii_case(raw))
    .map_or(ConditionCategory::Unknown, |(_, category)| *category)
}

impl ConditionCategory {
  pub const ALL: [ConditionCategory; 10] = [
    ConditionCategory::Clear,
    ConditionCategory::Clouds,
    ConditionCategory::Rain,
    ConditionCategory::Drizzle,
    ConditionCategory::Snow,
    ConditionCategory::Thunderstorm,
    ConditionCategory::Mist,
    ConditionCategory::Fog,
    ConditionCategory::Haze,
    ConditionCategory::Unknown,
  ];

  pub fn as_str(&self) -> &'static str {
    NAMES
      .iter()
      .find(|(_, category)| category == self)
      .map_or("unknown", |(name, _)| name)
  }
}

impl FromStr for ConditionCategory {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(classify(s))
  }
}

impl std::fmt::Display for ConditionCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_provider_casing() {
    assert_eq!(classify("Clouds"), ConditionCategory::Clouds);
    assert_eq!(classify("THUNDERSTORM"), ConditionCategory::Thunderstorm);
    assert_eq!(classify("drizzle"), ConditionCategory::Drizzle);
  }

  #[test]
  fn no_substring_or_whitespace_matching() {
    assert_eq!(classify(""), ConditionCategory::Unknown);
    assert_eq!(classify("light rain"), ConditionCategory::Unknown);
    assert_eq!(classify(" rain"), ConditionCategory::Unknown);
    assert_eq!(classify("Cloudy"), ConditionCategory::Unknown);
  }

  #[test]
  fn mist_fog_haze_stay_distinct() {
    assert_ne!(classify("mist"), classify("fog"));
    assert_ne!(classify("fog"), classify("haze"));
  }

  #[test]
  fn names_round_trip_through_display() {
    for category in ConditionCategory::ALL {
      assert_eq!(category.to_string().parse::<ConditionCategory>(), Ok(category));
    }
  }
}
