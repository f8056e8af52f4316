// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
const POPULAR_CITIES: [&str; 10] = [
  "London",
  "New York",
  "Tokyo",
  "Paris",
  "Sydney",
  "Dubai",
  "Singapore",
  "Los Angeles",
  "Berlin",
  "Mumbai",
];

const LANDMARKS: [&str; 6] = [
  "Eiffel Tower, Paris",
  "Times Square, New York",
  "Big Ben, London",
  "Golden Gate Bridge, San Francisco",
  "Statue of Liberty, New York",
  "Empire State Building, New York",
];

const POSTAL_CODES: [&str; 5] = [
  "10001, New York",
  "90210, Beverly Hills",
  "SW1A 1AA, London",
  "75001, Paris",
  "100-0001, Tokyo",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionGroup {
  pub title: &'static str,
  pub entries: &'static [&'static str],
}

/// Input side of the location picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationSearch;

impl LocationSearch {
  pub const HINT: &'static str = "City, ZIP code, coordinates, landmark...";

  /// Trimmed query, or `None` when there is nothing to search for.
  pub fn submit(&self, input: &str) -> Option<String> {
    let query = input.trim();
    (!query.is_empty()).then(|| query.to_string())
  }

  pub fn suggestions(&self) -> [SuggestionGroup; 3] {
    [
      SuggestionGroup {
        title: "Popular Cities",
        entries: &POPULAR_CITIES,
      },
      SuggestionGroup {
        title: "Famous Landmarks",
        entries: &LANDMARKS,
      },
      SuggestionGroup {
        title: "ZIP/Postal Codes",
        entries: &POSTAL_CODES,
      },
    ]
  }

  /// Looks up a suggestion by its 1-based position across all groups.
  pub fn suggestion(&self, number: usize) -> Option<&'static str> {
    self
      .suggestions()
      .iter()
      .flat_map(|group| group.entries.iter().copied())
      .nth(number.checked_sub(1)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn submit_trims_and_drops_blank_input() {
    let search = LocationSearch;
    assert_eq!(search.submit("  Tokyo \n"), Some("Tokyo".to_string()));
    assert_eq!(search.submit("40.7128,-74.0060"), Some("40.7128,-74.0060".to_string()));
    assert_eq!(search.submit("   "), None);
    assert_eq!(search.submit(""), None);
  }

  #[test]
  fn suggestions_keep_their_order() {
    let groups = LocationSearch.suggestions();
    assert_eq!(groups[0].entries.len(), 10);
    assert_eq!(groups[1].entries.len(), 6);
    assert_eq!(groups[2].entries.len(), 5);
    assert_eq!(groups[0].entries[0], "London");
  }

  #[test]
  fn numbered_lookup_spans_groups() {
    let search = LocationSearch;
    assert_eq!(search.suggestion(1), Some("London"));
    assert_eq!(search.suggestion(11), Some("Eiffel Tower, Paris"));
    assert_eq!(search.suggestion(21), Some("100-0001, Tokyo"));
    assert_eq!(search.suggestion(0), None);
    assert_eq!(search.suggestion(22), None);
  }
}
