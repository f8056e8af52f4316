// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use weather::LocationSearch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Search(String),
  Retry,
  Suggest,
  Quit,
  /// Blank line or a suggestion number that does not exist.
  Ignore,
}

impl Command {
  pub fn parse(line: &str, search: &LocationSearch) -> Self {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
      "quit" | "exit" => return Command::Quit,
      "retry" => return Command::Retry,
      "suggest" | "?" => return Command::Suggest,
      _ => {}
    }

    if let Some(number) = trimmed.strip_prefix('#') {
      return number
        .parse()
        .ok()
        .and_then(|n| search.suggestion(n))
        .map_or(Command::Ignore, |location| Command::Search(location.to_string()));
    }

    search.submit(trimmed).map_or(Command::Ignore, Command::Search)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(line: &str) -> Command {
    Command::parse(line, &LocationSearch)
  }

  #[test]
  fn keywords() {
    assert_eq!(parse("quit"), Command::Quit);
    assert_eq!(parse(" EXIT "), Command::Quit);
    assert_eq!(parse("retry"), Command::Retry);
    assert_eq!(parse("?"), Command::Suggest);
  }

  #[test]
  fn free_text_is_a_search() {
    assert_eq!(parse("  New York "), Command::Search("New York".into()));
    assert_eq!(parse("SW1A 1AA"), Command::Search("SW1A 1AA".into()));
    assert_eq!(parse("   "), Command::Ignore);
  }

  #[test]
  fn numbered_suggestions() {
    assert_eq!(parse("#3"), Command::Search("Tokyo".into()));
    assert_eq!(parse("#99"), Command::Ignore);
    assert_eq!(parse("#abc"), Command::Ignore);
  }
}
