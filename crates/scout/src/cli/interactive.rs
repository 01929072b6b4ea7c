//! Line commands for the interactive form

use crate::form::SearchForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
  Country(String),
  City(String),
  Add(String),
  Remove(String),
  Limit(String),
  Clear,
  Show,
  Search,
  Results,
  Copy(String),
  Help,
  Quit,
  Nothing,
}

pub const HELP: &str = "\
Commands:
  country <name>    set the country
  city <name>       set the city
  add <keyword>     add a category/keyword tag (a bare line does the same)
  remove <keyword>  remove a tag
  clear             remove all tags
  limit <n>         set the result limit (1-50)
  show              show the form
  search            run the search (replaces a search still running)
  results           show the current results again
  copy <n>          copy the sales pitch of lead n
  help              show this help
  quit              leave";

/// Parse one input line. Anything that is not a command is a new tag.
pub fn parse(line: &str) -> FormCommand {
  let line = line.trim();
  if line.is_empty() {
    return FormCommand::Nothing;
  }

  let (verb, rest) = match line.split_once(char::is_whitespace) {
    Some((verb, rest)) => (verb, rest.trim()),
    None => (line, ""),
  };

  match (verb.to_lowercase().as_str(), rest.is_empty()) {
    ("country", false) => FormCommand::Country(rest.to_string()),
    ("city", false) => FormCommand::City(rest.to_string()),
    ("add", false) => FormCommand::Add(rest.to_string()),
    ("remove" | "rm", false) => FormCommand::Remove(rest.to_string()),
    ("limit", false) => FormCommand::Limit(rest.to_string()),
    ("copy", false) => FormCommand::Copy(rest.to_string()),
    ("clear", true) => FormCommand::Clear,
    ("show", true) => FormCommand::Show,
    ("search" | "scan", true) => FormCommand::Search,
    ("results", true) => FormCommand::Results,
    ("help" | "?", true) => FormCommand::Help,
    ("quit" | "exit" | "q", true) => FormCommand::Quit,
    _ => FormCommand::Add(line.to_string()),
  }
}

/// One-paragraph summary of the form
pub fn describe(form: &SearchForm) -> String {
  let tags: Vec<&str> = form.keywords.iter().collect();
  let tags = if tags.is_empty() { "(none)".to_string() } else { tags.join(", ") };
  let ready = match form.validate() {
    Ok(()) => "ready".to_string(),
    Err(reason) => format!("not ready: {reason}"),
  };

  format!(
    "country:  {}\ncity:     {}\nkeywords: {}\nlimit:    {}\nstatus:   {}",
    form.country,
    form.city,
    tags,
    form.limit(),
    ready
  )
}
