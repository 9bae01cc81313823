//! User interactions and their textual command form.

use catalog_core::{CategoryId, SortColumn, UserId};

/// One user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type into the search field
    SetQuery(String),
    /// Press the search field's clear button
    ClearQuery,
    /// Pick a user tab (`None` = "All")
    SelectUser(Option<UserId>),
    /// Press a category toggle
    ToggleCategory(CategoryId),
    /// Press "All" categories
    ClearCategories,
    /// Press "Reset all filters"
    ResetAll,
    /// Click a column's sort icon
    Sort(SortColumn),
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument for {command}: {value}")]
    InvalidArgument { command: &'static str, value: String },
}

impl Action {
    /// Parse a command line.
    ///
    /// Syntax:
    /// - `query <text>`: set the search text, kept verbatim
    /// - `clear-query`
    /// - `user <id>` / `user all`
    /// - `category <id>`: toggle a category
    /// - `all-categories`
    /// - `reset`
    /// - `sort id|product|category|user`
    ///
    /// # Examples
    /// ```
    /// use catalog_table::Action;
    /// use catalog_core::SortColumn;
    /// assert_eq!(Action::parse("sort product"), Ok(Action::Sort(SortColumn::Product)));
    /// assert_eq!(Action::parse("user all"), Ok(Action::SelectUser(None)));
    /// assert!(Action::parse("dance").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_start();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, Some(rest)),
            None => (line.trim_end(), None),
        };

        match command {
            "query" => Ok(Action::SetQuery(rest.unwrap_or_default().to_string())),
            "clear-query" => Ok(Action::ClearQuery),
            "user" => {
                let value = required("user", rest)?;
                if value.eq_ignore_ascii_case("all") {
                    return Ok(Action::SelectUser(None));
                }
                parse_id("user", value).map(|id| Action::SelectUser(Some(id)))
            }
            "category" => parse_id("category", required("category", rest)?).map(Action::ToggleCategory),
            "all-categories" => Ok(Action::ClearCategories),
            "reset" => Ok(Action::ResetAll),
            "sort" => {
                let value = required("sort", rest)?;
                SortColumn::from_name(value)
                    .map(Action::Sort)
                    .ok_or_else(|| CommandError::InvalidArgument {
                        command: "sort",
                        value: value.to_string(),
                    })
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(command: &'static str, rest: Option<&'a str>) -> Result<&'a str, CommandError> {
    rest.map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(CommandError::MissingArgument(command))
}

fn parse_id(command: &'static str, value: &str) -> Result<u32, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}
