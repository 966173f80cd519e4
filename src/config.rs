// In-code session settings. There are no config files or flags.
use chrono::{Local, NaiveDate};
use log::LevelFilter;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Clear the terminal before the menu and each operation.
    pub clear_screen: bool,
    pub log_level: LevelFilter,
    /// Source of creation and edit dates.
    pub today: fn() -> NaiveDate,
}

impl SessionConfig {
    /// Screen clearing only applies when the output is a terminal.
    pub fn for_output(is_terminal: bool) -> Self {
        Self {
            clear_screen: is_terminal,
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            log_level: LevelFilter::Warn,
            today: local_today,
        }
    }
}
