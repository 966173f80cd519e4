use crate::error::TaskError;
use crate::validators::{is_valid_due_date, normalize};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    InProgress,
    Done,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Done,
        Status::Cancelled,
    ];

    /// Normalized spelling accepted from the user.
    pub fn key(self) -> &'static str {
        match self {
            Status::Pending => "pendiente",
            Status::InProgress => "en curso",
            Status::Done => "terminada",
            Status::Cancelled => "cancelada",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pendiente",
            Status::InProgress => "En curso",
            Status::Done => "Terminada",
            Status::Cancelled => "Cancelada",
        }
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let key = normalize(input);
        Status::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| TaskError::InvalidStatus(input.to_string()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "facil",
            Difficulty::Medium => "medio",
            Difficulty::Hard => "dificil",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Facil",
            Difficulty::Medium => "Medio",
            Difficulty::Hard => "Dificil",
        }
    }
}

impl FromStr for Difficulty {
    type Err = TaskError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let key = normalize(input);
        Difficulty::ALL
            .into_iter()
            .find(|d| d.key() == key)
            .ok_or_else(|| TaskError::InvalidDifficulty(input.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Due date as typed by the user. Only the `AAAA-MM-DD` shape is checked, so
/// `9999-99-99` is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDate(String);

impl FromStr for DueDate {
    type Err = TaskError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if is_valid_due_date(input) {
            Ok(DueDate(input.to_string()))
        } else {
            Err(TaskError::InvalidDueDate(input.to_string()))
        }
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub created_on: NaiveDate,
    pub last_edited_on: NaiveDate,
    pub due_date: DueDate,
    pub difficulty: Difficulty,
}

impl Task {
    pub fn new(
        title: String,
        description: String,
        status: Status,
        due_date: DueDate,
        difficulty: Difficulty,
        today: NaiveDate,
    ) -> Self {
        Self {
            title,
            description,
            status,
            created_on: today,
            last_edited_on: today,
            due_date,
            difficulty,
        }
    }

    pub fn set_status(&mut self, status: Status, today: NaiveDate) {
        self.status = status;
        self.last_edited_on = today;
    }
}
