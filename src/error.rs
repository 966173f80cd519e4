use std::io;
use thiserror::Error;

/// Rejections surfaced to the user. The `Display` text is what gets printed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Estado no válido. Debe ser 'Pendiente', 'En curso', 'Terminada' o 'Cancelada'.")]
    InvalidStatus(String),

    #[error("Fecha de vencimiento no válida. Debe estar en formato 'AAAA-MM-DD'.")]
    InvalidDueDate(String),

    #[error("Dificultad no válida. Debe ser 'Facil', 'Medio' o 'Dificil'.")]
    InvalidDifficulty(String),

    #[error("Tarea no encontrada.")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// Input reached end of file; treated like a confirmed exit.
    #[error("input stream closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}
