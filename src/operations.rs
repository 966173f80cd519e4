//! The four menu operations. Each one reads what it needs from the console,
//! works on the store it is lent, and prints its own outcome. Validation
//! failures are printed and end the operation; only console errors propagate.

use crate::console::Console;
use crate::error::{SessionError, TaskError};
use crate::store::TaskStore;
use crate::task::{Difficulty, DueDate, Status, Task};
use chrono::NaiveDate;
use log::{debug, info};
use std::io::{BufRead, Write};

const STATUS_PROMPT: &str = "(Pendiente/En curso/Terminada/Cancelada): ";

pub fn list_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
) -> Result<(), SessionError> {
    console.clear()?;
    if store.is_empty() {
        return console.say("No hay tareas para mostrar.");
    }

    console.say("\nTareas:")?;
    for (i, task) in store.iter().enumerate() {
        console.say(format!("{}. {} - {}", i + 1, task.title, task.status))?;
    }
    Ok(())
}

pub fn search_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
) -> Result<(), SessionError> {
    console.clear()?;
    let title = console.prompt("Introduzca el título de la tarea a buscar: ")?;

    match store.find_by_title(&title) {
        Some(task) => print_task(console, task),
        None => {
            debug!("search: no task titled {:?}", title);
            console.say(TaskError::NotFound(title))
        }
    }
}

fn print_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    task: &Task,
) -> Result<(), SessionError> {
    console.say("\nTarea encontrada:")?;
    console.say(format!("Título: {}", task.title))?;
    console.say(format!("Descripción: {}", task.description))?;
    console.say(format!("Estado: {}", task.status))?;
    console.say(format!("Fecha de creación: {}", task.created_on))?;
    console.say(format!("Fecha de última edición: {}", task.last_edited_on))?;
    console.say(format!("Fecha de vencimiento: {}", task.due_date))?;
    console.say(format!("Dificultad: {}", task.difficulty))
}

pub fn add_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut TaskStore,
    today: NaiveDate,
) -> Result<(), SessionError> {
    console.clear()?;
    match read_new_task(console, today)? {
        Ok(task) => {
            info!("added task {:?}", task.title);
            store.add_task(task);
            console.say("\nTarea agregada correctamente.")
        }
        Err(err) => {
            debug!("add rejected: {:?}", err);
            console.say(err)
        }
    }
}

/// Each answer is checked before the next question is asked.
fn read_new_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<Result<Task, TaskError>, SessionError> {
    let title = console.prompt("Introduzca el título de la tarea: ")?;
    let description = console.prompt("Introduzca la descripción de la tarea: ")?;

    let status = console.prompt(&format!("Introduzca el estado de la tarea {}", STATUS_PROMPT))?;
    let status = match status.parse::<Status>() {
        Ok(status) => status,
        Err(err) => return Ok(Err(err)),
    };

    let due_date = console.prompt("Introduzca la fecha de vencimiento (AAAA-MM-DD): ")?;
    let due_date = match due_date.parse::<DueDate>() {
        Ok(due_date) => due_date,
        Err(err) => return Ok(Err(err)),
    };

    let difficulty =
        console.prompt("Introduzca la dificultad de la tarea (Facil/Medio/Dificil): ")?;
    let difficulty = match difficulty.parse::<Difficulty>() {
        Ok(difficulty) => difficulty,
        Err(err) => return Ok(Err(err)),
    };

    Ok(Ok(Task::new(
        title,
        description,
        status,
        due_date,
        difficulty,
        today,
    )))
}

/// Title lookup here ignores case and accents, unlike search.
pub fn edit_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut TaskStore,
    today: NaiveDate,
) -> Result<(), SessionError> {
    console.clear()?;
    let title = console.prompt("Introduzca el título de la tarea a editar: ")?;

    let Some(task) = store.find_by_title_normalized_mut(&title) else {
        debug!("edit: no task matching {:?}", title);
        return console.say(TaskError::NotFound(title));
    };

    let status = console.prompt(&format!(
        "Introduzca el nuevo estado de la tarea {}",
        STATUS_PROMPT
    ))?;
    match status.parse::<Status>() {
        Ok(status) => {
            info!("task {:?} moved to {}", task.title, status);
            task.set_status(status, today);
            console.say("\nTarea editada correctamente.")
        }
        Err(err) => console.say(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn add_rejects_bad_due_date_before_asking_difficulty() {
        let mut store = TaskStore::new();
        let mut c = console("t\nd\npendiente\n2024-5-1\nfacil\n");

        add_task(&mut c, &mut store, day(1)).unwrap();

        assert!(store.is_empty());
        let out = output(c);
        assert!(out.contains("Fecha de vencimiento no válida."));
        assert!(!out.contains("Introduzca la dificultad"));
    }

    #[test]
    fn add_rejects_bad_difficulty() {
        let mut store = TaskStore::new();
        let mut c = console("t\nd\nen curso\n2024-05-01\nextrema\n");

        add_task(&mut c, &mut store, day(1)).unwrap();

        assert!(store.is_empty());
        assert!(output(c).contains("Dificultad no válida."));
    }

    #[test]
    fn add_stores_normalized_enums_and_today() {
        let mut store = TaskStore::new();
        let mut c = console("Informe\nTrimestral\nEN CURSO\n2024-06-30\nDifícil\n");

        add_task(&mut c, &mut store, day(2)).unwrap();

        let task = store.find_by_title("Informe").unwrap();
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.difficulty, Difficulty::Hard);
        assert_eq!(task.created_on, day(2));
        assert_eq!(task.last_edited_on, day(2));
        assert!(output(c).contains("Tarea agregada correctamente."));
    }

    #[test]
    fn edit_updates_status_and_edit_date() {
        let mut store = TaskStore::new();
        add_task(&mut console("Café\n\npendiente\n2024-06-30\nmedio\n"), &mut store, day(1))
            .unwrap();

        let mut c = console("cafe\nterminada\n");
        edit_task(&mut c, &mut store, day(5)).unwrap();

        let task = store.find_by_title("Café").unwrap();
        assert_eq!(task.status, Status::Done);
        assert_eq!(task.created_on, day(1));
        assert_eq!(task.last_edited_on, day(5));
        assert!(output(c).contains("Tarea editada correctamente."));
    }

    #[test]
    fn edit_with_invalid_status_changes_nothing() {
        let mut store = TaskStore::new();
        add_task(&mut console("A\n\npendiente\n2024-06-30\nmedio\n"), &mut store, day(1))
            .unwrap();

        let mut c = console("a\nbloqueada\n");
        edit_task(&mut c, &mut store, day(5)).unwrap();

        let task = store.find_by_title("A").unwrap();
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.last_edited_on, day(1));
        assert!(output(c).contains("Estado no válido."));
    }

    #[test]
    fn edit_unknown_title_does_not_ask_for_status() {
        let mut store = TaskStore::new();
        let mut c = console("nada\n");

        edit_task(&mut c, &mut store, day(1)).unwrap();

        let out = output(c);
        assert!(out.contains("Tarea no encontrada."));
        assert!(!out.contains("nuevo estado"));
    }

    #[test]
    fn list_numbers_tasks_newest_first() {
        let mut store = TaskStore::new();
        add_task(&mut console("uno\n\npendiente\n2024-06-30\nmedio\n"), &mut store, day(1))
            .unwrap();
        add_task(&mut console("dos\n\ncancelada\n2024-06-30\nmedio\n"), &mut store, day(1))
            .unwrap();

        let mut c = console("");
        list_tasks(&mut c, &store).unwrap();

        assert_eq!(output(c), "\nTareas:\n1. dos - Cancelada\n2. uno - Pendiente\n");
    }

    #[test]
    fn end_of_input_mid_add_propagates_closed() {
        let mut store = TaskStore::new();
        let mut c = console("solo titulo\n");

        let result = add_task(&mut c, &mut store, day(1));

        assert!(matches!(result, Err(SessionError::Closed)));
        assert!(store.is_empty());
    }
}
