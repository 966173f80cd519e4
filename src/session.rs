use crate::config::SessionConfig;
use crate::console::Console;
use crate::error::SessionError;
use crate::operations::{add_task, edit_task, list_tasks, search_task};
use crate::store::TaskStore;
use log::{debug, info};
use std::io::{self, BufRead, Write};

const MENU: [&str; 6] = [
    "Menú:",
    "(1) Ver mis tareas",
    "(2) Buscar tarea",
    "(3) Agregar tarea",
    "(4) Editar tarea",
    "(5) Salir",
];

enum Next {
    Menu,
    Exit,
}

/// One interactive run: owns the store and drives the menu until the user
/// leaves or input runs out.
pub struct Session<R, W> {
    console: Console<R, W>,
    store: TaskStore,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            console: Console::new(input, output, config.clear_screen),
            store: TaskStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Runs until a confirmed exit or end of input, then prints the farewell.
    pub fn run(&mut self) -> io::Result<()> {
        match self.run_menu() {
            Ok(()) | Err(SessionError::Closed) => {}
            Err(SessionError::Io(err)) => return Err(err),
        }
        info!("session closed with {} task(s)", self.store.len());
        match self.console.say("\n¡Adiós!") {
            Ok(()) | Err(SessionError::Closed) => Ok(()),
            Err(SessionError::Io(err)) => Err(err),
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn run_menu(&mut self) -> Result<(), SessionError> {
        loop {
            self.show_menu()?;
            let choice = self.console.prompt("Seleccione una opción: ")?.to_lowercase();
            debug!("menu choice {:?}", choice);

            let today = (self.config.today)();
            let next = match choice.as_str() {
                "1" => {
                    list_tasks(&mut self.console, &self.store)?;
                    self.ask_to_return()?
                }
                "2" => {
                    search_task(&mut self.console, &self.store)?;
                    self.ask_to_return()?
                }
                "3" => {
                    add_task(&mut self.console, &mut self.store, today)?;
                    self.ask_to_return()?
                }
                "4" => {
                    edit_task(&mut self.console, &mut self.store, today)?;
                    self.ask_to_return()?
                }
                "5" => self.confirm_exit()?,
                _ => {
                    self.console
                        .say("Opción no válida. Por favor, seleccione una opción válida.")?;
                    Next::Menu
                }
            };

            if let Next::Exit = next {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), SessionError> {
        self.console.clear()?;
        for line in MENU {
            self.console.say(line)?;
        }
        Ok(())
    }

    fn confirm_exit(&mut self) -> Result<Next, SessionError> {
        let answer = self.console.prompt("¿Seguro que desea salir? (S/N): ")?;
        Ok(if is_yes(&answer) { Next::Exit } else { Next::Menu })
    }

    fn ask_to_return(&mut self) -> Result<Next, SessionError> {
        let answer = self
            .console
            .prompt("\n¿Desea volver al menú principal? (S/N): ")?;
        Ok(if is_yes(&answer) { Next::Menu } else { Next::Exit })
    }
}

fn is_yes(answer: &str) -> bool {
    answer.to_lowercase() == "s"
}
