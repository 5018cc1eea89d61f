//! The interactive menu loop.
//!
//! ```text
//!   ┌────────────── Running ◄─────────────┐
//!   │  redraw table, read action          │
//!   │  add | view | update | delete ──────┘
//!   │  exit / end of input
//!   ▼
//! Exiting ── save inventory, stop
//! ```
//!
//! Bad ids, bad numbers, unknown fields and missing products are reported and
//! the loop carries on. Storage and terminal errors end the session.

use super::render::{print_messages, render_table};
use console::Term;
use std::io::{BufRead, Write};
use stockroom::api::{CmdMessage, CmdResult, InventoryApi};
use stockroom::error::{Result, StockError};
use stockroom::model::ProductField;
use stockroom::store::ProductStore;

const MENU: &str = "Actions: 'add' - Add product | 'exit' - Exit program | 'view' - View product by ID | 'update' - Update product | 'delete' - Delete product";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SessionState {
    Running,
    Exiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Action {
    Add,
    View,
    Update,
    Delete,
    Exit,
    Invalid(String),
}

impl Action {
    pub(super) fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "add" => Action::Add,
            "view" => Action::View,
            "update" => Action::Update,
            "delete" => Action::Delete,
            "exit" => Action::Exit,
            other => Action::Invalid(other.to_string()),
        }
    }
}

pub(super) struct Session<S: ProductStore, R: BufRead, W: Write> {
    api: InventoryApi<S>,
    input: R,
    output: W,
    screen: Option<Term>,
    state: SessionState,
    pending: Vec<CmdMessage>,
}

impl<S: ProductStore, R: BufRead, W: Write> Session<S, R, W> {
    pub(super) fn new(api: InventoryApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            input,
            output,
            screen: None,
            state: SessionState::Running,
            pending: Vec::new(),
        }
    }

    /// Clear `screen` before every redraw. Ignored when it is not a terminal.
    pub(super) fn with_screen(mut self, screen: Term) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Runs until `exit` or end of input, then saves. Returns the API so the
    /// caller can inspect what was persisted.
    pub(super) fn run(mut self) -> Result<InventoryApi<S>> {
        while self.state == SessionState::Running {
            self.redraw()?;
            write!(self.output, "\n{}\n", MENU)?;
            let action = match self.prompt("Enter action: ")? {
                Some(line) => Action::parse(&line),
                None => Action::Exit,
            };
            self.dispatch(action)?;
        }

        self.api.save()?;
        writeln!(self.output, "Exiting the program...")?;
        self.output.flush()?;
        Ok(self.api)
    }

    fn clears_screen(&self) -> bool {
        self.screen.as_ref().is_some_and(Term::is_term)
    }

    fn redraw(&mut self) -> Result<()> {
        if let Some(term) = self.screen.as_ref().filter(|term| term.is_term()) {
            self.output.flush()?;
            term.clear_screen()?;
        }
        let listing = self.api.list_products()?;
        write!(self.output, "{}", render_table(&listing.listed_products))?;

        let mut messages = listing.messages;
        messages.append(&mut self.pending);
        print_messages(&mut self.output, &messages)?;
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        let outcome = match action {
            Action::Add => self.handle_add(),
            Action::View => self.handle_view(),
            Action::Update => self.handle_update(),
            Action::Delete => self.handle_delete(),
            Action::Exit => {
                self.state = SessionState::Exiting;
                Ok(())
            }
            Action::Invalid(token) => {
                log::debug!("Unrecognised action {:?}", token);
                self.notify(CmdMessage::warning("Invalid action. Please try again."))
            }
        };
        match outcome {
            Err(err) => self.report(err),
            ok => ok,
        }
    }

    fn handle_add(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter product name: ")? else {
            return self.end_of_input();
        };
        let Some(desc) = self.prompt("Enter product description: ")? else {
            return self.end_of_input();
        };
        let Some(price) = self.prompt("Enter product price: ")? else {
            return self.end_of_input();
        };
        let Some(quantity) = self.prompt("Enter product quantity: ")? else {
            return self.end_of_input();
        };

        let result = self.api.add_product(&name, &desc, &price, &quantity)?;
        self.show(result)
    }

    fn handle_view(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter product ID: ")? else {
            return self.end_of_input();
        };
        let result = self.api.view_product(&id)?;

        writeln!(self.output, "\nProduct Details:")?;
        for product in &result.listed_products {
            writeln!(self.output, "{}", product.full_description())?;
        }
        if self.prompt("\nPress Enter to go back.")?.is_none() {
            return self.end_of_input();
        }
        Ok(())
    }

    fn handle_update(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter product ID to update: ")? else {
            return self.end_of_input();
        };
        let current = self.api.view_product(&id)?;

        writeln!(self.output, "\nCurrent Product Details:")?;
        for product in &current.listed_products {
            writeln!(self.output, "{}", product.full_description())?;
        }

        let Some(field) =
            self.prompt("Which field do you want to update? (name, desc, price, quantity): ")?
        else {
            return self.end_of_input();
        };
        let field: ProductField = field.parse()?;

        let Some(value) = self.prompt(&format!("Enter new value for {}: ", field))? else {
            return self.end_of_input();
        };
        let result = self.api.update_product(&id, field.as_str(), &value)?;
        self.show(result)
    }

    fn handle_delete(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter product ID to delete: ")? else {
            return self.end_of_input();
        };
        let result = self.api.delete_product(&id)?;
        self.show(result)
    }

    /// Turns recoverable errors into messages; anything else ends the session.
    fn report(&mut self, err: StockError) -> Result<()> {
        let message = match err {
            StockError::InvalidId(_) => {
                CmdMessage::error("Invalid input. Please enter a valid product ID.")
            }
            StockError::ProductNotFound(_) => CmdMessage::warning("Product not found."),
            StockError::IdsExhausted => {
                CmdMessage::error(format!("Cannot add product. {}", err))
            }
            e if e.is_user_input() => CmdMessage::error(format!("Invalid input. {}", e)),
            e => return Err(e),
        };
        self.notify(message)
    }

    /// Echoes `message` now and, when the screen is cleared between redraws,
    /// repeats it under the next table.
    fn notify(&mut self, message: CmdMessage) -> Result<()> {
        print_messages(&mut self.output, std::slice::from_ref(&message))?;
        if self.clears_screen() {
            self.pending.push(message);
        }
        Ok(())
    }

    fn show(&mut self, result: CmdResult) -> Result<()> {
        for message in result.messages {
            self.notify(message)?;
        }
        Ok(())
    }

    fn end_of_input(&mut self) -> Result<()> {
        self.state = SessionState::Exiting;
        Ok(())
    }

    /// Prints `label`, reads one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
