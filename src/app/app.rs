use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    app::{Portfolio, ui, utils::parse_decimal},
    models::PositionUpdate,
};

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub enum InputField {
    #[default]
    Name,
    Shares,
    Price,
    #[strum(serialize = "Target %")]
    TargetWeight,
}

impl InputField {
    fn next(self) -> Self {
        let fields: Vec<InputField> = InputField::iter().collect();
        let i = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(i + 1) % fields.len()]
    }
}

#[derive(Clone, Debug, Default)]
pub struct InputForm {
    pub name: String,
    pub shares: String,
    pub price: String,
    pub target_weight: String,
    pub focus: InputField,
}

impl InputForm {
    pub fn value(&self, field: InputField) -> &str {
        match field {
            InputField::Name => &self.name,
            InputField::Shares => &self.shares,
            InputField::Price => &self.price,
            InputField::TargetWeight => &self.target_weight,
        }
    }

    fn value_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Name => &mut self.name,
            InputField::Shares => &mut self.shares,
            InputField::Price => &mut self.price,
            InputField::TargetWeight => &mut self.target_weight,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RowEdit {
    pub id: String,
    pub field: InputField,
    pub buffer: String,
}

pub struct App {
    portfolio: Portfolio,
    form: InputForm,
    table_state: TableState,
    row_edit: Option<RowEdit>,
    error_popup: Option<String>,
    selection_mode: bool,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            form: InputForm::default(),
            table_state: TableState::default(),
            row_edit: None,
            error_popup: None,
            selection_mode: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.portfolio,
                    &self.form,
                    &mut self.table_state,
                    &self.row_edit,
                    &self.error_popup,
                    self.selection_mode,
                )
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if is_quit_key(&key) {
                    return Ok(());
                }

                if self.error_popup.is_some() {
                    self.error_popup = None;
                    continue;
                }

                if self.row_edit.is_some() {
                    self.handle_edit_key(key.code);
                    continue;
                }

                if self.selection_mode {
                    if self.handle_table_key(key.code) {
                        return Ok(());
                    }
                    continue;
                }

                self.handle_form_key(key.code);
            }
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.form.focus = self.form.focus.next(),
            KeyCode::Enter => {
                let result = self.portfolio.add(
                    &self.form.name,
                    &self.form.shares,
                    &self.form.price,
                    &self.form.target_weight,
                );
                match result {
                    Ok(()) => self.form = InputForm::default(),
                    Err(e) => self.error_popup = Some(format!("Invalid input: {:#}", e)),
                }
            }
            KeyCode::Backspace => {
                let focus = self.form.focus;
                self.form.value_mut(focus).pop();
            }
            KeyCode::Char(c) => {
                let focus = self.form.focus;
                self.form.value_mut(focus).push(c);
            }
            KeyCode::Down | KeyCode::Up => {
                if !self.portfolio.positions().is_empty() {
                    self.selection_mode = true;
                    self.table_state.select(Some(0));
                }
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                self.selection_mode = false;
                self.table_state.select(None);
            }
            KeyCode::Down => {
                let positions = self.portfolio.positions();
                if !positions.is_empty() {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i >= positions.len() - 1 {
                                0
                            } else {
                                i + 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Up => {
                let positions = self.portfolio.positions();
                if !positions.is_empty() {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i == 0 {
                                positions.len() - 1
                            } else {
                                i - 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(i) = self.table_state.selected() {
                    let id = self
                        .portfolio
                        .positions()
                        .get(i)
                        .map(|position| position.id().clone());
                    if let Some(id) = id {
                        self.portfolio.remove(&id);
                    }

                    let remaining = self.portfolio.positions().len();
                    if remaining == 0 {
                        self.selection_mode = false;
                        self.table_state.select(None);
                    } else if i >= remaining {
                        self.table_state.select(Some(remaining - 1));
                    }
                }
            }
            KeyCode::Char('e') => {
                if let Some(i) = self.table_state.selected() {
                    if let Some(position) = self.portfolio.positions().get(i) {
                        self.row_edit = Some(RowEdit {
                            id: position.id().clone(),
                            field: InputField::Shares,
                            buffer: position.shares().to_string(),
                        });
                    }
                }
            }
            _ => {}
        }

        false
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        let Some(edit) = self.row_edit.as_mut() else {
            return;
        };

        match code {
            KeyCode::Esc => self.row_edit = None,
            KeyCode::Tab => {
                edit.field = edit.field.next();
                let id = edit.id.clone();
                let field = edit.field;
                if let Some(position) = self.portfolio.positions().iter().find(|p| p.id() == &id) {
                    edit.buffer = match field {
                        InputField::Name => position.name().clone(),
                        InputField::Shares => position.shares().to_string(),
                        InputField::Price => position.price().to_string(),
                        InputField::TargetWeight => position.target_weight().to_string(),
                    };
                }
            }
            KeyCode::Enter => {
                // The store applies edits without range checks; the buffer only
                // has to parse for numeric fields.
                let update = match edit.field {
                    InputField::Name => PositionUpdate {
                        name: Some(edit.buffer.clone()),
                        ..Default::default()
                    },
                    InputField::Shares => match parse_decimal(&edit.buffer, "shares") {
                        Ok(shares) => PositionUpdate {
                            shares: Some(shares),
                            ..Default::default()
                        },
                        Err(_) => return,
                    },
                    InputField::Price => match parse_decimal(&edit.buffer, "price") {
                        Ok(price) => PositionUpdate {
                            price: Some(price),
                            ..Default::default()
                        },
                        Err(_) => return,
                    },
                    InputField::TargetWeight => {
                        match parse_decimal(&edit.buffer, "target weight") {
                            Ok(target_weight) => PositionUpdate {
                                target_weight: Some(target_weight),
                                ..Default::default()
                            },
                            Err(_) => return,
                        }
                    }
                };

                let id = edit.id.clone();
                self.portfolio.update(&id, update);
                self.row_edit = None;
            }
            KeyCode::Backspace => {
                edit.buffer.pop();
            }
            KeyCode::Char(c) => edit.buffer.push(c),
            _ => {}
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
