//! Flight-incident intake wizard screen.
//!
//! Wraps the [`WizardView`] state machine in a three-step form: narrative,
//! structured passenger/flight fields, then the perk multi-select plus the
//! optional requested amount. Once the petition is displayed there is no way
//! back into editing, matching the view's own state machine.

use std::time::Duration;

use anyhow::Result;
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use jurito_core::{Backend, Field, OfferedPerk, WizardView};

use super::event::{self, HandleResult, Mode};
use super::terminal::{self, Tui};

const STEP_TITLES: [&str; 3] = ["1. Relato", "2. Dados", "3. Ofertas"];

/// One focusable item in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Input(Field),
    Perk(OfferedPerk),
}

/// Focusable items per step, in display order
fn step_items(step: usize) -> Vec<Item> {
    match step {
        0 => vec![Item::Input(Field::Narrative)],
        1 => vec![
            Item::Input(Field::FullName),
            Item::Input(Field::TaxId),
            Item::Input(Field::Email),
            Item::Input(Field::Airline),
            Item::Input(Field::FlightNumber),
            Item::Input(Field::OriginAirport),
            Item::Input(Field::DestinationAirport),
            Item::Input(Field::FlightDateTime),
            Item::Input(Field::Jurisdiction),
        ],
        _ => {
            let mut items: Vec<Item> = OfferedPerk::ALL.iter().copied().map(Item::Perk).collect();
            items.push(Item::Input(Field::RequestedAmount));
            items
        }
    }
}

/// Screen state for `jurito petition`
struct PetitionScreen {
    view: WizardView,
    mode: Mode,
    cursor: usize,
    status: Option<String>,
}

impl PetitionScreen {
    fn new() -> Self {
        Self {
            view: WizardView::new(),
            mode: Mode::Normal,
            cursor: 0,
            status: None,
        }
    }

    fn items(&self) -> Vec<Item> {
        step_items(self.view.step())
    }

    fn focused(&self) -> Item {
        let items = self.items();
        items[self.cursor.min(items.len() - 1)]
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.items().len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    fn advance_step(&mut self) {
        let before = self.view.step();
        self.view.advance();
        if self.view.step() != before {
            self.cursor = 0;
        }
    }

    fn retreat_step(&mut self) {
        let before = self.view.step();
        self.view.retreat();
        if self.view.step() != before {
            self.cursor = 0;
        }
    }

    fn copy_result(&mut self) {
        if !self.view.has_result() {
            return;
        }
        let copied = ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(self.view.result_document().to_string()));
        self.status = Some(match copied {
            Ok(()) => "Petição copiada para a área de transferência".to_string(),
            Err(_) => "Não foi possível acessar a área de transferência".to_string(),
        });
    }
}

/// Run the petition wizard screen until the user quits
pub async fn run(backend: &dyn Backend) -> Result<()> {
    let mut terminal = terminal::init()?;
    let mut screen = PetitionScreen::new();

    let result = run_loop(&mut terminal, &mut screen, backend).await;

    terminal::restore(&mut terminal)?;
    result
}

async fn run_loop(terminal: &mut Tui, screen: &mut PetitionScreen, backend: &dyn Backend) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, screen))?;

        let Some(event) = event::poll(Duration::from_millis(100))? else {
            continue;
        };
        let Event::Key(key) = event else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(screen, key) {
            HandleResult::Continue => {}
            HandleResult::Quit => break,
            HandleResult::Copy => screen.copy_result(),
            HandleResult::Submit => {
                screen.status = Some("Gerando petição...".to_string());
                terminal.draw(|frame| render(frame, screen))?;
                screen.view.submit(backend).await;
                screen.status = None;
            }
        }
    }

    Ok(())
}

fn handle_key(screen: &mut PetitionScreen, key: KeyEvent) -> HandleResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return HandleResult::Quit;
    }

    // Result displayed: copy or quit, nothing else
    if screen.view.has_result() {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,
            KeyCode::Char('y') | KeyCode::Char('c') => HandleResult::Copy,
            _ => HandleResult::Continue,
        };
    }

    match screen.mode {
        Mode::Edit => {
            let Item::Input(field) = screen.focused() else {
                screen.mode = Mode::Normal;
                return HandleResult::Continue;
            };
            match key.code {
                KeyCode::Esc | KeyCode::Enter => screen.mode = Mode::Normal,
                KeyCode::Backspace => {
                    let mut value = screen.view.field(field).to_string();
                    value.pop();
                    screen.view.update_field(field, value);
                }
                KeyCode::Char(c) => {
                    let mut value = screen.view.field(field).to_string();
                    value.push(c);
                    screen.view.update_field(field, value);
                }
                _ => {}
            }
            HandleResult::Continue
        }
        Mode::Normal => match key.code {
            KeyCode::Char('q') => HandleResult::Quit,
            KeyCode::Char('j') | KeyCode::Down => {
                screen.move_cursor(1);
                HandleResult::Continue
            }
            KeyCode::Char('k') | KeyCode::Up => {
                screen.move_cursor(-1);
                HandleResult::Continue
            }
            KeyCode::Char(' ') => {
                if let Item::Perk(perk) = screen.focused() {
                    screen.view.toggle_offered(perk);
                }
                HandleResult::Continue
            }
            KeyCode::Enter | KeyCode::Char('i') => {
                match screen.focused() {
                    Item::Perk(perk) => screen.view.toggle_offered(perk),
                    Item::Input(_) => screen.mode = Mode::Edit,
                }
                HandleResult::Continue
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                screen.advance_step();
                HandleResult::Continue
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                screen.retreat_step();
                HandleResult::Continue
            }
            KeyCode::Char('s') if screen.view.on_last_step() => HandleResult::Submit,
            _ => HandleResult::Continue,
        },
    }
}

fn render(frame: &mut Frame, screen: &PetitionScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled("jurito", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw(" — Petição por incidente de voo"),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    if screen.view.has_result() {
        frame.render_widget(Paragraph::new(""), chunks[1]);
        render_result(frame, screen, chunks[2]);
    } else {
        let tabs = Tabs::new(STEP_TITLES.to_vec())
            .select(screen.view.step())
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, chunks[1]);
        render_form(frame, screen, chunks[2]);
    }

    let hint = if screen.view.has_result() {
        "y copiar petição · q sair"
    } else if screen.mode == Mode::Edit {
        "Enter/Esc concluir edição"
    } else if screen.view.on_last_step() {
        "j/k campo · Espaço marcar · i editar · p voltar · s enviar · q sair"
    } else {
        "j/k campo · i editar · n avançar · p voltar · q sair"
    };
    let status = screen.status.as_deref().unwrap_or(hint);
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn render_form(frame: &mut Frame, screen: &PetitionScreen, area: Rect) {
    let items = screen.items();
    let editing = screen.mode == Mode::Edit;

    let mut lines = Vec::with_capacity(items.len() * 2);
    for (index, item) in items.iter().enumerate() {
        let focused = index == screen.cursor;
        let marker = if focused { "› " } else { "  " };
        let style = match (focused, editing) {
            (true, true) => Style::default().fg(Color::Yellow),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };

        let line = match item {
            Item::Input(field) => {
                let value = screen.view.field(*field);
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{}: ", field.label()), Style::default().fg(Color::Cyan)),
                    Span::styled(value.to_string(), style),
                ])
            }
            Item::Perk(perk) => {
                let mark = if screen.view.offered(*perk) { "[x]" } else { "[ ]" };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{} {}", mark, perk.label()), style),
                ])
            }
        };
        lines.push(line);
    }

    let form = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Passo {} de {} ",
            screen.view.step() + 1,
            jurito_core::TOTAL_STEPS
        )));
    frame.render_widget(form, area);
}

fn render_result(frame: &mut Frame, screen: &PetitionScreen, area: Rect) {
    let result = Paragraph::new(screen.view.result_document())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Petição gerada "));
    frame.render_widget(result, area);
}
