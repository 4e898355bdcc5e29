//! Contract upload-and-summarize screen.
//!
//! Wraps the [`UploadView`] state machine: type or preselect a PDF path,
//! submit, read the summary, copy it, or reset for another contract. The
//! request is awaited inline, so the screen sits in the submitting state for
//! as long as the backend takes.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use jurito_core::{Backend, UploadView};

use super::event::{self, HandleResult, Mode};
use super::terminal::{self, Tui};

/// Screen state for `jurito summarize`
struct SummaryScreen {
    view: UploadView,
    path_input: String,
    mode: Mode,
    status: Option<String>,
}

impl SummaryScreen {
    fn new(initial_file: Option<PathBuf>) -> Self {
        let mut view = UploadView::new();
        let path_input = match initial_file {
            Some(path) => {
                let text = path.display().to_string();
                view.select_file(path);
                text
            }
            None => String::new(),
        };
        Self {
            view,
            path_input,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Leave edit mode, committing a non-empty path as the selected file
    fn commit_path(&mut self) {
        self.mode = Mode::Normal;
        if !self.path_input.is_empty() {
            self.view.select_file(PathBuf::from(&self.path_input));
        }
    }

    fn copy_result(&mut self) {
        if !self.view.has_result() {
            return;
        }
        let copied = ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(self.view.result_text().to_string()));
        self.status = Some(match copied {
            Ok(()) => "Copiado para a área de transferência".to_string(),
            Err(_) => "Não foi possível acessar a área de transferência".to_string(),
        });
    }

    fn reset(&mut self) {
        self.view.reset();
        self.path_input.clear();
        self.status = None;
    }
}

/// Run the summarize screen until the user quits
pub async fn run(backend: &dyn Backend, initial_file: Option<PathBuf>) -> Result<()> {
    let mut terminal = terminal::init()?;
    let mut screen = SummaryScreen::new(initial_file);

    let result = run_loop(&mut terminal, &mut screen, backend).await;

    terminal::restore(&mut terminal)?;
    result
}

async fn run_loop(terminal: &mut Tui, screen: &mut SummaryScreen, backend: &dyn Backend) -> Result<()> {
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
                // Draw once so the submitting state is visible while we wait
                screen.status = Some("Analisando contrato...".to_string());
                terminal.draw(|frame| render(frame, screen))?;
                screen.view.submit(backend).await;
                screen.status = None;
            }
        }
    }

    Ok(())
}

fn handle_key(screen: &mut SummaryScreen, key: KeyEvent) -> HandleResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return HandleResult::Quit;
    }

    // Result displayed: copy, reset, or quit; editing comes back only via reset
    if screen.view.has_result() {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,
            KeyCode::Char('c') => HandleResult::Copy,
            KeyCode::Char('n') => {
                screen.reset();
                HandleResult::Continue
            }
            _ => HandleResult::Continue,
        };
    }

    match screen.mode {
        Mode::Edit => match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                screen.commit_path();
                HandleResult::Continue
            }
            KeyCode::Backspace => {
                screen.path_input.pop();
                HandleResult::Continue
            }
            KeyCode::Char(c) => {
                screen.path_input.push(c);
                HandleResult::Continue
            }
            _ => HandleResult::Continue,
        },
        Mode::Normal => match key.code {
            KeyCode::Char('q') => HandleResult::Quit,
            KeyCode::Char('e') | KeyCode::Char('i') => {
                screen.mode = Mode::Edit;
                HandleResult::Continue
            }
            // Submitting with nothing selected surfaces the fixed message
            // without a network call; the view handles that path itself.
            KeyCode::Enter | KeyCode::Char('s') => HandleResult::Submit,
            _ => HandleResult::Continue,
        },
    }
}

fn render(frame: &mut Frame, screen: &SummaryScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled("jurito", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw(" — Análise inteligente de contratos"),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    if screen.view.has_result() {
        render_result(frame, screen, chunks[1]);
    } else {
        render_upload(frame, screen, chunks[1]);
    }

    let hint = if screen.view.has_result() {
        "c copiar · n novo contrato · q sair"
    } else if screen.mode == Mode::Edit {
        "Enter/Esc concluir · digite o caminho do PDF"
    } else {
        "e editar caminho · Enter analisar · q sair"
    };
    let status = screen.status.as_deref().unwrap_or(hint);
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_upload(frame: &mut Frame, screen: &SummaryScreen, area: ratatui::layout::Rect) {
    let input_style = if screen.mode == Mode::Edit {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::raw("Faça upload do seu contrato (PDF):"),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Arquivo: "),
            Span::styled(
                if screen.path_input.is_empty() {
                    "<nenhum arquivo selecionado>"
                } else {
                    screen.path_input.as_str()
                },
                input_style,
            ),
        ]),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Novo contrato "));
    frame.render_widget(card, area);
}

fn render_result(frame: &mut Frame, screen: &SummaryScreen, area: ratatui::layout::Rect) {
    let result = Paragraph::new(screen.view.result_text())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Resumo do contrato "));
    frame.render_widget(result, area);
}
