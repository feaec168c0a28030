use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use tracing::trace;

use atlas_core::{DatasetSummary, SceneState};

use crate::ui::{draw_ui, UiState};

pub struct ViewerApp {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    scene: SceneState,
    summary: DatasetSummary,
    ui_state: UiState,
    log_receiver: Receiver<String>,
}

impl ViewerApp {
    pub fn new(
        scene: SceneState,
        summary: DatasetSummary,
        log_receiver: Receiver<String>,
    ) -> Result<Self> {
        let stdout = std::io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        crossterm::terminal::enable_raw_mode()?;
        terminal.clear()?;
        terminal.hide_cursor()?;
        Ok(Self {
            terminal,
            scene,
            summary,
            ui_state: UiState::default(),
            log_receiver,
        })
    }

    pub fn run(mut self) -> Result<()> {
        let mut last_draw = Instant::now();
        self.terminal
            .draw(|frame| draw_ui(frame, &self.scene, &self.summary, &self.ui_state))?;

        loop {
            while let Ok(line) = self.log_receiver.try_recv() {
                self.ui_state.push_log(line);
            }

            if last_draw.elapsed() >= Duration::from_millis(100) {
                let scene = &self.scene;
                let summary = &self.summary;
                let ui_state = &self.ui_state;
                self.terminal
                    .draw(|frame| draw_ui(frame, scene, summary, ui_state))?;
                last_draw = Instant::now();
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('n') | KeyCode::Right => {
                            if self.scene.advance(1) {
                                trace!(step = self.scene.step(), "step.next");
                            }
                        }
                        KeyCode::Char('p') | KeyCode::Left => {
                            if self.scene.advance(-1) {
                                trace!(step = self.scene.step(), "step.prev");
                            }
                        }
                        KeyCode::Char(' ') => {
                            if let Some(checked) = self.scene.population_toggle() {
                                self.scene.set_population_overlay(!checked);
                            }
                        }
                        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
                            self.ui_state
                                .select_next_region(self.scene.regions().len());
                        }
                        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
                            self.ui_state
                                .select_prev_region(self.scene.regions().len());
                        }
                        KeyCode::Char(digit @ '1'..='9') => {
                            self.select_menu_option_by_index(digit as usize - '1' as usize);
                        }
                        _ => {}
                    }
                }
            }
        }

        self.terminal.show_cursor()?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    fn select_menu_option_by_index(&mut self, index: usize) {
        let Some(id) = self
            .scene
            .menu()
            .and_then(|menu| menu.spec.options().get(index))
            .map(|option| option.id)
        else {
            return;
        };
        if self.scene.select_menu_option(id) {
            trace!(option = id, "menu.selected");
        }
    }
}
