use std::collections::VecDeque;

use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use atlas_core::{DatasetSummary, Rgb, SceneState, MAX_STEP};
use atlas_data::Metric;

pub struct UiState {
    pub logs: VecDeque<String>,
    pub max_logs: usize,
    pub selected_region: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            logs: VecDeque::new(),
            max_logs: 8,
            selected_region: 0,
        }
    }
}

impl UiState {
    pub fn push_log<S: Into<String>>(&mut self, line: S) {
        let mut text: String = line.into();
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
        if text.is_empty() {
            return;
        }
        self.logs.push_front(text);
        while self.logs.len() > self.max_logs {
            self.logs.pop_back();
        }
    }

    pub fn select_next_region(&mut self, count: usize) {
        if count > 0 {
            self.selected_region = (self.selected_region + 1) % count;
        }
    }

    pub fn select_prev_region(&mut self, count: usize) {
        if count > 0 {
            self.selected_region = (self.selected_region + count - 1) % count;
        }
    }
}

pub fn draw_ui(frame: &mut Frame, scene: &SceneState, summary: &DatasetSummary, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(7),
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], scene, summary);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    draw_map(frame, body[0], scene);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Min(5),
        ])
        .split(body[1]);

    draw_narrative(frame, sidebar[0], scene);
    draw_menu_or_commands(frame, sidebar[1], scene);
    draw_inspector(frame, sidebar[2], scene, state);

    draw_logs(frame, chunks[2], state);
}

/// Opacity is approximated by scaling the channel values toward black.
fn dim(rgb: Rgb, opacity: f64) -> Color {
    let scale = opacity.clamp(0.0, 1.0);
    Color::Rgb(
        (rgb.r as f64 * scale) as u8,
        (rgb.g as f64 * scale) as u8,
        (rgb.b as f64 * scale) as u8,
    )
}

fn draw_header(frame: &mut Frame, area: Rect, scene: &SceneState, summary: &DatasetSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Energy Atlas");
    let prev_style = if scene.can_advance(-1) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let next_style = if scene.can_advance(1) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("◀ prev", prev_style),
        Span::raw(" | "),
        Span::styled(
            format!("step {}/{} — {}", scene.step(), MAX_STEP, scene.step_name()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("next ▶", next_style),
        Span::raw(format!(
            " | {} EPCI | {}",
            summary.feature_count(),
            scene.config().backdrop().attribution()
        )),
    ]);
    let text = Paragraph::new(line).wrap(Wrap { trim: true });
    frame.render_widget(block, area);
    frame.render_widget(
        text,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

/// View window: the dataset bounds when `fit_bounds` is set, otherwise
/// a span around the configured center sized by the zoom level.
fn view_bounds(scene: &SceneState) -> atlas_data::Bounds {
    let map = scene.config().map();
    if map.fit_bounds() {
        return scene.regions().bounds();
    }
    let (lat, lon) = map.center();
    let span = 360.0 / f64::powi(2.0, map.zoom() as i32);
    let mut bounds = atlas_data::Bounds::from_point(lon - span / 2.0, lat - span / 2.0);
    bounds.extend(lon + span / 2.0, lat + span / 2.0);
    bounds
}

fn draw_map(frame: &mut Frame, area: Rect, scene: &SceneState) {
    let bounds = view_bounds(scene);
    let pad_x = (bounds.width() * 0.08).max(0.01);
    let pad_y = (bounds.height() * 0.08).max(0.01);

    let backdrop = scene.config().backdrop();
    let shade = (70.0 * backdrop.opacity()) as u8;
    let background = if backdrop.grayscale() {
        Color::Rgb(shade, shade, shade)
    } else {
        Color::Rgb(shade, shade, shade.saturating_add(12))
    };

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Carte"))
        .marker(symbols::Marker::Braille)
        .background_color(background)
        .x_bounds([bounds.min_lon - pad_x, bounds.max_lon + pad_x])
        .y_bounds([bounds.min_lat - pad_y, bounds.max_lat + pad_y])
        .paint(|ctx| {
            for (feature, view) in scene
                .regions()
                .features()
                .iter()
                .zip(scene.feature_views())
            {
                let fill = dim(view.style.fill_color, view.style.fill_opacity);
                let stroke = dim(view.style.color, view.style.opacity);
                for ring in feature.geometry().rings() {
                    ctx.draw(&Points {
                        coords: ring,
                        color: fill,
                    });
                    for segment in ring.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: segment[0].0,
                            y1: segment[0].1,
                            x2: segment[1].0,
                            y2: segment[1].1,
                            color: if view.style.weight > 0 { stroke } else { fill },
                        });
                    }
                }
            }

            // Markers paint after the polygons, largest first.
            let radius_unit = (bounds.width() / 300.0).max(1e-6);
            for marker in scene.markers() {
                ctx.draw(&Circle {
                    x: marker.center.0,
                    y: marker.center.1,
                    radius: marker.radius * radius_unit,
                    color: dim(marker.fill_color, marker.fill_opacity.max(0.6)),
                });
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_narrative(frame: &mut Frame, area: Rect, scene: &SceneState) {
    let (title, body) = match scene.panel() {
        Some((_, text)) => (text.title.clone(), text.body.clone()),
        None => (format!("Étape {}", scene.step()), String::new()),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let paragraph = Paragraph::new(body).wrap(Wrap { trim: true });
    frame.render_widget(block, area);
    frame.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn draw_menu_or_commands(frame: &mut Frame, area: Rect, scene: &SceneState) {
    let (title, lines) = match scene.menu() {
        Some(menu) => {
            let mut lines: Vec<Line> = menu
                .spec
                .options()
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let indicator = if option.id == menu.selected {
                        "(•)"
                    } else {
                        "( )"
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{} {}", index + 1, indicator),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(format!(" {}", option.label)),
                    ])
                })
                .collect();
            if let Some(checked) = scene.population_toggle() {
                let mark = if checked { "[x]" } else { "[ ]" };
                lines.push(Line::from(vec![
                    Span::styled("space", Style::default().fg(Color::Yellow)),
                    Span::raw(format!(" {} Afficher la population", mark)),
                ]));
            }
            (format!("Menu — {}", menu.spec.name()), lines)
        }
        None => (
            "Commands".to_string(),
            vec![
                Line::from(vec![
                    Span::styled("n / →", Style::default().fg(Color::Yellow)),
                    Span::raw("  next step"),
                ]),
                Line::from(vec![
                    Span::styled("p / ←", Style::default().fg(Color::Yellow)),
                    Span::raw("  previous step"),
                ]),
                Line::from(vec![
                    Span::styled("1-9", Style::default().fg(Color::Yellow)),
                    Span::raw("    pick a menu option"),
                ]),
                Line::from(vec![
                    Span::styled("j / k", Style::default().fg(Color::Yellow)),
                    Span::raw("  inspect another EPCI"),
                ]),
                Line::from(vec![
                    Span::styled("q", Style::default().fg(Color::Yellow)),
                    Span::raw("      exit the tour"),
                ]),
            ],
        ),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(block, area);
    frame.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn draw_inspector(frame: &mut Frame, area: Rect, scene: &SceneState, state: &UiState) {
    let block = Block::default().borders(Borders::ALL).title("EPCI");
    let features = scene.regions().features();
    let lines: Vec<Line> = if features.is_empty() {
        vec![Line::from(Span::raw("no features loaded"))]
    } else {
        let index = state.selected_region.min(features.len() - 1);
        let feature = &features[index];
        let view = &scene.feature_views()[index];
        let mut lines = vec![
            Line::from(Span::styled(
                feature.properties().display_name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(format!(
                "{} | pop. {}",
                feature.properties().forme_epci.label(),
                feature.properties().pmun_epci
            ))),
        ];
        for detail in &view.tooltip.details {
            lines.push(Line::from(Span::raw(detail.clone())));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "fill {} | {}: {}",
                view.style.fill_color,
                Metric::PopulationShare.label(),
                Metric::PopulationShare.value_of(feature.properties())
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    };
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(block, area);
    frame.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn draw_logs(frame: &mut Frame, area: Rect, state: &UiState) {
    let block = Block::default().borders(Borders::ALL).title("Logs");
    let lines: Vec<Line> = state
        .logs
        .iter()
        .map(|entry| Line::from(Span::raw(entry)))
        .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(block, area);
    frame.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}
