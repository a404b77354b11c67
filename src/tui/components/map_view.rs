//! # Map View Component
//!
//! Braille canvas plotting the property, school, and place markers around
//! the camera the `MapScene` resolves to. Stateless.
//!
//! Legend: `◆` property, `S` school, `·` place, `◎` focused item.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Points};

use crate::core::controller::MapScene;
use crate::tui::component::Component;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

pub struct MapView<'a> {
    pub scene: MapScene<'a>,
}

impl<'a> MapView<'a> {
    pub fn new(scene: MapScene<'a>) -> Self {
        Self { scene }
    }
}

/// Height/width ratio of the drawable area in the same physical units.
fn viewport_aspect(area: Rect) -> f64 {
    let width = f64::from(area.width.saturating_sub(2).max(1));
    let height = f64::from(area.height.saturating_sub(2).max(1));
    height * CELL_ASPECT / width
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let camera = self.scene.camera();
        let (x_bounds, y_bounds) = camera.bounds(viewport_aspect(area));

        let school_coords: Vec<(f64, f64)> = self
            .scene
            .schools
            .iter()
            .map(|s| (s.lon, s.lat))
            .collect();
        let place_coords: Vec<(f64, f64)> = self
            .scene
            .places
            .iter()
            .map(|p| (p.lon, p.lat))
            .collect();
        let center = self.scene.center;
        let focus = self.scene.focus;

        let title = Line::from(vec![
            Span::raw(" Map "),
            Span::styled(
                format!("z{:.0} ", camera.zoom),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let canvas = Canvas::default()
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &place_coords,
                    color: Color::Yellow,
                });
                ctx.layer();
                for &(x, y) in &school_coords {
                    ctx.print(x, y, Span::styled("S", Style::default().fg(Color::Green)));
                }
                ctx.print(
                    center.lon,
                    center.lat,
                    Span::styled(
                        "◆",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                );
                if let Some(cmd) = focus {
                    ctx.print(
                        cmd.lon,
                        cmd.lat,
                        Span::styled(
                            "◎",
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
