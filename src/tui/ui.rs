use crate::core::search::SearchState;
use crate::core::selection::ResultTab;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    DetailPanel, LocationCard, MapView, PropertyCard, ResultList, StatusKind, StatusView, TabBar,
    TitleBar,
};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, address_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(&app.status_message, app.radius_km).render(frame, title_area);

    // Sync props before rendering the stateful bar
    tui.address_bar.disabled = app.search.is_loading();
    tui.address_bar.focused = tui.input_mode == InputMode::Input;
    tui.address_bar.render(frame, address_area);

    match app.search.state() {
        SearchState::Empty => StatusView::new(StatusKind::Empty, spinner_frame).render(frame, main_area),
        SearchState::Loading => {
            StatusView::new(StatusKind::Loading, spinner_frame).render(frame, main_area)
        }
        SearchState::Error(failure) => {
            StatusView::new(StatusKind::Error(*failure), spinner_frame).render(frame, main_area)
        }
        SearchState::Result(_) => draw_result(frame, main_area, app, tui),
    }

    frame.render_widget(
        Line::from(help_text(app, tui)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    match tui.input_mode {
        InputMode::Input if app.profile().is_some() => " Enter Search  Esc Browse results  Ctrl+C Quit",
        InputMode::Input => " Enter Search  Ctrl+C Quit",
        InputMode::Browse if app.results.detail().is_some() => {
            " Esc Back  m Show on map  / Edit address  q Quit"
        }
        InputMode::Browse => " 1-5 Tabs  ←→ Switch  ↑↓ Move  Enter Open  / Edit address  q Quit",
    }
}

/// Map on the left, tabbed panel on the right. Narrow terminals stack them.
fn draw_result(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let results = &app.results;
    let Some(profile) = app.profile() else {
        return;
    };

    let [map_area, panel_area] = if area.width >= 100 {
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area)
    } else {
        Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area)
    };

    MapView::new(results.map_scene(profile)).render(frame, map_area);

    let [tabs_area, content_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(panel_area);
    TabBar::new(results.active_tab()).render(frame, tabs_area);

    if let Some(detail) = results.detail() {
        DetailPanel::new(detail).render(frame, content_area);
        return;
    }

    match results.active_tab() {
        ResultTab::Property => PropertyCard::new(profile).render(frame, content_area),
        ResultTab::Location => LocationCard::new(&profile.location).render(frame, content_area),
        tab => ResultList::new(&mut tui.list, results, profile, tab).render(frame, content_area),
    }
}
