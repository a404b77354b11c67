//! # TUI Components
//!
//! All widgets of the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Created each frame from borrowed data:
//! - `TitleBar`: app name, radius, and status
//! - `TabBar`: the five result tabs
//! - `PropertyCard`, `LocationCard`: the two card tabs
//! - `DetailPanel`: drill-down for one school, place, or news item
//! - `MapView`: braille canvas with the property, school, and place markers
//! - `StatusView`: empty, loading, and error placeholders
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `AddressBar`: owns its text buffer, emits `AddressEvent`s
//! - `ResultList`: transient wrapper over a persistent `ResultListState`
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(&app.status_message, app.radius_km).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! TitleBar::render(frame, area); // reads from global App
//! ```

mod address_bar;
mod detail_panel;
mod location_card;
mod map_view;
mod property_card;
mod result_list;
mod status_view;
mod tab_bar;
mod title_bar;

pub use address_bar::{AddressBar, AddressEvent};
pub use detail_panel::DetailPanel;
pub use location_card::LocationCard;
pub use map_view::MapView;
pub use property_card::PropertyCard;
pub use result_list::{ResultList, ResultListState};
pub use status_view::{StatusKind, StatusView};
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
