//! # Map Focus Bridge
//!
//! Turns "show this item on the map" into a camera command. Holds at most one
//! command; a new one replaces the old. Reset whenever the profile changes.

use log::debug;

use crate::profile::GeoPoint;

/// Zoom for the whole-profile view.
pub const DEFAULT_ZOOM: f64 = 14.0;
/// Zoom for a focused item. Closer than [`DEFAULT_ZOOM`].
pub const FOCUS_ZOOM: f64 = 17.0;

/// Map tiles spanned horizontally by the visible area.
const VIEW_TILES: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusCommand {
    pub lat: f64,
    pub lon: f64,
    pub zoom: f64,
}

impl FocusCommand {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapFocus {
    current: Option<FocusCommand>,
}

impl MapFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last command wins; there is no queue.
    pub fn focus(&mut self, point: GeoPoint) -> FocusCommand {
        let command = FocusCommand {
            lat: point.lat,
            lon: point.lon,
            zoom: FOCUS_ZOOM,
        };
        debug!("Map focus -> ({}, {}) @ {}", command.lat, command.lon, command.zoom);
        self.current = Some(command);
        command
    }

    pub fn current(&self) -> Option<FocusCommand> {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Where the map is looking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl MapCamera {
    /// The focus command if one is active, otherwise the profile center at default zoom.
    pub fn resolve(center: GeoPoint, focus: Option<FocusCommand>) -> Self {
        match focus {
            Some(cmd) => Self {
                center: cmd.point(),
                zoom: cmd.zoom,
            },
            None => Self {
                center,
                zoom: DEFAULT_ZOOM,
            },
        }
    }

    /// Visible longitude span in degrees (web-mercator tile width × tiles).
    pub fn lon_span(&self) -> f64 {
        VIEW_TILES * 360.0 / 2f64.powf(self.zoom)
    }

    /// Visible latitude span, shrunk by the parallel's scale factor and the
    /// viewport aspect ratio (`height / width` in the same units).
    pub fn lat_span(&self, aspect: f64) -> f64 {
        self.lon_span() * self.center.lat.to_radians().cos().abs().max(0.01) * aspect
    }

    /// `([min_lon, max_lon], [min_lat, max_lat])`.
    pub fn bounds(&self, aspect: f64) -> ([f64; 2], [f64; 2]) {
        let half_lon = self.lon_span() / 2.0;
        let half_lat = self.lat_span(aspect) / 2.0;
        (
            [self.center.lon - half_lon, self.center.lon + half_lon],
            [self.center.lat - half_lat, self.center.lat + half_lat],
        )
    }
}
