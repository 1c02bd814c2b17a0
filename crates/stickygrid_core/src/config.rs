//! Injected layout and color configuration.
//!
//! # Responsibility
//! - Carry the display geometry the grid packs rows against.
//! - Carry the note color pair the host resolved for the current user.
//!
//! # Invariants
//! - Configuration is passed at grid construction, never read from ambient
//!   global state.
//! - Row capacity is computed once per grid and clamped to at least 1.

use serde::{Deserialize, Serialize};

/// Stroke/fill color pair applied to every note card.
///
/// Colors are opaque hex strings for the renderer; the core never parses
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteColors {
    /// Border color.
    pub stroke: String,
    /// Card background color.
    pub fill: String,
}

impl Default for NoteColors {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_string(),
            fill: "#FFFFFF".to_string(),
        }
    }
}

/// Grid geometry and styling, all in display pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Available horizontal space for note rows.
    pub screen_width: u32,
    /// Width of one note card.
    pub note_width: u32,
    /// Height of one note card.
    pub note_height: u32,
    /// Inner text margin of a card.
    pub margin: u32,
    /// Horizontal spacing between adjacent cards.
    pub spacing: u32,
    /// Injected stroke/fill pair.
    pub colors: NoteColors,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            note_width: 279,
            note_height: 279,
            margin: 21,
            spacing: 29,
            colors: NoteColors::default(),
        }
    }
}

impl GridConfig {
    /// Notes per row: `floor(screen_width / (note_width + spacing))`.
    ///
    /// Clamped to at least 1 so a screen narrower than a single card still
    /// lays out one column.
    pub fn row_capacity(&self) -> usize {
        let slot = (self.note_width + self.spacing).max(1) as usize;
        ((self.screen_width as usize) / slot).max(1)
    }

    /// Text layout width inside a card.
    pub fn layout_width(&self) -> u32 {
        self.note_width.saturating_sub(self.margin * 2)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridConfig, NoteColors};

    #[test]
    fn default_capacity_matches_geometry() {
        let config = GridConfig::default();
        // 1200 / (279 + 29) = 3
        assert_eq!(config.row_capacity(), 3);
    }

    #[test]
    fn narrow_screen_still_fits_one_column() {
        let config = GridConfig {
            screen_width: 100,
            ..GridConfig::default()
        };
        assert_eq!(config.row_capacity(), 1);
    }

    #[test]
    fn layout_width_subtracts_both_margins() {
        let config = GridConfig::default();
        assert_eq!(config.layout_width(), 279 - 42);
    }

    #[test]
    fn config_deserializes_with_defaults_filled_in() {
        let config: GridConfig =
            serde_json::from_str(r#"{"screen_width": 640}"#).unwrap();
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.note_width, 279);
        assert_eq!(config.colors, NoteColors::default());
    }
}
