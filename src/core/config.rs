//! Game configuration.
//!
//! The standard rules are the `Default`. The knobs here exist for the rule
//! variants people actually play (house rules on reserve timing, opening
//! layout) and for tests that want short games.

use serde::{Deserialize, Serialize};

/// How the opening position is laid out.
///
/// Pieces are always dealt in pairs along each line of the board: two cells
/// for the first player, then two for the second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpeningLayout {
    /// The pair alternation carries over from one line into the next, so the
    /// second line starts with the second player. 18 pieces each.
    #[default]
    Continuous,
    /// Every line starts again with the first player. 24/12 split.
    ///
    /// This is the layout where every line reads first, first, second,
    /// second, first, first; use it when that per-line pattern is wanted.
    RowReset,
}

/// Rule parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tallest stack allowed after a move resolves. Anything above is
    /// removed from the bottom.
    pub max_stack_height: usize,

    /// Captured pieces needed to win.
    pub captures_to_win: u32,

    /// Whether reserve placement must happen on the placer's own turn.
    pub reserve_requires_turn: bool,

    /// Opening layout.
    pub opening: OpeningLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_stack_height: 5,
            captures_to_win: 6,
            reserve_requires_turn: true,
            opening: OpeningLayout::Continuous,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_max_stack_height(mut self, height: usize) -> Self {
        self.max_stack_height = height.max(1);
        self
    }

    #[must_use]
    pub fn with_captures_to_win(mut self, captures: u32) -> Self {
        self.captures_to_win = captures;
        self
    }

    #[must_use]
    pub fn with_reserve_requires_turn(mut self, required: bool) -> Self {
        self.reserve_requires_turn = required;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: OpeningLayout) -> Self {
        self.opening = opening;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_stack_height, 5);
        assert_eq!(config.captures_to_win, 6);
        assert!(config.reserve_requires_turn);
        assert_eq!(config.opening, OpeningLayout::Continuous);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_max_stack_height(3)
            .with_captures_to_win(2)
            .with_reserve_requires_turn(false)
            .with_opening(OpeningLayout::RowReset);

        assert_eq!(config.max_stack_height, 3);
        assert_eq!(config.captures_to_win, 2);
        assert!(!config.reserve_requires_turn);
        assert_eq!(config.opening, OpeningLayout::RowReset);
    }

    #[test]
    fn test_stack_height_floor() {
        let config = GameConfig::default().with_max_stack_height(0);
        assert_eq!(config.max_stack_height, 1);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_opening(OpeningLayout::RowReset);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
