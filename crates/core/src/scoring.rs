//! Scoring module - line clear points, drop points and level progression
//!
//! Line clears award `line_scores[min(rows, 4) - 1] * level`. Every
//! `lines_per_level` cleared lines raise the level by one up to `max_level`, and
//! each level shortens the fall interval geometrically:
//! `initial_fall_interval * speed_multiplier^(level - 1)`.

use serde::Serialize;

use crate::config::Rules;
use crate::types::STARTING_LEVEL;

/// Score, level, line count and fall speed of one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    /// Seconds between automatic descents
    pub fall_interval: f64,
}

impl Progress {
    /// Fresh session values: level 1, nothing scored
    pub fn new(rules: &Rules) -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            fall_interval: rules.initial_fall_interval,
        }
    }

    /// Credit a line clear of `rows` rows.
    ///
    /// Zero rows is a no-op. Lines are added before the level check, points use
    /// the level in effect before the clear.
    pub fn apply_line_clear(&mut self, rows: usize, rules: &Rules) -> LineClearResult {
        if rows == 0 {
            return LineClearResult::default();
        }

        self.lines = self.lines.saturating_add(rows as u32);
        let points = calculate_line_score(rows, self.level, rules);
        self.score = self.score.saturating_add(points);

        let mut level_up = None;
        let candidate = calculate_level(self.lines, rules);
        if candidate > self.level && candidate <= rules.max_level {
            self.level = candidate;
            self.fall_interval = fall_interval_for_level(self.level, rules);
            level_up = Some(self.level);
        }

        LineClearResult {
            rows,
            points,
            level_up,
        }
    }

    /// Credit one player-commanded single-cell descent
    pub fn add_soft_drop(&mut self, rules: &Rules) -> u32 {
        let points = calculate_drop_score(1, false, rules);
        self.score = self.score.saturating_add(points);
        points
    }

    /// Credit a hard drop over `cells` rows
    pub fn add_hard_drop(&mut self, cells: u32, rules: &Rules) -> u32 {
        let points = calculate_drop_score(cells, true, rules);
        self.score = self.score.saturating_add(points);
        points
    }
}

/// Outcome of [`Progress::apply_line_clear`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClearResult {
    pub rows: usize,
    pub points: u32,
    /// New level, if this clear raised it
    pub level_up: Option<u32>,
}

/// Line clear score for `rows` rows at `level`; 4 or more rows use the 4-row value.
pub fn calculate_line_score(rows: usize, level: u32, rules: &Rules) -> u32 {
    if rows == 0 {
        return 0;
    }
    rules.line_scores[rows.min(4) - 1].saturating_mul(level)
}

/// Drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool, rules: &Rules) -> u32 {
    let per_cell = if is_hard_drop {
        rules.hard_drop_points
    } else {
        rules.soft_drop_points
    };
    cells.saturating_mul(per_cell)
}

/// Uncapped level for a total line count
pub fn calculate_level(total_lines: u32, rules: &Rules) -> u32 {
    total_lines / rules.lines_per_level + STARTING_LEVEL
}

/// Seconds between automatic descents at `level`
pub fn fall_interval_for_level(level: u32, rules: &Rules) -> f64 {
    let steps = level.saturating_sub(STARTING_LEVEL) as i32;
    rules.initial_fall_interval * rules.speed_multiplier.powi(steps)
}
