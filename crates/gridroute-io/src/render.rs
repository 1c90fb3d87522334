//! Text rendering of grids.

use crossterm::style::{Color, Stylize};
use gridroute_core::{CellState, Grid};

/// Which token set to draw cells with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Ascii,
    Emoji,
}

impl GlyphSet {
    /// The token for a cell state. Every state maps to a distinct token.
    pub const fn glyph(self, state: CellState) -> &'static str {
        match self {
            GlyphSet::Ascii => match state {
                CellState::Empty => ".",
                CellState::Obstacle => "#",
                CellState::Visited => "+",
                CellState::Path => "*",
                CellState::Start => "S",
                CellState::Finish => "F",
                CellState::Chosen => "?",
            },
            GlyphSet::Emoji => match state {
                CellState::Empty => "0",
                CellState::Obstacle => "\u{26f0}\u{fe0f}",
                CellState::Visited => "\u{1f50d}",
                CellState::Path => "\u{1f697}",
                CellState::Start => "\u{1f6a6}",
                CellState::Finish => "\u{1f3c1}",
                CellState::Chosen => "\u{1f4cd}",
            },
        }
    }
}

fn color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::DarkGrey,
        CellState::Obstacle => Color::White,
        CellState::Visited => Color::DarkYellow,
        CellState::Path => Color::Cyan,
        CellState::Start => Color::Green,
        CellState::Finish => Color::Red,
        CellState::Chosen => Color::Magenta,
    }
}

/// Turns a grid into text: one line per row, tokens separated by a single
/// space, every line newline-terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub glyphs: GlyphSet,
    /// Wrap tokens in terminal colour escapes.
    pub color: bool,
}

impl Renderer {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self {
            glyphs,
            color: false,
        }
    }

    /// Enable or disable colour (builder).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for row in grid.rows_iter() {
            for (i, &state) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let glyph = self.glyphs.glyph(state);
                if self.color {
                    let styled = glyph.with(color(state));
                    let styled = if matches!(state, CellState::Start | CellState::Finish) {
                        styled.bold()
                    } else {
                        styled
                    };
                    out.push_str(&styled.to_string());
                } else {
                    out.push_str(glyph);
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use gridroute_core::Coord;

    use super::*;

    fn sample() -> Grid {
        let mut g = Grid::from_rows(vec![
            vec![CellState::Empty, CellState::Obstacle, CellState::Empty],
            vec![CellState::Empty, CellState::Empty, CellState::Empty],
        ])
        .unwrap();
        g.transition(Coord::new(1, 0), CellState::Visited).unwrap();
        g
    }

    #[test]
    fn ascii_layout() {
        let text = Renderer::new(GlyphSet::Ascii).render(&sample());
        assert_eq!(text, ". # .\n+ . .\n");
    }

    #[test]
    fn emoji_layout() {
        let text = Renderer::new(GlyphSet::Emoji).render(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(' ').count(), 3);
        assert!(text.ends_with('\n'));
        assert!(lines[1].starts_with("\u{1f50d}"));
    }

    #[test]
    fn glyphs_are_distinct() {
        for set in [GlyphSet::Ascii, GlyphSet::Emoji] {
            let seen: HashSet<_> = CellState::ALL.iter().map(|&s| set.glyph(s)).collect();
            assert_eq!(seen.len(), CellState::ALL.len());
        }
    }

    #[test]
    fn color_keeps_tokens() {
        let text = Renderer::new(GlyphSet::Ascii).with_color(true).render(&sample());
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains('#'));
        assert!(text.contains('+'));
    }
}
