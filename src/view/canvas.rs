use std::io::Write;

use crate::{pos, LifeResult, Pos};

const PAD: &str = " ";

/// A fixed grid of characters, addressed from its top-left corner.
pub struct Canvas {
    lines: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let lines = (0..height).map(|_| vec![' '; width]).collect();
        Self { lines }
    }

    /// paints every cell for which `f` returns a character.
    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for (y, line) in self.lines.iter_mut().enumerate() {
            for (x, slot) in line.iter_mut().enumerate() {
                if let Some(char) = f(pos!(x as i64, y as i64)) {
                    *slot = char;
                }
            }
        }
    }

    /// rows separated by newlines, cells within a row separated by a space.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(PAD)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// clears the terminal and draws the canvas below `header`.
    pub fn display(&self, out: &mut impl Write, header: &str) -> LifeResult<()> {
        let clear = termion::clear::All;
        let home = termion::cursor::Goto(1, 1);
        write!(out, "{clear}{home}")?;
        writeln!(out, "{header}")?;
        writeln!(out)?;
        writeln!(out, "{}", self.render())?;
        out.flush()?;
        Ok(())
    }
}
