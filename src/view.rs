use std::{io::Write, ops::Range, thread, time::Duration};

use tracing::debug;

use crate::{pos, LifeResult, World};

pub use canvas::Canvas;
mod canvas;

const LIVE: char = '@';
const EMPTY: char = '.';

/// widest and tallest window that can be drawn from the command line.
pub const MAX_WINDOW_SIDE: usize = 1024;

/// The part of the plane that gets drawn, as one half-open range per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub xs: Range<i64>,
    pub ys: Range<i64>,
}

impl Window {
    pub fn new(xs: Range<i64>, ys: Range<i64>) -> Self {
        Self { xs, ys }
    }

    pub fn width(&self) -> usize {
        span(&self.xs)
    }

    pub fn height(&self) -> usize {
        span(&self.ys)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(0..10, 0..10)
    }
}

fn span(range: &Range<i64>) -> usize {
    usize::try_from(range.end.saturating_sub(range.start)).unwrap_or(0)
}

fn draw(world: &World, window: &Window) -> Canvas {
    let mut canvas = Canvas::new(window.width(), window.height());
    let origin = pos!(window.xs.start, window.ys.start);
    canvas.layer(|offset| {
        Some(if world.is_alive(origin + offset) {
            LIVE
        } else {
            EMPTY
        })
    });
    canvas
}

/// the cells of `world` inside `window`, one text row per `y`.
pub fn picture(world: &World, window: &Window) -> String {
    draw(world, window).render()
}

/// draws the first `generations` generations of `world`, waiting `pause`
/// after each frame.
pub fn animate(
    out: &mut impl Write,
    world: &World,
    generations: usize,
    window: &Window,
    pause: Duration,
) -> LifeResult<()> {
    for (g, world) in world.generations(generations).enumerate() {
        let population = world.population();
        let header = format!("Generation: {g:2}, Population: {population:2}");
        draw(&world, window).display(out, &header)?;
        debug!(generation = g, population, "displayed generation");
        thread::sleep(pause);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_marks_live_and_empty_cells() {
        let world = World::new([pos!(3, 1), pos!(1, 2), pos!(1, 3), pos!(2, 3)]).unwrap();
        let expected = [
            ". . . . .",
            ". . . @ .",
            ". @ . . .",
            ". @ @ . .",
            ". . . . .",
        ]
        .join("\n");
        assert_eq!(picture(&world, &Window::new(0..5, 0..5)), expected);
    }

    #[test]
    fn picture_follows_the_window_origin() {
        let world = World::new([pos!(-10, -10), pos!(100, 100)]).unwrap();
        assert_eq!(picture(&world, &Window::new(-11..-8, -10..-9)), ". @ .");
    }

    #[test]
    fn reversed_ranges_are_empty() {
        let window = Window::new(5..0, 0..2);
        assert_eq!(window.width(), 0);
        assert_eq!(window.height(), 2);
    }

    #[test]
    fn animate_prints_one_frame_per_generation() {
        let blinker = World::new([pos!(0, 1), pos!(1, 1), pos!(2, 1)]).unwrap();
        let mut out = Vec::new();
        animate(&mut out, &blinker, 3, &Window::new(0..3, 0..3), Duration::ZERO).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Generation:  0, Population:  3"));
        assert!(text.contains("Generation:  2, Population:  3"));
        assert!(!text.contains("Generation:  3"));
        assert!(text.contains(". @ .\n. @ .\n. @ ."));
    }
}
