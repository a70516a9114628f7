use std::{fs, path::Path};

use tracing::debug;

use crate::{pos, LifeResult, World};

/// parses a text pattern: `#` is a live cell, every other character is an
/// empty one and each line is a row, starting at the origin.
pub fn parse(text: &str) -> LifeResult<World> {
    let mut result = vec![];
    let mut pos = pos!(0, 0);
    for c in text.chars() {
        match c {
            '#' => {
                result.push(pos);
                pos.x += 1
            }
            '\n' => pos = pos!(0, pos.y + 1),
            '\r' => (),
            _ => pos.x += 1,
        }
    }
    World::new(result)
}

pub fn load(path: impl AsRef<Path>) -> LifeResult<World> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let world = parse(&content)?;
    debug!(path = %path.display(), population = world.population(), "loaded pattern");
    Ok(world)
}

/// the seed used when no pattern file is given.
pub fn default_seed() -> World {
    World::from_cells(
        [pos!(3, 1), pos!(1, 2), pos!(1, 3), pos!(2, 3)]
            .into_iter()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LifeError;

    #[test]
    fn parses_rows_and_columns() {
        let world = parse(".#.\n..#\n###\n").unwrap();
        let expected = World::new([pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]);
        assert_eq!(world, expected.unwrap());
    }

    #[test]
    fn only_hashes_are_live_and_crlf_is_ignored() {
        let world = parse(".@#\r\n#..").unwrap();
        assert_eq!(world, World::new([pos!(2, 0), pos!(0, 1)]).unwrap());
    }

    #[test]
    fn empty_text_is_an_empty_world() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("...\n...").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load("/nonexistent/golife/pattern.txt").unwrap_err();
        assert!(matches!(err, LifeError::Io(_)));
    }

    #[test]
    fn default_seed_has_four_cells() {
        assert_eq!(default_seed().population(), 4);
    }
}
