use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use common::{Marker, Markers, Maze, Position};

pub fn marker_color(marker: Marker) -> Option<Color> {
    match marker {
        Marker::Start => Some(Color::Green),
        Marker::Finish => Some(Color::Red),
        Marker::Visited => Some(Color::Yellow),
        Marker::Unmarked => None,
    }
}

pub fn write_plain(out: &mut impl Write, maze: &Maze, markers: &Markers) -> io::Result<()> {
    writeln!(out, "{}", maze.render(markers))
}

pub fn write_colored(out: &mut impl Write, maze: &Maze, markers: &Markers) -> io::Result<()> {
    for (row, cells) in maze.grid.iter().enumerate() {
        for (column, &cell) in cells.iter().enumerate() {
            let position = Position::new(column as i32, row as i32);
            let marker = markers.get(position).unwrap_or_default();
            let glyph = maze.glyph(cell, marker, position);

            match marker_color(marker) {
                Some(color) => queue!(out, SetForegroundColor(color), Print(glyph), ResetColor)?,
                None => queue!(out, Print(glyph))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_matches_maze_render() {
        let maze: Maze = "S.F".parse().unwrap();
        let mut markers = Markers::for_maze(&maze);
        markers.set(Position::new(1, 0), Marker::Visited);

        let mut out = Vec::new();
        write_plain(&mut out, &maze, &markers).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "S ··F \n");
    }

    #[test]
    fn test_colored_output_keeps_glyphs() {
        let maze: Maze = "#S.F#".parse().unwrap();
        let mut markers = Markers::for_maze(&maze);
        markers.set(Position::new(2, 0), Marker::Visited);

        let mut out = Vec::new();
        write_colored(&mut out, &maze, &markers).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("██"));
        assert!(text.contains("··"));
        assert!(text.ends_with('\n'));
    }
}
