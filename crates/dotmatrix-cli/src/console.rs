use dotmatrix::Grid;

/// Draw a grid with half-block characters, two dot rows per terminal line.
pub fn render_blocks(grid: &Grid) -> String {
    let mut out = String::new();
    for (li, pair) in grid.rows().chunks(2).enumerate() {
        if li > 0 {
            out.push('\n');
        }
        let top = &pair[0];
        let bottom = pair.get(1);
        for (x, &upper) in top.iter().enumerate() {
            let lower = bottom.is_some_and(|row| row[x]);
            out.push(match (upper, lower) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
    }
    out
}

/// One `x,y` pair per line.
pub fn render_coordinates(coordinates: &[(i64, i64)]) -> String {
    coordinates
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join("\n")
}
