#![allow(dead_code)]

use gridpath::{GridMap, Node};

/// Build a map from a text layout.
///
/// Format:
/// - S: start cell
/// - D: destination cell
/// - ■: blocked cell
/// - □: free cell
pub fn parse_layout(layout: &str, diagonal: bool, cell_size: u32) -> (GridMap, Node, Node) {
    let lines: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert!(!lines.is_empty(), "layout has no rows");

    let width = lines[0].chars().count() as u32;
    let height = lines.len() as u32;
    let mut map = GridMap::new(width, height, diagonal, cell_size);
    let mut start = None;
    let mut goal = None;

    for (row, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count() as u32, width, "ragged row {}", row);
        for (col, ch) in line.chars().enumerate() {
            let x = col as u32 * cell_size;
            let y = row as u32 * cell_size;
            match ch {
                '■' => map.add_blocked(x, y),
                'S' => start = Some(Node::new(x, y)),
                'D' => goal = Some(Node::new(x, y)),
                '□' => {}
                other => panic!("unexpected layout character {:?}", other),
            }
        }
    }

    (
        map,
        start.expect("layout has no S cell"),
        goal.expect("layout has no D cell"),
    )
}

/// Coordinates of each path node
pub fn coords(path: &[Node]) -> Vec<(u32, u32)> {
    path.iter().map(Node::coords).collect()
}

/// Render a path over the map for failure messages
pub fn visualize_path(map: &GridMap, path: &[Node]) -> String {
    let mut result = String::new();
    for row in 0..map.height {
        for col in 0..map.width {
            let (x, y) = (col * map.cell_size, row * map.cell_size);
            let symbol = if path.first().map(Node::coords) == Some((x, y)) {
                'D'
            } else if path.last().map(Node::coords) == Some((x, y)) {
                'S'
            } else if path.iter().any(|n| n.coords() == (x, y)) {
                '*'
            } else if map.is_blocked(x, y) {
                '■'
            } else {
                '□'
            };
            result.push(symbol);
        }
        result.push('\n');
    }
    result
}

/// Whether two nodes are one orthogonal step apart
pub fn is_orthogonal_step(a: &Node, b: &Node, cell_size: u32) -> bool {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    (dx == cell_size && dy == 0) || (dx == 0 && dy == cell_size)
}

/// Whether two nodes are one orthogonal or diagonal step apart
pub fn is_adjacent_step(a: &Node, b: &Node, cell_size: u32) -> bool {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    (dx == cell_size || dx == 0) && (dy == cell_size || dy == 0) && !(dx == 0 && dy == 0)
}
