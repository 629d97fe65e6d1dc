//! Remaining-cost estimate used to rank the open frontier.
//!
//! The estimate walks from `from` towards `to` one cell at a time, exhausting
//! the X axis before touching Y, and counts the steps. On aligned coordinates
//! this is the Manhattan distance in cells. Diagonal moves are ignored, so the
//! estimate is not admissible for diagonal searches and paths found on
//! diagonal maps need not be the cheapest.

use crate::node::Node;

/// Stepwise cell count from `from` to `to`
pub fn estimate(from: &Node, to: &Node, cell_size: u32) -> u32 {
    if cell_size == 0 {
        return 0;
    }

    let (mut x, mut y) = (from.x, from.y);
    let mut steps = 0;

    while x != to.x || y != to.y {
        if x > to.x {
            x -= cell_size.min(x - to.x);
        } else if x < to.x {
            x += cell_size.min(to.x - x);
        } else if y > to.y {
            y -= cell_size.min(y - to.y);
        } else {
            y += cell_size.min(to.y - y);
        }
        steps += 1;
    }

    steps
}
