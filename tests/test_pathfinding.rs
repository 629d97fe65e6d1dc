mod common;

use common::{coords, is_adjacent_step, is_orthogonal_step, parse_layout, visualize_path};
use gridpath::{AStar, GridMap, Node, SearchError, SearchSettings};

#[test]
fn test_straight_row_without_obstacles() {
    for diagonal in [false, true] {
        let map = GridMap::new(8, 3, diagonal, 1);
        let start = Node::new(1, 1);
        let goal = Node::new(6, 1);

        let path = map.find_path(start, goal).unwrap();

        assert_eq!(path.len(), 6, "diagonal={}\n{}", diagonal, visualize_path(&map, &path));
        assert_eq!(path[0], goal);
        assert_eq!(path[5], start);
        for pair in path.windows(2) {
            assert!(is_orthogonal_step(&pair[0], &pair[1], 1));
            assert_eq!(pair[0].y, 1);
        }
    }
}

#[test]
fn test_straight_column_in_world_units() {
    let map = GridMap::new(3, 6, false, 16);
    let start = Node::new(16, 80);
    let goal = Node::new(16, 0);

    let path = map.find_path(start, goal).unwrap();

    // 80 units is 5 cells, so 6 nodes
    assert_eq!(path.len(), 6, "{}", visualize_path(&map, &path));
    assert_eq!(
        coords(&path),
        vec![(16, 0), (16, 16), (16, 32), (16, 48), (16, 64), (16, 80)]
    );
}

#[test]
fn test_blocked_goal_returns_empty() {
    let mut map = GridMap::new(5, 5, true, 1);
    map.add_blocked(3, 3);
    let goal = Node::new(3, 3);

    for start in [(0, 0), (3, 2), (4, 4), (3, 3)] {
        let path = map.find_path(Node::new(start.0, start.1), goal).unwrap();
        assert!(path.is_empty(), "start {:?} should not reach a blocked goal", start);
    }
}

#[test]
fn test_blocked_start_is_still_expanded() {
    // Only the goal is checked against the blocked set
    let mut map = GridMap::new(3, 1, false, 1);
    map.add_blocked(0, 0);

    let path = map.find_path(Node::new(0, 0), Node::new(2, 0)).unwrap();

    assert_eq!(coords(&path), vec![(2, 0), (1, 0), (0, 0)]);
    assert_eq!(path[2].g, 0);
}

#[test]
fn test_start_equals_goal() {
    let map = GridMap::new(4, 4, false, 32);
    let node = Node::new(64, 32);

    let path = map.find_path(node, node).unwrap();

    assert_eq!(path.len(), 1);
    assert_eq!(path[0].coords(), (64, 32));
    assert_eq!(path[0].g, 0);
    assert_eq!(path[0].parent, None);
}

#[test]
fn test_enclosed_goal_is_unreachable_orthogonally() {
    let layout = r#"
        S□□□□
        □□■□□
        □■D■□
        □□■□□
        □□□□□
    "#;

    let (map, start, goal) = parse_layout(layout, false, 1);
    assert!(map.find_path(start, goal).unwrap().is_empty());

    // The same walls leave the diagonals open
    let (map, start, goal) = parse_layout(layout, true, 1);
    let path = map.find_path(start, goal).unwrap();
    assert_eq!(coords(&path), vec![(2, 2), (1, 1), (0, 0)], "{}", visualize_path(&map, &path));
    for pair in path.windows(2) {
        assert!(is_adjacent_step(&pair[0], &pair[1], 1));
        assert!(!is_orthogonal_step(&pair[0], &pair[1], 1));
    }
}

#[test]
fn test_diagonal_squeezes_between_walls() {
    let layout = r#"
        □□□□
        S■□□
        ■D□□
        □□□□
    "#;

    let (map, start, goal) = parse_layout(layout, true, 1);
    let path = map.find_path(start, goal).unwrap();
    assert_eq!(coords(&path), vec![(1, 2), (0, 1)]);

    let (map, start, goal) = parse_layout(layout, false, 1);
    let path = map.find_path(start, goal).unwrap();
    assert_eq!(
        coords(&path),
        vec![(1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0), (0, 1)],
        "{}",
        visualize_path(&map, &path)
    );
    for pair in path.windows(2) {
        assert!(is_orthogonal_step(&pair[0], &pair[1], 1));
    }
}

#[test]
fn test_diagonal_corner_fully_boxed_in() {
    let layout = r#"
        S■□
        ■D□
        □□□
    "#;

    // Orthogonally the start cannot leave its corner
    let (map, start, goal) = parse_layout(layout, false, 1);
    assert!(map.find_path(start, goal).unwrap().is_empty());

    let (map, start, goal) = parse_layout(layout, true, 1);
    assert_eq!(coords(&map.find_path(start, goal).unwrap()), vec![(1, 1), (0, 0)]);
}

#[test]
fn test_first_discovery_is_never_relaxed() {
    // The goal is first seen diagonally from the start (g = 4 + 6 = 10).
    // Expanding (0,1) and (1,0) later offers a cheaper g of 8, which must be ignored.
    let map = GridMap::new(2, 2, true, 1);
    let path = map.find_path(Node::new(0, 0), Node::new(1, 1)).unwrap();

    assert_eq!(coords(&path), vec![(1, 1), (0, 0)]);
    assert_eq!(path[0].g, 10);
    assert_eq!(path[0].h, 0);
    assert_eq!(path[0].f, 10);
}

#[test]
fn test_diagonal_penalty_is_configurable() {
    let map = GridMap::new(2, 2, true, 1);
    let settings = SearchSettings {
        base_step_cost: 1,
        diagonal_penalty: 0,
        max_iterations: None,
    };

    let path = map
        .find_path_with(settings, Node::new(0, 0), Node::new(1, 1))
        .unwrap();

    assert_eq!(path.len(), 2);
    assert_eq!(path[0].g, 1);
}

#[test]
fn test_repeated_queries_are_identical() {
    let (map, start, goal) = parse_layout(
        r#"
        S□□■□□
        □■□■□□
        □■□□□■
        □■■■□D
        "#,
        true,
        8,
    );

    let first = map.find_path(start, goal).unwrap();
    let second = map.find_path(start, goal).unwrap();
    assert!(!first.is_empty());

    let detail = |path: &[Node]| -> Vec<(u32, u32, u32, u32)> {
        path.iter().map(|n| (n.x, n.y, n.g, n.h)).collect()
    };
    assert_eq!(detail(&first), detail(&second));
}

#[test]
fn test_blocking_between_searches() {
    let mut map = GridMap::new(3, 1, false, 1);
    let start = Node::new(0, 0);
    let goal = Node::new(2, 0);

    assert_eq!(map.find_path(start, goal).unwrap().len(), 3);

    map.add_blocked(1, 0);
    assert!(map.find_path(start, goal).unwrap().is_empty());
}

#[test]
fn test_out_of_bounds_endpoints() {
    let map = GridMap::new(4, 4, false, 32);

    let err = map.find_path(Node::new(128, 0), Node::new(0, 0)).unwrap_err();
    assert!(matches!(err, SearchError::OutOfBounds { x: 128, y: 0, .. }));

    let err = map.find_path(Node::new(0, 0), Node::new(0, 512)).unwrap_err();
    assert!(matches!(err, SearchError::OutOfBounds { x: 0, y: 512, .. }));

    let err = map.find_path(Node::new(0, 0), Node::new(16, 0)).unwrap_err();
    assert_eq!(err, SearchError::Misaligned { x: 16, y: 0, cell_size: 32 });
}

#[test]
fn test_shared_map_across_threads() {
    let (map, start, goal) = parse_layout(
        r#"
        S□□□□□
        ■■■■□□
        □□□□□□
        D■■■■■
        "#,
        false,
        1,
    );
    let expected = coords(&map.find_path(start, goal).unwrap());
    assert_eq!(expected.len(), 12);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| coords(&AStar::new(&map).find_path(start, goal).unwrap())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
