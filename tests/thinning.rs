use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ridgematch::{thin, thinning_step, PixelGrid, ThinningStep};

fn grid(rows: &[&str]) -> PixelGrid {
    let cells: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|c| c == '#').collect())
        .collect();
    PixelGrid::from_rows(&cells).unwrap()
}

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> PixelGrid {
    let data = (0..rows * cols).map(|_| rng.random_bool(density)).collect();
    PixelGrid::from_vec(data, rows, cols).unwrap()
}

fn is_subset(inner: &PixelGrid, outer: &PixelGrid) -> bool {
    inner.foreground().all(|(r, c)| outer.get(r, c) == Some(true))
}

#[test]
fn first_step_on_block() {
    let block = grid(&[".....", ".###.", ".###.", ".###.", "....."]);
    let expected = grid(&[".....", ".#.#.", "..##.", ".###.", "....."]);
    assert_eq!(thinning_step(&block, ThinningStep::First), expected);
}

#[test]
fn second_step_on_block() {
    let block = grid(&[".....", ".###.", ".###.", ".###.", "....."]);
    let expected = grid(&[".....", ".###.", ".##..", ".#.#.", "....."]);
    assert_eq!(thinning_step(&block, ThinningStep::Second), expected);
}

#[test]
fn thin_bar_to_skeleton() {
    let bar = grid(&[
        "............",
        ".########...",
        ".########...",
        ".########...",
        "............",
    ]);
    let expected = grid(&[
        "............",
        ".#......#...",
        "..#######...",
        ".##.....#...",
        "............",
    ]);
    assert_eq!(thin(&bar), expected);
}

#[test]
fn one_pixel_strokes_are_fixed_points() {
    let stroke = grid(&["...#.", "..##.", ".##..", "....."]);
    assert_eq!(thin(&stroke), stroke);

    let fork = grid(&[
        ".........",
        ".#.....#.",
        "..#...#..",
        "...#.#...",
        "....#....",
        "....#....",
        "....#....",
        ".........",
    ]);
    assert_eq!(thin(&fork), fork);
}

#[test]
fn thin_is_idempotent_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for &(rows, cols, density) in &[(8, 8, 0.5), (16, 12, 0.7), (20, 20, 0.35), (1, 9, 0.8)] {
        let g = random_grid(&mut rng, rows, cols, density);
        let once = thin(&g);
        assert_eq!(thin(&once), once);
    }
}

#[test]
fn thin_only_removes_pixels() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let g = random_grid(&mut rng, 15, 15, 0.6);
        let thinned = thin(&g);
        assert!(is_subset(&thinned, &g));
        assert!(thinned.count_foreground() <= g.count_foreground());
    }
}

#[test]
fn steps_never_touch_background() {
    let mut rng = StdRng::seed_from_u64(7);
    let g = random_grid(&mut rng, 12, 18, 0.5);
    for step in [ThinningStep::First, ThinningStep::Second] {
        assert!(is_subset(&thinning_step(&g, step), &g));
    }
}

#[test]
fn degenerate_grids() {
    assert_eq!(thin(&PixelGrid::new(0, 0)), PixelGrid::new(0, 0));
    let dot = grid(&["#"]);
    assert_eq!(thin(&dot), dot);
    let full = grid(&["###", "###", "###"]);
    assert!(is_subset(&thin(&full), &full));
}
