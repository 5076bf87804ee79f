use conway_life::{Cell, Grid};
use proptest::prelude::*;

fn arbitrary_grid() -> impl Strategy<Value = Grid> {
    (1usize..=24, 1usize..=24).prop_flat_map(|(width, height)| {
        proptest::collection::vec(any::<bool>(), width * height).prop_map(move |alive| {
            let mut grid = Grid::new(width, height).unwrap();
            for (i, alive) in alive.into_iter().enumerate() {
                if alive {
                    grid.set(i % width, i / width, Cell::Alive);
                }
            }
            grid
        })
    })
}

proptest! {
    #[test]
    fn neighbor_counts_stay_in_range(grid in arbitrary_grid()) {
        let (width, height) = grid.dimensions();
        for y in 0..height {
            for x in 0..width {
                prop_assert!(grid.count_live_neighbors(x, y) <= 8);
            }
        }
    }

    #[test]
    fn step_preserves_dimensions(grid in arbitrary_grid()) {
        prop_assert_eq!(grid.step().dimensions(), grid.dimensions());
    }

    #[test]
    fn parallel_step_matches_serial(grid in arbitrary_grid()) {
        prop_assert_eq!(grid.step_parallel(), grid.step());
    }

    #[test]
    fn toggle_twice_restores_the_grid(grid in arbitrary_grid(), x in 0usize..24, y in 0usize..24) {
        let mut toggled = grid.clone();
        toggled.toggle(x, y);
        toggled.toggle(x, y);
        prop_assert_eq!(toggled, grid);
    }

    #[test]
    fn isolated_cells_die(x in 0usize..16, y in 0usize..16) {
        let mut grid = Grid::new(16, 16).unwrap();
        grid.set(x, y, Cell::Alive);
        prop_assert_eq!(grid.step().population(), 0);
    }

    #[test]
    fn population_never_exceeds_area(grid in arbitrary_grid()) {
        let (width, height) = grid.dimensions();
        prop_assert!(grid.step().population() <= width * height);
    }
}
