use rand::{rngs::StdRng, SeedableRng};
use rlifesim_lib::{
    file,
    patterns::{self, GLIDER, GOSPER_GUN},
    rules, Command, Config,
    Error::{
        InvalidDensity, InvalidDimension, MalformedHeader, MalformedRow, OutOfBounds, SizeMismatch,
    },
    Grid, Seed, Simulation, State,
};
use std::error::Error;

#[test]
fn default_config() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    assert_eq!(config.size, 100);
    assert_eq!(config.seed, Seed::Random);
    let grid = config.grid()?;
    assert_eq!(grid.size(), 100);
    Ok(())
}

#[test]
fn empty_grid() -> Result<(), Box<dyn Error>> {
    let grid = Grid::new(3)?;
    assert_eq!(grid.size(), 3);
    assert_eq!(grid.population(), 0);
    assert_eq!(grid.to_string(), "...\n...\n...\n");
    Ok(())
}

#[test]
fn invalid_dimension() {
    assert_eq!(Grid::new(0).unwrap_err(), InvalidDimension(0));
    assert_eq!(
        Config::new(0).grid().unwrap_err(),
        InvalidDimension(0)
    );
}

#[test]
fn oversized_grid() {
    // The cell count of a square this big overflows `usize`, so a
    // pattern file with a huge header must be rejected, not trusted.
    let huge = usize::MAX / 2;
    assert_eq!(Grid::new(huge).unwrap_err(), InvalidDimension(huge));
    assert_eq!(
        file::parse(&format!("{}\n", huge)).unwrap_err(),
        InvalidDimension(huge)
    );
}

#[test]
fn invalid_density() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        Grid::random(10, 1.5, &mut rng).unwrap_err(),
        InvalidDensity(1.5)
    );
    assert_eq!(
        Config::new(10).set_density(-0.1).grid().unwrap_err(),
        InvalidDensity(-0.1)
    );
}

#[test]
fn random_density_extremes() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(Grid::random(10, 0.0, &mut rng)?.population(), 0);
    assert_eq!(Grid::random(10, 1.0, &mut rng)?.population(), 100);
    Ok(())
}

#[test]
fn toroidal_wrap() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(4)?;
    grid.set((-1, -1), State::Alive);
    assert_eq!(grid.get((3, 3)), State::Alive);
    assert_eq!(grid.get((7, -5)), State::Alive);
    assert_eq!(grid.population(), 1);
    Ok(())
}

#[test]
fn corner_neighborhood() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(5)?;
    for coord in [(4, 4), (4, 0), (0, 4), (1, 4)] {
        grid.set(coord, State::Alive);
    }
    assert_eq!(rules::live_neighbors(&grid, (0, 0)), 4);
    Ok(())
}

#[test]
fn lone_cell_on_tiny_grid() -> Result<(), Box<dyn Error>> {
    // All eight wrapped offsets alias the cell itself.
    let mut grid = Grid::new(1)?;
    grid.set((0, 0), State::Alive);
    assert_eq!(rules::live_neighbors(&grid, (0, 0)), 8);
    assert_eq!(rules::step(&grid).population(), 0);
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(5)?;
    for col in 1..=3 {
        grid.set((1, col), State::Alive);
    }
    let next = rules::step(&grid);
    assert_eq!(next.to_string(), "..o..\n..o..\n..o..\n.....\n.....\n");
    assert_eq!(rules::step(&next), grid);
    Ok(())
}

#[test]
fn determinism() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(2718);
    let grid = Grid::random(32, 0.3, &mut rng)?;
    assert_eq!(rules::step(&grid), rules::step(&grid));

    let mut rng = StdRng::seed_from_u64(2718);
    assert_eq!(Grid::random(32, 0.3, &mut rng)?, grid);
    Ok(())
}

#[test]
fn glider() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(20)?;
    patterns::place(&mut grid, &GLIDER, 1, 1)?;
    for _ in 0..4 {
        grid = rules::step(&grid);
    }
    let mut expected = Grid::new(20)?;
    patterns::place(&mut expected, &GLIDER, 2, 2)?;
    assert_eq!(grid, expected);
    Ok(())
}

#[test]
fn glider_wraps_around() -> Result<(), Box<dyn Error>> {
    // One cell diagonally per 4 generations: after 80 the glider has
    // gone around the 20-cell torus and is back where it started.
    let mut grid = Grid::new(20)?;
    patterns::place(&mut grid, &GLIDER, 1, 1)?;
    let start = grid.clone();
    for _ in 0..80 {
        grid = rules::step(&grid);
    }
    assert_eq!(grid, start);
    Ok(())
}

#[test]
fn placement() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(10)?;
    grid.set((1, 2), State::Alive);
    patterns::place(&mut grid, &GLIDER, 1, 1)?;
    // The dead corner of the template overwrites the living cell.
    assert_eq!(grid.get((1, 2)), State::Dead);
    assert_eq!(grid.get((1, 3)), State::Alive);
    assert_eq!(grid.population(), 5);

    let mut grid = Grid::new(50)?;
    patterns::place(&mut grid, &GOSPER_GUN, 1, 1)?;
    assert_eq!(grid.population(), 36);
    for row in 0..GOSPER_GUN.height() {
        for col in 0..GOSPER_GUN.width() {
            assert_eq!(
                grid.get((row as isize + 1, col as isize + 1)),
                GOSPER_GUN.cell(row, col)
            );
        }
    }
    Ok(())
}

#[test]
fn placement_out_of_bounds() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(40)?;
    let before = grid.clone();
    assert_eq!(
        patterns::place(&mut grid, &GOSPER_GUN, 10, 10),
        Err(OutOfBounds(
            String::from("Gosper glider gun"),
            10,
            10
        ))
    );
    assert_eq!(grid, before);

    let mut grid = Grid::new(3)?;
    assert!(patterns::place(&mut grid, &GLIDER, 1, 1).is_err());
    assert_eq!(grid.population(), 0);
    Ok(())
}

#[test]
fn gosper_gun_fires() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(50)?;
    patterns::place(&mut grid, &GOSPER_GUN, 1, 1)?;
    for _ in 0..30 {
        grid = rules::step(&grid);
    }
    assert_eq!(grid.population(), 41);
    for _ in 0..30 {
        grid = rules::step(&grid);
    }
    assert_eq!(grid.population(), 46);
    Ok(())
}

#[test]
fn toggle_floors() -> Result<(), Box<dyn Error>> {
    let mut sim = Simulation::new(Grid::new(10)?);
    sim.dispatch(Command::ToggleCell { row: 2.7, col: 3.2 });
    assert_eq!(sim.grid().get((2, 3)), State::Alive);
    sim.dispatch(Command::ToggleCell { row: 2.0, col: 3.9 });
    assert_eq!(sim.grid().get((2, 3)), State::Dead);
    assert_eq!(sim.grid().population(), 0);
    Ok(())
}

#[test]
fn toggle_wraps() -> Result<(), Box<dyn Error>> {
    let mut sim = Simulation::new(Grid::new(10)?);
    sim.toggle_cell(-0.5, -0.5);
    assert_eq!(sim.grid().get((9, 9)), State::Alive);
    // A different alias of the same cell restores it.
    sim.toggle_cell(9.5, -10.5);
    assert_eq!(sim.grid().population(), 0);

    sim.toggle_cell(f64::NAN, 0.0);
    sim.toggle_cell(0.0, f64::INFINITY);
    assert_eq!(sim.grid().population(), 0);
    Ok(())
}

#[test]
fn pause() -> Result<(), Box<dyn Error>> {
    let mut sim = Simulation::new(Grid::new(10)?);
    assert!(!sim.is_paused());
    sim.dispatch(Command::TogglePause);
    assert!(sim.is_paused());

    // Toggling cells and explicit stepping still work while paused.
    sim.dispatch(Command::ToggleCell { row: 0.0, col: 0.0 });
    assert_eq!(sim.grid().population(), 1);
    sim.step();
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.grid().population(), 0);

    sim.dispatch(Command::TogglePause);
    assert!(!sim.is_paused());
    Ok(())
}

#[test]
fn pattern_file() -> Result<(), Box<dyn Error>> {
    let text = "3\n0 255 0\n0 255 0\n0 255 0\n";
    let grid: Grid = text.parse()?;
    assert_eq!(grid.size(), 3);
    assert_eq!(grid.to_string(), ".o.\n.o.\n.o.\n");
    Ok(())
}

#[test]
fn pattern_file_last_row() -> Result<(), Box<dyn Error>> {
    let text = "5\n\
                0 0 0 0 0\n\
                0 0 0 0 0\n\
                0 0 0 0 0\n\
                0 0 0 0 0\n\
                255 255 255 255 255\n";
    let grid = file::parse(text)?;
    assert_eq!(grid.get((4, 0)), State::Alive);
    assert_eq!(grid.population(), 5);
    Ok(())
}

#[test]
fn pattern_file_short() -> Result<(), Box<dyn Error>> {
    // Missing trailing rows are left dead.
    let grid = file::parse("4\n0 255 0 255\n")?;
    assert_eq!(grid.to_string(), ".o.o\n....\n....\n....\n");

    // Rows after the N-th are ignored.
    let grid = file::parse("2\n0 0\n0 0\n255 255\n")?;
    assert_eq!(grid.population(), 0);
    Ok(())
}

#[test]
fn pattern_file_errors() {
    assert_eq!(
        file::parse(""),
        Err(MalformedHeader(String::new()))
    );
    assert_eq!(
        file::parse("zero\n"),
        Err(MalformedHeader(String::from("zero")))
    );
    assert_eq!(
        file::parse("0\n"),
        Err(MalformedHeader(String::from("0")))
    );
    assert!(matches!(
        file::parse("3\n0 255\n"),
        Err(MalformedRow(1, _))
    ));
    assert!(matches!(
        file::parse("2\n0 0\n255 7\n"),
        Err(MalformedRow(2, _))
    ));
    assert!(matches!(
        file::parse("2\n\n0 0\n"),
        Err(MalformedRow(1, _))
    ));
}

#[test]
fn replace_and_reset() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(8)?;
    assert_eq!(
        grid.replace(Grid::new(9)?).unwrap_err(),
        SizeMismatch(8, 9)
    );

    let mut sim = Simulation::new(grid);
    sim.toggle_cell(0.0, 0.0);
    sim.step();
    sim.reset(Grid::new(8)?)?;
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.grid().population(), 0);
    assert!(sim.reset(Grid::new(5)?).is_err());
    Ok(())
}

#[test]
fn seeds() -> Result<(), Box<dyn Error>> {
    assert_eq!(Config::new(20).set_seed(Seed::Glider).grid()?.population(), 5);
    assert_eq!(
        Config::new(50).set_seed(Seed::GosperGun).grid()?.population(),
        36
    );
    assert_eq!(Config::new(12).set_seed(Seed::Empty).grid()?.population(), 0);

    // The gun needs room.
    assert_eq!(
        Config::new(20).set_seed(Seed::GosperGun).grid().unwrap_err(),
        OutOfBounds(String::from("Gosper glider gun"), 1, 1)
    );
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn config_serde() -> Result<(), Box<dyn Error>> {
    let config = Config::new(30).set_density(0.5).set_seed(Seed::GosperGun);
    let json = serde_json::to_string(&config)?;
    let back: Config = serde_json::from_str(&json)?;
    assert_eq!(back, config);

    // Missing fields fall back to the defaults.
    let partial: Config = serde_json::from_str(r#"{"size": 24}"#)?;
    assert_eq!(partial, Config::new(24));
    Ok(())
}
