//! A visualizer session: one grid, its settings, and the engines run on it.

use pathviz_core::{Grid, GridError, Path};
use pathviz_maze::{MazeAlgo, MazeGen};
use pathviz_paths::{PathAlgo, PathSearch};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::{EngineError, Pacer, Speed, VisualizerConfig};

/// Outcome of [`Visualizer::find_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub algo: PathAlgo,
    /// Start to end inclusive; empty when the end was not reached.
    pub path: Path,
    pub cells_checked: usize,
}

impl SearchReport {
    /// Number of cells on the path, 0 when no path was found.
    pub fn solution_length(&self) -> usize {
        self.path.len()
    }
}

/// Owns a [`Grid`] and drives searches and maze generation on it.
///
/// Runs are paced by the configured [`Speed`]; use [`Speed::Ludicrous`] to
/// run without sleeping. Every run borrows the session mutably, so a second
/// run cannot start while one is in progress.
pub struct Visualizer<R: Rng = StdRng> {
    grid: Grid,
    config: VisualizerConfig,
    search: PathSearch,
    maze: MazeGen<R>,
    pacer: Pacer,
    last: Option<SearchReport>,
}

impl Visualizer<StdRng> {
    /// Create a session from `config`, seeding maze generation from
    /// `config.seed` or from the thread-local generator.
    pub fn new(config: VisualizerConfig) -> Result<Self, GridError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("visualizer: maze seed {seed}");
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Visualizer<R> {
    /// Create a session from `config` drawing maze randomness from `rng`.
    pub fn with_rng(config: VisualizerConfig, rng: R) -> Result<Self, GridError> {
        let mut grid = Grid::new(config.columns, config.rows)?;
        grid.set_allow_diagonal(config.allow_diagonal);
        Ok(Self {
            grid,
            search: PathSearch::new(),
            maze: MazeGen::with_rng(rng),
            pacer: Pacer::new(config.speed),
            config,
            last: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for editing walls and endpoints between runs.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Report of the most recent search, if one has run since the last
    /// reset, resize or maze.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last.as_ref()
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
        self.pacer.set_speed(speed);
    }

    pub fn set_allow_diagonal(&mut self, allow: bool) {
        self.config.allow_diagonal = allow;
        self.grid.set_allow_diagonal(allow);
    }

    /// Search with the strategy called `name` and highlight the result.
    ///
    /// Markers from the previous search are cleared first; walls stay.
    pub fn find_path(&mut self, name: &str) -> Result<&SearchReport, EngineError> {
        let algo: PathAlgo = name.parse()?;
        self.grid.clear_path();
        self.pacer.restart();

        let path = self.search.run(algo, &mut self.grid, &mut self.pacer)?;
        self.grid.mark_path(&path);

        let report = SearchReport {
            algo,
            path,
            cells_checked: self.search.checked(),
        };
        log::info!(
            "{algo}: solution length {}, {} cells checked",
            report.solution_length(),
            report.cells_checked
        );
        Ok(self.last.insert(report))
    }

    /// Replace all walls with a maze from the generator called `name`.
    pub fn generate_maze(&mut self, name: &str) -> Result<(), EngineError> {
        let algo: MazeAlgo = name.parse()?;
        self.grid.clear_path();
        self.grid.clear_blocks();
        self.last = None;

        self.maze.generate(algo, &mut self.grid, &mut self.pacer)?;
        log::info!(
            "{algo}: {} walls on a {}x{} grid",
            self.grid.count_fn(|_, c| c.blocked),
            self.grid.columns(),
            self.grid.rows()
        );
        Ok(())
    }

    /// Remove all walls and search markers.
    pub fn clear_walls(&mut self) {
        self.grid.clear_blocks();
        self.grid.clear_path();
        self.last = None;
    }

    /// Restore the grid to its initial state: no walls, no markers, default
    /// endpoints.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.last = None;
    }

    /// Rebuild the grid at a new size with default endpoints.
    pub fn resize(&mut self, columns: i32, rows: i32) -> Result<(), GridError> {
        self.grid.resize(columns, rows)?;
        self.config.columns = columns;
        self.config.rows = rows;
        self.last = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{GridAdapter, Point};

    fn quiet(seed: u64) -> Visualizer {
        Visualizer::new(VisualizerConfig {
            speed: Speed::Ludicrous,
            seed: Some(seed),
            ..VisualizerConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn default_session() {
        let vis = quiet(0);
        assert_eq!(vis.grid().columns(), 30);
        assert_eq!(vis.grid().rows(), 20);
        assert_eq!(vis.grid().start(), Some(Point::new(7, 10)));
        assert_eq!(vis.grid().end(), Some(Point::new(22, 10)));
        assert!(vis.last_report().is_none());
    }

    #[test]
    fn find_path_reports_and_highlights() {
        let mut vis = quiet(0);
        let report = vis.find_path("A Star").unwrap().clone();
        assert_eq!(report.algo, PathAlgo::AStar);
        assert_eq!(report.solution_length(), 16);
        assert!(report.cells_checked > 0);
        assert!(report.path.iter().all(|&p| vis.grid().at(p).unwrap().in_path));
        assert_eq!(vis.last_report(), Some(&report));
    }

    #[test]
    fn second_search_replaces_markers() {
        let mut vis = quiet(0);
        vis.find_path("Dijkstras").unwrap();
        let report = vis.find_path("Depth First").unwrap().clone();
        let highlighted = vis.grid().count_fn(|_, c| c.in_path);
        assert_eq!(highlighted, report.path.len());
        assert_eq!(vis.last_report().map(|r| r.algo), Some(PathAlgo::DepthFirst));
    }

    #[test]
    fn unknown_strategy_leaves_grid_alone() {
        let mut vis = quiet(0);
        vis.find_path("Breadth First").unwrap();
        let before = vis.grid().clone();
        assert_eq!(
            vis.find_path("Teleport").unwrap_err(),
            EngineError::UnsupportedStrategy("Teleport".into())
        );
        assert!(vis.generate_maze("Kruskal").is_err());
        assert_eq!(vis.grid(), &before);
    }

    #[test]
    fn maze_then_search() {
        let mut vis = quiet(5);
        vis.find_path("A*").unwrap();
        vis.generate_maze("Recursive Division").unwrap();
        assert!(vis.last_report().is_none());
        assert_eq!(vis.grid().count_fn(|_, c| c.in_path || c.visited), 0);

        let report = vis.find_path("Breadth First").unwrap();
        assert!(!report.path.is_empty());
    }

    #[test]
    fn division_never_hides_the_end() {
        for seed in (0..100).chain([1193, 1417, 1581, 1586, 1643]) {
            let mut vis = quiet(seed);
            vis.generate_maze("Recursive Division").unwrap();
            let report = vis.find_path("Breadth First").unwrap();
            assert!(!report.path.is_empty(), "seed {seed}");
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = quiet(42);
        let mut b = quiet(42);
        a.generate_maze("Recursive Backtracking").unwrap();
        b.generate_maze("Recursive Backtracking").unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn reset_and_resize() {
        let mut vis = quiet(1);
        vis.generate_maze("Recursive Division").unwrap();
        vis.reset();
        assert_eq!(vis.grid().count_fn(|_, c| c.blocked), 0);

        vis.resize(12, 8).unwrap();
        assert_eq!(vis.grid().size(), Point::new(12, 8));
        assert_eq!(vis.config().columns, 12);
        assert_eq!(vis.grid().start(), Some(Point::new(3, 4)));
        assert_eq!(vis.grid().end(), Some(Point::new(9, 4)));
        assert!(vis.resize(0, 8).is_err());
        assert_eq!(vis.grid().size(), Point::new(12, 8));
    }

    #[test]
    fn diagonal_search_is_shorter() {
        let mut vis = quiet(0);
        vis.grid_mut().set_end(Point::new(22, 17)).unwrap();
        let cardinal = vis.find_path("Dijkstras").unwrap().solution_length();
        vis.set_allow_diagonal(true);
        assert!(vis.config().allow_diagonal);
        let diagonal = vis.find_path("Dijkstras").unwrap().solution_length();
        assert_eq!(cardinal, 15 + 7 + 1);
        assert_eq!(diagonal, 15 + 1);
    }

    #[test]
    fn walls_can_be_cleared() {
        let mut vis = quiet(3);
        vis.generate_maze("Recursive Backtracking").unwrap();
        assert!(vis.grid().count_fn(|_, c| c.blocked) > 0);
        vis.clear_walls();
        assert_eq!(vis.grid().count_fn(|_, c| c.blocked), 0);
        vis.set_speed(Speed::Fast);
        assert_eq!(vis.config().speed, Speed::Fast);
    }
}
