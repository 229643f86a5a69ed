use pathviz_core::{GridAdapter, GridError, Point, StepObserver};
use rand::{Rng, RngExt};

use crate::MazeGen;

/// Regions narrower than this many cells between their edges are left open.
const MIN_SPAN: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    /// A wall along a row.
    Horizontal,
    /// A wall along a column.
    Vertical,
}

impl Orientation {
    fn flip(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// An open rectangle still to be divided, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Region {
    fn is_divisible(self) -> bool {
        self.right - self.left >= MIN_SPAN && self.bottom - self.top >= MIN_SPAN
    }

    /// The two regions on either side of a wall at `index`.
    fn split(self, orientation: Orientation, index: i32) -> (Region, Region) {
        match orientation {
            Orientation::Horizontal => (
                Region {
                    bottom: index - 1,
                    ..self
                },
                Region {
                    top: index + 1,
                    ..self
                },
            ),
            Orientation::Vertical => (
                Region {
                    right: index - 1,
                    ..self
                },
                Region {
                    left: index + 1,
                    ..self
                },
            ),
        }
    }

    /// Wall positions strictly inside the region that keep every recorded
    /// opening in the bordering walls reachable.
    fn bisect_candidates(self, orientation: Orientation, passages: &[Point]) -> Vec<i32> {
        match orientation {
            Orientation::Horizontal => (self.top + 1..self.bottom)
                .filter(|&y| {
                    !passages
                        .iter()
                        .any(|p| p.y == y && (p.x == self.left - 1 || p.x == self.right + 1))
                })
                .collect(),
            Orientation::Vertical => (self.left + 1..self.right)
                .filter(|&x| {
                    !passages
                        .iter()
                        .any(|p| p.x == x && (p.y == self.top - 1 || p.y == self.bottom + 1))
                })
                .collect(),
        }
    }
}

impl<R: Rng> MazeGen<R> {
    /// Build a maze by recursive division.
    ///
    /// The whole grid starts as one region. Each region is cut by a wall
    /// with a single opening, then the two halves are divided in turn.
    /// Walls never land in front of an earlier opening, so every open cell
    /// stays connected. When no wall position fits the chosen orientation
    /// the other one is tried before the region is left as is.
    ///
    /// Start and end cells falling on a wall are skipped, leaving an extra
    /// opening that later walls keep clear of like any other.
    pub fn recursive_division<G, O>(&mut self, grid: &mut G, obs: &mut O) -> Result<(), GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        grid.endpoints()?;
        let bounds = grid.bounds();
        let mut work = vec![(
            Region {
                left: bounds.min.x,
                top: bounds.min.y,
                right: bounds.max.x - 1,
                bottom: bounds.max.y - 1,
            },
            None,
        )];
        let mut passages: Vec<Point> = Vec::new();
        let mut wall: Vec<Point> = Vec::new();
        let mut placed = 0usize;

        while let Some((region, forced)) = work.pop() {
            if !region.is_divisible() {
                continue;
            }
            let orientation = forced.unwrap_or_else(|| {
                if self.rng.random_bool(0.5) {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                }
            });

            let candidates = region.bisect_candidates(orientation, &passages);
            if candidates.is_empty() {
                if forced.is_none() {
                    work.push((region, Some(orientation.flip())));
                }
                continue;
            }
            let index = candidates[self.rng.random_range(0..candidates.len())];

            wall.clear();
            let opening = match orientation {
                Orientation::Horizontal => {
                    let x = self.rng.random_range(region.left..=region.right);
                    wall.extend((region.left..=region.right).map(|x| Point::new(x, index)));
                    Point::new(x, index)
                }
                Orientation::Vertical => {
                    let y = self.rng.random_range(region.top..=region.bottom);
                    wall.extend((region.top..=region.bottom).map(|y| Point::new(index, y)));
                    Point::new(index, y)
                }
            };
            // An endpoint on the wall stays open, so it is a passage too.
            passages.extend(wall.iter().copied().filter(|&p| grid.is_endpoint(p)));
            wall.retain(|&p| p != opening && !grid.is_endpoint(p));
            passages.push(opening);

            grid.block_wall(&wall)?;
            obs.wall(&wall);
            placed += 1;

            let (first, second) = region.split(orientation, index);
            work.push((second, None));
            work.push((first, None));
        }

        log::trace!("division: {placed} walls placed");
        Ok(())
    }
}
