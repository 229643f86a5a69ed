//! Playback speed and the pacing observer.

use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use pathviz_core::{Point, StepObserver, UnknownAlgo, algo_key};

/// Pause after each carved maze cell or placed wall.
const BUILD_DELAY: Duration = Duration::from_millis(10);

/// How fast a run is played back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Speed {
    VerySlow,
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
    Ludicrous,
}

impl Speed {
    /// Every speed, slowest first.
    pub const ALL: [Speed; 6] = [
        Speed::VerySlow,
        Speed::Slow,
        Speed::Normal,
        Speed::Fast,
        Speed::VeryFast,
        Speed::Ludicrous,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Speed::VerySlow => "Very Slow",
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
            Speed::VeryFast => "Very Fast",
            Speed::Ludicrous => "Ludicrous Speed Go!",
        }
    }

    /// Pause before examining a cell when `checked` cells came before it in
    /// the same run. `None` means no pause at all.
    ///
    /// The two fastest paced levels only yield every 10th and 50th cell.
    pub fn delay_for(self, checked: usize) -> Option<Duration> {
        match self {
            Speed::VerySlow => Some(Duration::from_millis(500)),
            Speed::Slow => Some(Duration::from_millis(250)),
            Speed::Normal => Some(Duration::from_millis(25)),
            Speed::Fast => (checked % 10 == 0).then_some(Duration::from_millis(10)),
            Speed::VeryFast => (checked % 50 == 0).then_some(Duration::ZERO),
            Speed::Ludicrous => None,
        }
    }

    /// Pause after each maze building step.
    pub fn build_delay(self) -> Option<Duration> {
        match self {
            Speed::Ludicrous => None,
            _ => Some(BUILD_DELAY),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Speed {
    type Err = UnknownAlgo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match algo_key(s).as_str() {
            "veryslow" => Ok(Speed::VerySlow),
            "slow" => Ok(Speed::Slow),
            "normal" => Ok(Speed::Normal),
            "fast" => Ok(Speed::Fast),
            "veryfast" => Ok(Speed::VeryFast),
            "ludicrous" | "ludicrousspeedgo" => Ok(Speed::Ludicrous),
            _ => Err(UnknownAlgo::new(s)),
        }
    }
}

/// A [`StepObserver`] that slows a run down to a [`Speed`].
///
/// Counts examined cells so the sparse levels know when to yield. The
/// counter restarts with [`Pacer::restart`].
#[derive(Debug, Clone, Default)]
pub struct Pacer {
    speed: Speed,
    checked: usize,
}

impl Pacer {
    pub fn new(speed: Speed) -> Self {
        Self { speed, checked: 0 }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Cells examined since the last restart.
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn restart(&mut self) {
        self.checked = 0;
    }

    fn pause(delay: Option<Duration>) {
        if let Some(d) = delay {
            thread::sleep(d);
        }
    }
}

impl StepObserver for Pacer {
    fn visited(&mut self, _p: Point) {
        Self::pause(self.speed.delay_for(self.checked));
        self.checked += 1;
    }

    fn carved(&mut self, _p: Point) {
        Self::pause(self.speed.build_delay());
    }

    fn wall(&mut self, _cells: &[Point]) {
        Self::pause(self.speed.build_delay());
    }
}
