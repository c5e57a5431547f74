//! Headless playback of a carousel on virtual time.

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::carousel::{Carousel, CarouselConfig, Navigation, SlideView};
use crate::constants::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Invalid script entry '{0}', expected next@<ms> or prev@<ms>")]
    Malformed(String),
    #[error("Unknown navigation '{0}', expected 'next' or 'prev'")]
    UnknownNavigation(String),
    #[error("Invalid time '{0}' in script entry")]
    InvalidTime(String),
}

impl FromStr for Navigation {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "next" => Ok(Navigation::Next),
            "prev" | "previous" => Ok(Navigation::Previous),
            _ => Err(ScriptError::UnknownNavigation(s.to_string())),
        }
    }
}

/// A control activation at a point in virtual time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScriptedInput {
    pub at: Duration,
    pub navigation: Navigation,
}

/// Parse `next@3000,prev@7500` into inputs ordered by time.
pub fn parse_script(script: &str) -> Result<Vec<ScriptedInput>, ScriptError> {
    let mut inputs = Vec::new();
    for entry in script.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (action, at) = entry
            .split_once('@')
            .ok_or_else(|| ScriptError::Malformed(entry.to_string()))?;
        let navigation = action.trim().parse()?;
        let ms: u64 = at
            .trim()
            .parse()
            .map_err(|_| ScriptError::InvalidTime(at.trim().to_string()))?;
        inputs.push(ScriptedInput { at: Duration::from_millis(ms), navigation });
    }
    inputs.sort_by_key(|input| input.at);
    Ok(inputs)
}

/// A [`SlideView`] that only keeps flags and logs what a page would show.
pub struct ConsoleView {
    names: Vec<String>,
    visible: Vec<bool>,
    entered: Vec<bool>,
    controls_attached: bool,
}

impl ConsoleView {
    pub fn new(names: Vec<String>) -> Self {
        let len = names.len();
        Self {
            names,
            visible: vec![false; len],
            entered: vec![false; len],
            controls_attached: false,
        }
    }

    pub fn numbered(count: usize) -> Self {
        Self::new((1..=count).map(|i| format!("slide-{}", i)).collect())
    }

    pub fn visible_slides(&self) -> Vec<&str> {
        self.names
            .iter()
            .zip(&self.visible)
            .filter(|(_, visible)| **visible)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn is_entered(&self, index: usize) -> bool {
        self.entered.get(index).copied().unwrap_or(false)
    }

    pub fn controls_attached(&self) -> bool {
        self.controls_attached
    }
}

impl SlideView for ConsoleView {
    fn slide_count(&self) -> usize {
        self.names.len()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if self.visible[index] != visible {
            debug!(slide = %self.names[index], visible, "Visibility changed");
        }
        self.visible[index] = visible;
    }

    fn set_entered(&mut self, index: usize, entered: bool) {
        if entered && !self.entered[index] {
            info!(slide = %self.names[index], "Slide entered");
        }
        self.entered[index] = entered;
    }

    fn attach_controls(&mut self) {
        debug!("Attached previous/next controls");
        self.controls_attached = true;
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub auto_advances: usize,
    pub manual_navigations: usize,
    pub final_index: Option<usize>,
    /// Index shown after mount, after every manual navigation and after
    /// every automatic advance.
    pub history: Vec<usize>,
}

/// Play `view` for `duration` of virtual time in steps of at most `frame`.
///
/// Steps are also capped at the auto-advance interval so each one fires at
/// most one advance and every visited index lands in the history.
///
/// Scripted inputs fire exactly at their timestamp; inputs past `duration`
/// are ignored.
pub fn run(
    view: ConsoleView,
    config: CarouselConfig,
    script: &[ScriptedInput],
    duration: Duration,
    frame: Duration,
) -> SimulationReport {
    let frame = if frame.is_zero() { Duration::from_secs_f32(FRAME_TIME) } else { frame };

    let mut carousel = Carousel::mount(view, config);
    let mut report = SimulationReport::default();
    report.history.extend(carousel.current_index());

    let mut now = Duration::ZERO;
    let mut inputs = script.iter().peekable();
    loop {
        while let Some(input) = inputs.next_if(|input| input.at <= now) {
            debug!(at_ms = input.at.as_millis() as u64, navigation = ?input.navigation, "Scripted input");
            carousel.navigate(input.navigation);
            report.manual_navigations += 1;
            report.history.extend(carousel.current_index());
        }
        if now >= duration {
            break;
        }

        let mut target = (now + frame).min(duration);
        if config.auto_advance() {
            target = target.min(now + config.interval);
        }
        if let Some(input) = inputs.peek() {
            target = target.min(input.at);
        }

        if carousel.update(target - now) > 0 {
            report.auto_advances += 1;
            report.history.extend(carousel.current_index());
        }
        now = target;
    }

    report.final_index = carousel.current_index();
    info!(
        auto = report.auto_advances,
        manual = report.manual_navigations,
        final_index = ?report.final_index,
        "Simulation finished"
    );
    report
}
