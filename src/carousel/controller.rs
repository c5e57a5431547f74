use std::time::Duration;
use tracing::{debug, info};

use crate::carousel::config::CarouselConfig;
use crate::carousel::state::{normalize, AutoAdvance, PendingEnter, RotationState, TimerId};
use crate::carousel::view::{Navigation, SlideView};

/// Cycles visibility through the slides of a [`SlideView`].
///
/// Exactly one slide is visible while the carousel is active. A carousel
/// mounted on an empty view never becomes active and never touches the view.
pub struct Carousel<V: SlideView> {
    view: V,
    config: CarouselConfig,
    slide_count: usize,
    state: Option<RotationState>,
    timers_started: u64,
}

impl<V: SlideView> Carousel<V> {
    /// Take over `view`: hide every slide but the first, attach the controls
    /// and start auto-advancing.
    pub fn mount(view: V, config: CarouselConfig) -> Self {
        let slide_count = view.slide_count();
        let mut carousel = Self {
            view,
            config,
            slide_count,
            state: None,
            timers_started: 0,
        };

        if slide_count == 0 {
            debug!("No slides found, carousel stays inactive");
            return carousel;
        }

        for index in 0..slide_count {
            carousel.view.set_visible(index, index == 0);
            carousel.view.set_entered(index, false);
        }
        carousel.view.attach_controls();

        let mut state = RotationState::new();
        state.pending_enter = Some(PendingEnter { index: 0, elapsed: Duration::ZERO });
        carousel.state = Some(state);
        carousel.start_timer();

        info!(
            slides = slide_count,
            interval_ms = config.interval.as_millis() as u64,
            "Carousel mounted"
        );
        carousel
    }

    /// Show the slide at `target`, wrapping out-of-range values.
    pub fn show_slide(&mut self, target: i64) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let index = normalize(target, self.slide_count);
        for i in 0..self.slide_count {
            self.view.set_visible(i, i == index);
            self.view.set_entered(i, false);
        }
        state.current_index = index;
        state.pending_enter = Some(PendingEnter { index, elapsed: Duration::ZERO });

        debug!(target, index, "Showing slide");
    }

    pub fn next_slide(&mut self) {
        if let Some(index) = self.current_index() {
            self.show_slide(index as i64 + 1);
        }
    }

    pub fn prev_slide(&mut self) {
        if let Some(index) = self.current_index() {
            self.show_slide(index as i64 - 1);
        }
    }

    /// Install a fresh auto-advance timer, replacing the running one if any.
    pub fn start_timer(&mut self) {
        if !self.config.auto_advance() {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };

        self.timers_started += 1;
        let id = TimerId(self.timers_started);
        match state.timer.replace(AutoAdvance::new(id)) {
            Some(previous) => debug!(timer = %id, previous = %previous.id, "Replaced auto-advance timer"),
            None => debug!(timer = %id, "Started auto-advance timer"),
        }
    }

    /// Cancel the running timer and start a new one, giving a full interval
    /// before the next automatic advance.
    pub fn reset_timer(&mut self) {
        self.cancel_timer();
        self.start_timer();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.state.as_mut().and_then(|state| state.timer.take()) {
            debug!(timer = %timer.id, "Cancelled auto-advance timer");
        }
    }

    /// Handle activation of one of the view's controls.
    pub fn navigate(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Next => self.next_slide(),
            Navigation::Previous => self.prev_slide(),
        }
        self.reset_timer();
    }

    /// Advance time by `dt`.
    ///
    /// An entered marker scheduled before this call is applied first, once
    /// its delay has passed; then the timer fires once per whole interval
    /// elapsed. Returns the number of automatic advances performed.
    pub fn update(&mut self, dt: Duration) -> usize {
        let enter_delay = self.config.enter_delay;
        let interval = self.config.interval;
        let Some(state) = self.state.as_mut() else {
            return 0;
        };

        if let Some(pending) = state.pending_enter.as_mut() {
            pending.elapsed += dt;
            if pending.elapsed >= enter_delay {
                let index = pending.index;
                state.pending_enter = None;
                self.view.set_entered(index, true);
            }
        }

        let mut advances = 0;
        if let Some(timer) = state.timer.as_mut().filter(|_| !interval.is_zero()) {
            timer.elapsed += dt;
            while timer.elapsed >= interval {
                timer.elapsed -= interval;
                advances += 1;
            }
        }

        for _ in 0..advances {
            self.next_slide();
        }
        advances
    }

    /// Cancel the timer and drop the rotation state. Every later call is a
    /// no-op.
    pub fn teardown(&mut self) {
        if let Some(state) = self.state.take() {
            if let Some(timer) = state.timer {
                debug!(timer = %timer.id, "Cancelled auto-advance timer");
            }
            info!(index = state.current_index, "Carousel torn down");
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.as_ref().map(|state| state.current_index)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn timer_id(&self) -> Option<TimerId> {
        self.state.as_ref()?.timer.as_ref().map(|timer| timer.id)
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<V: SlideView> Drop for Carousel<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}
