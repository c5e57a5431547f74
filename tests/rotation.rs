use std::time::Duration;
use photo_carousel::{Carousel, CarouselConfig, Navigation, SlideView};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Event {
    Visible(usize, bool),
    Entered(usize, bool),
    Controls,
}

struct RecordingView {
    visible: Vec<bool>,
    events: Vec<Event>,
}

impl RecordingView {
    fn new(len: usize) -> Self {
        Self { visible: vec![false; len], events: Vec::new() }
    }

    fn shown(&self) -> Vec<usize> {
        (0..self.visible.len()).filter(|&i| self.visible[i]).collect()
    }
}

impl SlideView for RecordingView {
    fn slide_count(&self) -> usize {
        self.visible.len()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        self.visible[index] = visible;
        self.events.push(Event::Visible(index, visible));
    }

    fn set_entered(&mut self, index: usize, entered: bool) {
        self.events.push(Event::Entered(index, entered));
    }

    fn attach_controls(&mut self) {
        self.events.push(Event::Controls);
    }
}

fn mount(len: usize) -> Carousel<RecordingView> {
    Carousel::mount(RecordingView::new(len), CarouselConfig::default())
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn show_slide_is_total() {
    for len in 1..6 {
        let mut carousel = mount(len);
        for k in -20i64..20 {
            carousel.show_slide(k);
            let index = carousel.current_index().unwrap();
            assert!(index < len, "k={k} len={len}");
            assert_eq!(carousel.view().shown(), vec![index]);
        }
    }
}

#[test]
fn wraparound_edges() {
    let mut carousel = mount(4);
    carousel.show_slide(4);
    assert_eq!(carousel.current_index(), Some(0));
    carousel.show_slide(-1);
    assert_eq!(carousel.current_index(), Some(3));
}

#[test]
fn full_cycle_returns_to_start() {
    for len in 1..7 {
        let mut carousel = mount(len);
        carousel.show_slide(len as i64 / 2);
        let start = carousel.current_index();
        for _ in 0..len {
            carousel.next_slide();
        }
        assert_eq!(carousel.current_index(), start);
    }
}

#[test]
fn three_slide_walkthrough() {
    let mut carousel = mount(3);
    assert_eq!(carousel.current_index(), Some(0));
    carousel.next_slide();
    assert_eq!(carousel.current_index(), Some(1));
    carousel.next_slide();
    assert_eq!(carousel.current_index(), Some(2));
    carousel.next_slide();
    assert_eq!(carousel.current_index(), Some(0));
    carousel.prev_slide();
    assert_eq!(carousel.current_index(), Some(2));
    assert_eq!(carousel.view().shown(), vec![2]);
}

#[test]
fn empty_set_mutates_nothing() {
    let mut carousel = mount(0);
    carousel.update(ms(20_000));
    carousel.navigate(Navigation::Next);
    assert!(carousel.view().events.is_empty());
    assert_eq!(carousel.timer_id(), None);
    assert_eq!(carousel.current_index(), None);
}

#[test]
fn mount_attaches_controls_once() {
    let carousel = mount(2);
    let controls = carousel.view().events.iter().filter(|e| **e == Event::Controls).count();
    assert_eq!(controls, 1);
    assert!(!carousel.view().events.contains(&Event::Entered(0, true)));
}

#[test]
fn entered_marker_lands_on_the_following_tick() {
    let mut carousel = mount(3);
    carousel.navigate(Navigation::Next);
    let before = carousel.view().events.len();
    assert!(!carousel.view().events.contains(&Event::Entered(1, true)));

    carousel.update(ms(16));
    assert_eq!(carousel.view().events[before..], [Event::Entered(1, true)]);
}

#[test]
fn auto_advance_twice_in_twelve_seconds() {
    let mut carousel = mount(3);
    let mut advances = 0;
    for _ in 0..(12_000 / 100) {
        advances += carousel.update(ms(100));
    }
    assert_eq!(advances, 2);
    assert_eq!(carousel.current_index(), Some(2));
}

#[test]
fn a_single_large_step_fires_every_elapsed_interval() {
    let mut carousel = mount(4);
    assert_eq!(carousel.update(ms(12_000)), 2);
    assert_eq!(carousel.current_index(), Some(2));
    assert_eq!(carousel.update(ms(3_000)), 1);
}

#[test]
fn reset_prevents_double_advance() {
    let mut carousel = mount(5);
    carousel.update(ms(4_900));
    carousel.reset_timer();

    // The cancelled timer would have fired at 5000.
    assert_eq!(carousel.update(ms(4_900)), 0);
    assert_eq!(carousel.update(ms(100)), 1);
    assert_eq!(carousel.update(ms(4_999)), 0);
}

#[test]
fn manual_navigation_gives_a_full_interval() {
    let mut carousel = mount(3);
    carousel.update(ms(4_000));
    carousel.navigate(Navigation::Previous);
    assert_eq!(carousel.current_index(), Some(2));

    assert_eq!(carousel.update(ms(4_999)), 0);
    assert_eq!(carousel.update(ms(1)), 1);
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn custom_interval() {
    let config = CarouselConfig::default().with_interval(ms(1_000));
    let mut carousel = Carousel::mount(RecordingView::new(2), config);
    assert_eq!(carousel.update(ms(3_500)), 3);
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn repeated_teardown_is_a_no_op() {
    let mut carousel = mount(2);
    carousel.teardown();
    let events = carousel.view().events.len();
    carousel.teardown();
    assert!(!carousel.is_active());
    assert_eq!(carousel.timer_id(), None);
    assert_eq!(carousel.view().events.len(), events);
}
