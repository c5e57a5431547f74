/// The surface a [`Carousel`](super::Carousel) drives.
///
/// Slides are addressed by their position in the set the view exposes at
/// mount time. The view decides what "visible" and "entered" look like; the
/// controller only flips the flags.
pub trait SlideView {
    /// Number of slides. Read once when the carousel is mounted.
    fn slide_count(&self) -> usize;

    /// Show or hide a slide.
    fn set_visible(&mut self, index: usize, visible: bool);

    /// Set or clear the transitioned-in marker of a slide.
    ///
    /// Set one tick after the slide became visible so the view can run its
    /// entry transition from a fresh starting state every time.
    fn set_entered(&mut self, index: usize, entered: bool);

    /// Create the previous/next controls. Called at most once, and never for
    /// an empty slide set.
    fn attach_controls(&mut self);
}

/// A navigation request raised by one of the view's controls.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    Previous,
    Next,
}
