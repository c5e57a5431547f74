//! Responsive site navigation: the collapsible menu and in-page anchor links.

use tracing::debug;
use crate::constants::MOBILE_BREAKPOINT;

/// How the menu list is laid out.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuLayout {
    /// Collapsed behind the toggle button.
    Hidden,
    /// Desktop: inline in the header.
    Row,
    /// Mobile, expanded: full-width drop-down below the header.
    Column,
}

#[derive(Debug, Clone)]
pub struct NavMenu {
    breakpoint: u32,
    mobile: bool,
    expanded: bool,
}

impl NavMenu {
    pub fn new(viewport_width: u32) -> Self {
        Self::with_breakpoint(viewport_width, MOBILE_BREAKPOINT)
    }

    pub fn with_breakpoint(viewport_width: u32, breakpoint: u32) -> Self {
        let mut menu = Self { breakpoint, mobile: false, expanded: false };
        menu.resize(viewport_width);
        menu
    }

    /// Re-evaluate the layout for a new viewport width. Any resize collapses
    /// an expanded mobile menu.
    pub fn resize(&mut self, viewport_width: u32) {
        self.mobile = viewport_width <= self.breakpoint;
        self.expanded = false;
        debug!(viewport_width, mobile = self.mobile, "Navigation resized");
    }

    /// Toggle button activation. Only has an effect on mobile.
    pub fn toggle(&mut self) {
        if self.mobile {
            self.expanded = !self.expanded;
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn toggle_visible(&self) -> bool {
        self.mobile
    }

    pub fn layout(&self) -> MenuLayout {
        match (self.mobile, self.expanded) {
            (false, _) => MenuLayout::Row,
            (true, false) => MenuLayout::Hidden,
            (true, true) => MenuLayout::Column,
        }
    }

    /// Follow an in-page link.
    ///
    /// Returns where to scroll when `href` names a section `exists` knows
    /// about, collapsing the mobile menu on the way.
    pub fn follow_anchor(
        &mut self,
        href: &str,
        exists: impl Fn(&str) -> bool,
    ) -> Option<ScrollRequest> {
        let target = href.strip_prefix('#')?;
        if target.is_empty() || !exists(target) {
            return None;
        }
        if self.mobile {
            self.expanded = false;
        }
        Some(ScrollRequest { target: target.to_string() })
    }
}

/// Smoothly scroll the section with id `target` to the top of the viewport.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ScrollRequest {
    pub target: String,
}
