//! Scroll-driven visual state
//!
//! Pure functions behind the page's scroll effects:
//! - reveal marking for elements entering the viewport
//! - the default/compact navbar state machine
//! - the hero parallax offset
//! - anchor resolution and scroll targets for smooth navigation

/// Reveal state of a registered element. Once revealed, stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Next state given the element's current top edge (relative to the
    /// viewport) and the viewport height
    pub fn advance(self, element_top: f64, viewport_height: f64, threshold: f64) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Hidden if should_reveal(element_top, viewport_height, threshold) => {
                RevealState::Revealed
            }
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// An element is revealed once its top edge has risen more than `threshold`
/// pixels above the bottom of the viewport
pub fn should_reveal(element_top: f64, viewport_height: f64, threshold: f64) -> bool {
    element_top < viewport_height - threshold
}

/// Navbar styling state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarState {
    #[default]
    Default,
    Compact,
}

impl NavbarState {
    /// Compact strictly past the offset, default otherwise
    pub fn for_offset(scroll_y: f64, compact_offset: f64) -> Self {
        if scroll_y > compact_offset {
            NavbarState::Compact
        } else {
            NavbarState::Default
        }
    }

    pub fn padding(&self) -> &'static str {
        match self {
            NavbarState::Default => "1rem 0",
            NavbarState::Compact => "0.5rem 0",
        }
    }

    pub fn has_shadow(&self) -> bool {
        matches!(self, NavbarState::Compact)
    }
}

/// Vertical translation applied to the hero for a scroll offset
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// Element id referenced by a same-document anchor.
///
/// Returns `None` for external links and for the bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Window offset that puts the target just below the fixed navbar
pub fn scroll_target_top(element_offset_top: f64, navbar_height: f64) -> f64 {
    (element_offset_top - navbar_height).max(0.0)
}
