//! Pointer and expand affordances
//!
//! Transforms are pure functions of pointer containment or expansion state.

/// Service card hover state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardHover {
    #[default]
    Resting,
    Raised,
}

impl CardHover {
    pub fn from_pointer_inside(inside: bool) -> Self {
        if inside {
            CardHover::Raised
        } else {
            CardHover::Resting
        }
    }

    /// Transform of the card itself
    pub fn card_transform(&self) -> &'static str {
        match self {
            CardHover::Resting => "translateY(0) scale(1)",
            CardHover::Raised => "translateY(-15px) scale(1.02)",
        }
    }

    /// Transform of the card's icon; empty restores the stylesheet value
    pub fn icon_transform(&self) -> &'static str {
        match self {
            CardHover::Resting => "",
            CardHover::Raised => "scale(1.1) rotate(5deg)",
        }
    }
}

/// Emphasis of an accordion item while expanded
pub fn accordion_transform(expanded: bool) -> &'static str {
    if expanded { "scale(1.02)" } else { "scale(1)" }
}

pub const ACCORDION_TRANSITION: &str = "all 0.3s ease";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_leave_restores_base() {
        let base = CardHover::default().card_transform();

        let entered = CardHover::from_pointer_inside(true);
        assert_eq!(entered.card_transform(), "translateY(-15px) scale(1.02)");
        assert_eq!(entered.icon_transform(), "scale(1.1) rotate(5deg)");

        let left = CardHover::from_pointer_inside(false);
        assert_eq!(left.card_transform(), base);
        assert_eq!(left.icon_transform(), "");
    }

    #[test]
    fn test_accordion_transform() {
        assert_eq!(accordion_transform(true), "scale(1.02)");
        assert_eq!(accordion_transform(false), "scale(1)");
    }
}
