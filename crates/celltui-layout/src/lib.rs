#![forbid(unsafe_code)]

//! Size negotiation primitives.
//!
//! A parent layout offers each child some space; the child answers with the
//! size it will actually occupy. How a child reacts to space beyond its own
//! size hint is governed, per axis, by a [`SizePolicy`]:
//!
//! - [`SizePolicy::Minimum`] - always take the hint, ignore the offer
//! - [`SizePolicy::Expanding`] - take everything offered
//!
//! The recursive engine that offers space to children lives outside this
//! crate; every widget applies the same two-value rule symmetrically on both
//! axes inside its own `resize`.
//!
//! # Example
//!
//! ```
//! use celltui_layout::{Size, SizePolicies, SizePolicy};
//!
//! let policies = SizePolicies::new(SizePolicy::Expanding, SizePolicy::Minimum);
//! let resolved = policies.resolve(Size::new(10, 1), Size::new(40, 12));
//! assert_eq!(resolved, Size::new(40, 1));
//! ```

pub use celltui_core::geometry::{Rect, Size};

/// How a widget reacts to the space offered along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// Occupy exactly the size hint, whatever is offered.
    #[default]
    Minimum,
    /// Occupy all offered space; the hint no longer matters once space is offered.
    Expanding,
}

impl SizePolicy {
    /// Resolve one axis.
    #[inline]
    #[must_use]
    pub const fn resolve(self, hint: u16, offered: u16) -> u16 {
        match self {
            SizePolicy::Minimum => hint,
            SizePolicy::Expanding => offered,
        }
    }
}

/// Horizontal and vertical policies of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizePolicies {
    /// Policy along the X axis.
    pub horizontal: SizePolicy,
    /// Policy along the Y axis.
    pub vertical: SizePolicy,
}

impl SizePolicies {
    /// Both axes `Minimum`.
    pub const MINIMUM: Self = Self::new(SizePolicy::Minimum, SizePolicy::Minimum);

    /// Both axes `Expanding`.
    pub const EXPANDING: Self = Self::new(SizePolicy::Expanding, SizePolicy::Expanding);

    /// Create a policy pair.
    #[inline]
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Resolve both axes independently.
    #[inline]
    #[must_use]
    pub const fn resolve(self, hint: Size, offered: Size) -> Size {
        Size::new(
            self.horizontal.resolve(hint.width, offered.width),
            self.vertical.resolve(hint.height, offered.height),
        )
    }
}

impl From<(SizePolicy, SizePolicy)> for SizePolicies {
    fn from((horizontal, vertical): (SizePolicy, SizePolicy)) -> Self {
        Self::new(horizontal, vertical)
    }
}

impl From<SizePolicies> for (SizePolicy, SizePolicy) {
    fn from(policies: SizePolicies) -> Self {
        (policies.horizontal, policies.vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_minimum() {
        assert_eq!(SizePolicy::default(), SizePolicy::Minimum);
        assert_eq!(SizePolicies::default(), SizePolicies::MINIMUM);
    }

    #[test]
    fn minimum_ignores_offer() {
        assert_eq!(SizePolicy::Minimum.resolve(10, 80), 10);
        assert_eq!(SizePolicy::Minimum.resolve(10, 3), 10);
        assert_eq!(SizePolicy::Minimum.resolve(10, 0), 10);
    }

    #[test]
    fn expanding_takes_offer() {
        assert_eq!(SizePolicy::Expanding.resolve(10, 80), 80);
        assert_eq!(SizePolicy::Expanding.resolve(10, 3), 3);
        assert_eq!(SizePolicy::Expanding.resolve(10, 0), 0);
    }

    #[test]
    fn axes_resolve_independently() {
        let hint = Size::new(10, 1);
        let offered = Size::new(40, 12);
        assert_eq!(
            SizePolicies::new(SizePolicy::Minimum, SizePolicy::Expanding).resolve(hint, offered),
            Size::new(10, 12)
        );
        assert_eq!(
            SizePolicies::new(SizePolicy::Expanding, SizePolicy::Minimum).resolve(hint, offered),
            Size::new(40, 1)
        );
        assert_eq!(SizePolicies::MINIMUM.resolve(hint, offered), hint);
        assert_eq!(SizePolicies::EXPANDING.resolve(hint, offered), offered);
    }

    #[test]
    fn tuple_conversions() {
        let pair = (SizePolicy::Expanding, SizePolicy::Minimum);
        let policies = SizePolicies::from(pair);
        assert_eq!(policies.horizontal, SizePolicy::Expanding);
        assert_eq!(<(SizePolicy, SizePolicy)>::from(policies), pair);
    }
}
