use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::model::Widget;

/// An axis-aligned rectangular containment predicate for widget queries.
///
/// The filter is all-or-nothing: either all four bounds are set (a valid
/// bounding rectangle) or all four are unset, which matches everything.
/// Partially-filled filters are invalid; checking validity is the caller's
/// job, typically at the binding layer, and [`BoundsFilter::to_predicate`]
/// fails fast when handed one anyway.
///
/// A widget matches when its rectangle is fully contained in the bounds:
/// `x >= left`, `x + width <= right`, `y >= top`, `y + height <= bottom`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundsFilter {
    /// Minimum allowed Y coordinate
    pub top: Option<i32>,
    /// Maximum allowed Y coordinate
    pub bottom: Option<i32>,
    /// Minimum allowed X coordinate
    pub left: Option<i32>,
    /// Maximum allowed X coordinate
    pub right: Option<i32>,
}

impl BoundsFilter {
    /// Creates an empty filter that matches every widget.
    pub fn new() -> Self {
        BoundsFilter::default()
    }

    /// Creates a fully-bounded filter.
    pub fn bounded(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        BoundsFilter {
            top: Some(top),
            bottom: Some(bottom),
            left: Some(left),
            right: Some(right),
        }
    }

    /// Returns `true` when all four bounds are unset.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` when the filter is either empty or fully bounded.
    pub fn is_valid(&self) -> bool {
        self.is_empty()
            || (self.top.is_some()
                && self.bottom.is_some()
                && self.left.is_some()
                && self.right.is_some())
    }

    /// Converts the filter into a containment predicate.
    ///
    /// # Errors
    /// - `FilterError` when the filter is empty; callers must check
    ///   [`BoundsFilter::is_empty`] first and treat empty as "match all"
    /// - `ValidationError` when only some of the four bounds are set
    pub fn to_predicate(&self) -> StoreResult<impl Fn(&Widget) -> bool> {
        if self.is_empty() {
            return Err(StoreError::new("Filter is empty", ErrorKind::FilterError));
        }

        match (self.top, self.bottom, self.left, self.right) {
            (Some(top), Some(bottom), Some(left), Some(right)) => Ok(move |w: &Widget| {
                w.x >= left && w.x + w.width <= right && w.y >= top && w.y + w.height <= bottom
            }),
            _ => Err(StoreError::new(
                "Filter must contain all of 'top', 'bottom', 'left' and 'right'",
                ErrorKind::ValidationError,
            )),
        }
    }
}
