use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// A unique identifier for widgets stored on a board.
///
/// Identifiers are assigned by the store at creation time and never change
/// for the lifetime of the widget. Internally a random v4 UUID, so ids are
/// unique across store instances without coordination.
///
/// # Examples
///
/// ```rust,ignore
/// use boardstore::model::WidgetId;
///
/// let id = WidgetId::new();
/// println!("{}", id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        WidgetId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        WidgetId::new()
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positioned, sized rectangle with a draw-order rank.
///
/// `Widget` is an immutable-per-version value record: the store never hands
/// out live references to its canonical copy, and every rank or geometry
/// change produces a new snapshot via [`Widget::bumped`] or
/// [`Widget::merge`]. The `z_index` rank is unique among all widgets held by
/// one store instance at rest; collisions are resolved by the store's
/// push-out shift before a snapshot is committed.
///
/// # Fields
/// - `id` - assigned by the store at creation, immutable afterwards
/// - `x`, `y` - position of the rectangle
/// - `width`, `height` - extent of the rectangle, always positive
/// - `z_index` - draw-order rank, unique at rest
/// - `last_modified` - refreshed on every successful creation or update
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Widget {
    pub id: WidgetId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub z_index: i32,
    pub last_modified: DateTime<Utc>,
}

impl Widget {
    /// Materializes a draft into a stored widget snapshot.
    ///
    /// Assigns a fresh identifier and the current timestamp. The rank is
    /// decided by the store (either the draft's explicit rank or the current
    /// top of the board) and passed in resolved.
    pub fn from_draft(draft: &WidgetDraft, z_index: i32) -> Self {
        Widget {
            id: WidgetId::new(),
            x: draft.x,
            y: draft.y,
            width: draft.width,
            height: draft.height,
            z_index,
            last_modified: Utc::now(),
        }
    }

    /// Returns a snapshot shifted one rank up.
    ///
    /// Identity, geometry and `last_modified` are preserved; only the rank
    /// changes. Used by the push-out shift, which is not an update from the
    /// caller's point of view.
    pub fn bumped(&self) -> Self {
        Widget {
            z_index: self.z_index + 1,
            ..self.clone()
        }
    }

    /// Returns a snapshot carrying the draft's geometry and rank.
    ///
    /// Identity is preserved and `last_modified` is refreshed. A draft
    /// without an explicit rank keeps the current one.
    pub fn merge(&self, draft: &WidgetDraft) -> Self {
        Widget {
            id: self.id,
            x: draft.x,
            y: draft.y,
            width: draft.width,
            height: draft.height,
            z_index: draft.z_index.unwrap_or(self.z_index),
            last_modified: Utc::now(),
        }
    }
}

/// Caller-supplied payload for creating or updating a widget.
///
/// Geometry is mandatory and assumed already validated (`width` and `height`
/// positive). The rank is optional: on `add`, an absent rank places the
/// widget on top of the board; on `update`, an absent rank keeps the
/// current one.
///
/// # Examples
///
/// ```rust,ignore
/// use boardstore::model::WidgetDraft;
///
/// let draft = WidgetDraft::new(0, 0, 100, 50).z_index(3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetDraft {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub z_index: Option<i32>,
}

impl WidgetDraft {
    /// Creates a draft with the given geometry and no explicit rank.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        WidgetDraft {
            x,
            y,
            width,
            height,
            z_index: None,
        }
    }

    /// Sets an explicit draw-order rank.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }
}
