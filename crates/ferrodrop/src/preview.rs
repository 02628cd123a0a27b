//! Floating drag preview.
//!
//! The core only computes where the preview goes; what it looks like is up
//! to the caller's render function.

use ferrodrop_core::math::Vec2;

use crate::session::DragSession;
use crate::types::{ItemId, ItemRef};

/// A positioned preview with caller-rendered content.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewDescription<C> {
    pub item_id: ItemId,
    /// Top-left corner of the preview: pointer minus grab offset.
    pub position: Vec2,
    pub content: C,
}

/// Describe the preview for an active session.
///
/// Returns `None` for pending sessions (not yet past the activation
/// threshold). `render` receives the dragged item and `true`.
pub fn describe<C>(
    session: Option<&DragSession>,
    render: impl FnOnce(&ItemRef, bool) -> C,
) -> Option<PreviewDescription<C>> {
    let session = session.filter(|s| s.is_activated())?;
    Some(PreviewDescription {
        item_id: session.item.id.clone(),
        position: session.item_position(),
        content: render(&session.item, true),
    })
}

/// Render an in-place item, telling `render` whether it is the one being
/// dragged (so the host can show a placeholder in its slot).
pub fn render_item<C>(
    session: Option<&DragSession>,
    item: &ItemRef,
    render: impl FnOnce(&ItemRef, bool) -> C,
) -> C {
    let is_dragging = session.is_some_and(|s| s.is_activated() && s.item.id == item.id);
    render(item, is_dragging)
}
