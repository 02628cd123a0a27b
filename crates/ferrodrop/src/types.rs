//! Identifiers and item references shared across the crate.

use std::any::Any;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use ferrodrop_core::math::{Axis, Vec2};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a registered drop zone.
    ZoneId
);

string_id!(
    /// Stable identity of a draggable item, list entry or tree node.
    ItemId
);

/// Opaque caller data attached to a dragged item. Never inspected.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Reference to the item being dragged.
#[derive(Clone)]
pub struct ItemRef {
    pub id: ItemId,
    /// Type tag matched against a zone's accepted types.
    pub item_type: String,
    pub payload: Option<Payload>,
}

impl ItemRef {
    pub fn new(id: impl Into<ItemId>, item_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type: item_type.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Downcast the payload, if present and of type `T`.
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref().and_then(|p| p.downcast_ref::<T>())
    }
}

impl fmt::Debug for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRef")
            .field("id", &self.id)
            .field("item_type", &self.item_type)
            .field("payload", &self.payload.as_ref().map(|_| ".."))
            .finish()
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.item_type == other.item_type
    }
}

/// Layout direction of a sortable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Axis the list's items advance along.
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::Y,
            Orientation::Horizontal => Axis::X,
        }
    }
}

/// Where a dragged item came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub zone: ZoneId,
    /// Position of the item within the zone's collection.
    pub index: usize,
}

/// Parameters for starting a drag.
#[derive(Debug, Clone)]
pub struct DragStart {
    pub item: ItemRef,
    pub pointer: Vec2,
    /// Offset of the pointer from the item's top-left corner at grab time.
    pub origin_offset: Vec2,
    pub source: Option<DragSource>,
}

impl DragStart {
    pub fn new(item: ItemRef, pointer: Vec2) -> Self {
        Self {
            item,
            pointer,
            origin_offset: Vec2::ZERO,
            source: None,
        }
    }

    pub fn origin_offset(mut self, offset: Vec2) -> Self {
        self.origin_offset = offset;
        self
    }

    /// Mark the item as picked up from `zone` at `index`.
    pub fn from_zone(mut self, zone: impl Into<ZoneId>, index: usize) -> Self {
        self.source = Some(DragSource {
            zone: zone.into(),
            index,
        });
        self
    }
}
