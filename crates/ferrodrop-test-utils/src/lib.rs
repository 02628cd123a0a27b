//! Test utilities for Ferrodrop.
//!
//! - [`RecordingListener`] - records every [`DragEvent`] for later assertions
//! - [`fixtures`] - ready-made geometry tables and trees
//!
//! # Example
//!
//! ```rust
//! use ferrodrop::{DragCoordinator, DragStart, ItemRef, Vec2};
//! use ferrodrop_test_utils::RecordingListener;
//!
//! let recorder = RecordingListener::new();
//! let mut dnd = DragCoordinator::headless();
//! dnd.add_listener(recorder.clone());
//!
//! dnd.begin_drag(DragStart::new(ItemRef::new("x", "card"), Vec2::ZERO)).unwrap();
//! dnd.cancel().unwrap();
//!
//! assert_eq!(recorder.names(), vec!["drag_start", "drag_end"]);
//! ```

pub mod fixtures;
mod recording;

pub use recording::RecordingListener;
