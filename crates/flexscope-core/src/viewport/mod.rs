//! Pan and zoom for the image viewer.
//!
//! The controller is pure arithmetic over [`ViewportState`]: it never fails
//! and never sanitises its inputs. Input validation lives in
//! [`crate::input`].

mod controller;
mod limits;
mod state;
mod transform;

pub use controller::{ViewportController, ZoomDirection};
pub use limits::ZoomLimits;
pub use state::{DragState, ViewportState};
pub use transform::ViewportTransform;
