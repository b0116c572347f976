//! Adapts host pointer/wheel events onto the viewport controller.
//!
//! This is where malformed input is rejected: the controller itself assumes
//! finite numbers.

use crate::error::{FlexscopeError, Result};
use crate::viewport::{ViewportController, ZoomDirection};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    Wheel { delta_y: f64 },
    ZoomButton(ZoomDirection),
    Reset,
}

/// What the host must do with the original event after dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The viewport consumed the wheel input; it must not reach any
    /// enclosing scroll region.
    pub suppress_default_scroll: bool,
}

pub fn dispatch(controller: &mut ViewportController, event: ViewportEvent) -> Result<EventOutcome> {
    validate(&event)?;

    match event {
        ViewportEvent::PointerDown { x, y } => controller.begin_drag(x, y),
        ViewportEvent::PointerMove { x, y } => controller.update_drag(x, y),
        ViewportEvent::PointerUp | ViewportEvent::PointerLeave => controller.end_drag(),
        ViewportEvent::Wheel { delta_y } => {
            controller.zoom_at_wheel(delta_y);
            return Ok(EventOutcome {
                suppress_default_scroll: true,
            });
        }
        ViewportEvent::ZoomButton(direction) => controller.zoom_by(direction),
        ViewportEvent::Reset => controller.reset_view(),
    }

    Ok(EventOutcome::default())
}

fn validate(event: &ViewportEvent) -> Result<()> {
    match *event {
        ViewportEvent::PointerDown { x, y } | ViewportEvent::PointerMove { x, y } => {
            finite("x", x)?;
            finite("y", y)
        }
        ViewportEvent::Wheel { delta_y } => finite("delta_y", delta_y),
        _ => Ok(()),
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FlexscopeError::NonFiniteInput { field, value })
    }
}
