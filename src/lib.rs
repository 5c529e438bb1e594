//! A draggable, resizable and rotatable rectangle for Yew.
//!
//! [`Rect`] is the core widget: it renders the box with its handles and turns
//! pointer gestures into raw motion (drag deltas, rotation angles, resize
//! length and direction). [`ResizableRect`] wraps it with top-left geometry and
//! the resize/rotate math most hosts want.

pub mod components;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod model;
pub mod resize;
pub mod state;
pub mod util;

pub use components::rect::{Rect, RectProps};
pub use components::resizable_rect::{ResizableRect, ResizableRectProps};
pub use direction::{Direction, Zoomable};
pub use error::{DirectionError, SessionError};
pub use model::{
    DragDelta, Position, RectGeometry, RectStyle, ResizeMotion, ResizeUpdate, RotateMotion, Size,
    TopLeftStyle, Transform,
};
