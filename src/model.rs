//! Geometry records passed between the host, the widget and the gesture
//! controller.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub center_x: f64,
    pub center_y: f64,
}

/// Width and height may be negative after a flip; rendering uses the
/// absolute values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    /// Degrees, clockwise on screen.
    pub rotate_angle: f64,
}

/// Center-based style the `Rect` widget renders from. Owned by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectStyle {
    pub position: Position,
    pub size: Size,
    pub transform: Transform,
}

impl RectStyle {
    pub fn geometry(&self) -> RectGeometry {
        RectGeometry {
            width: self.size.width,
            height: self.size.height,
            center_x: self.position.center_x,
            center_y: self.position.center_y,
            rotate_angle: self.transform.rotate_angle,
        }
    }

    /// Screen box of the unrotated body: `(left, top, width, height)`.
    pub fn layout_box(&self) -> (f64, f64, f64, f64) {
        let w = self.size.width.abs();
        let h = self.size.height.abs();
        (
            self.position.center_x - w / 2.0,
            self.position.center_y - h / 2.0,
            w,
            h,
        )
    }
}

/// Rectangle snapshot captured when a resize starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectGeometry {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub rotate_angle: f64,
}

/// Top-left based geometry used by `ResizableRect` and its host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLeftStyle {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub rotate_angle: f64,
}

impl TopLeftStyle {
    pub fn to_center(self) -> RectStyle {
        RectStyle {
            position: Position {
                center_x: self.left + self.width / 2.0,
                center_y: self.top + self.height / 2.0,
            },
            size: Size {
                width: self.width,
                height: self.height,
            },
            transform: Transform {
                rotate_angle: self.rotate_angle,
            },
        }
    }

    pub fn from_center(position: Position, size: Size, rotate_angle: f64) -> Self {
        TopLeftStyle {
            top: position.center_y - size.height / 2.0,
            left: position.center_x - size.width / 2.0,
            width: size.width,
            height: size.height,
            rotate_angle,
        }
    }
}

/// The subset of a mouse event the gesture controller reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
    /// `MouseEvent.button`; 0 is the primary button.
    pub button: i16,
    pub shift_key: bool,
}

impl PointerInput {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            ..Default::default()
        }
    }

    pub fn is_primary(&self) -> bool {
        self.button == 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragDelta {
    pub delta_x: f64,
    pub delta_y: f64,
}

/// `angle` is the turn since the press in `[0, 360)`; `start_angle` is the
/// rotation the rectangle had at press time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotateMotion {
    pub angle: f64,
    pub start_angle: f64,
}

/// Pointer motion of a resize, always measured from the press point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeMotion {
    pub length: f64,
    /// Radians, `atan2(dy, dx)`.
    pub angle: f64,
    pub start_rect: RectGeometry,
    pub handle: Direction,
    pub shift_key: bool,
}

/// Result of a resize once the handle direction, ratio and minimums have been
/// applied. Emitted by `ResizableRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeUpdate {
    pub style: TopLeftStyle,
    pub shift_key: bool,
    pub handle: Direction,
}
