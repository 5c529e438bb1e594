//! Pointer gesture state machine.
//!
//! `GestureController` turns press/move/release input into drag, rotate and
//! resize events. It owns no DOM resources; the `Rect` component feeds it
//! pointer samples and dispatches the returned events to its callbacks.
//!
//! At most one gesture is active. Pressing again while a gesture is running
//! ends the running one first (its `*End` event is returned ahead of the new
//! `*Start`), so a release that never arrived cannot wedge the widget.

use log::debug;

use crate::direction::Direction;
use crate::geometry::{Point, angle_between, length};
use crate::model::{DragDelta, PointerInput, RectGeometry, ResizeMotion, RotateMotion};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Rotate,
    Resize,
}

impl GestureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GestureKind::Drag => "drag",
            GestureKind::Rotate => "rotate",
            GestureKind::Resize => "resize",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    DragStart,
    Drag(DragDelta),
    DragEnd,
    RotateStart,
    Rotate(RotateMotion),
    RotateEnd,
    ResizeStart,
    Resize(ResizeMotion),
    ResizeEnd,
}

/// Drag origin. Deltas are incremental, so each move yields a successor
/// context anchored at the new pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragContext {
    pub last: Point,
}

impl DragContext {
    fn advance(self, to: Point) -> (DragDelta, DragContext) {
        let delta = DragDelta {
            delta_x: to.x - self.last.x,
            delta_y: to.y - self.last.y,
        };
        (delta, DragContext { last: to })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateContext {
    pub center: Point,
    pub start_angle: f64,
    pub start_vector: Point,
}

impl RotateContext {
    fn motion(&self, at: Point) -> RotateMotion {
        let vector = at.relative_to(self.center);
        RotateMotion {
            angle: angle_between(self.start_vector, vector),
            start_angle: self.start_angle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeContext {
    pub start: Point,
    pub rect: RectGeometry,
    pub handle: Direction,
}

impl ResizeContext {
    fn motion(&self, input: &PointerInput) -> ResizeMotion {
        let dx = input.client_x - self.start.x;
        let dy = input.client_y - self.start.y;
        ResizeMotion {
            length: length(dx, dy),
            angle: dy.atan2(dx),
            start_rect: self.rect,
            handle: self.handle,
            shift_key: input.shift_key,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragContext),
    Rotating(RotateContext),
    Resizing(ResizeContext),
}

impl GestureState {
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging(_) => Some(GestureKind::Drag),
            GestureState::Rotating(_) => Some(GestureKind::Rotate),
            GestureState::Resizing(_) => Some(GestureKind::Resize),
        }
    }
}

#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    pub fn kind(&self) -> Option<GestureKind> {
        self.state.kind()
    }

    /// Drag accepts any button.
    pub fn begin_drag(&mut self, input: &PointerInput) -> Vec<GestureEvent> {
        let context = DragContext {
            last: Point::new(input.client_x, input.client_y),
        };
        self.enter(GestureState::Dragging(context), GestureEvent::DragStart)
    }

    /// `center` is the visual center of the widget in client pixels;
    /// `start_angle` the rotation it currently renders with.
    pub fn begin_rotate(
        &mut self,
        input: &PointerInput,
        center: Point,
        start_angle: f64,
    ) -> Vec<GestureEvent> {
        if !input.is_primary() {
            return Vec::new();
        }
        let context = RotateContext {
            center,
            start_angle,
            start_vector: Point::new(input.client_x, input.client_y).relative_to(center),
        };
        self.enter(GestureState::Rotating(context), GestureEvent::RotateStart)
    }

    pub fn begin_resize(
        &mut self,
        input: &PointerInput,
        rect: RectGeometry,
        handle: Direction,
    ) -> Vec<GestureEvent> {
        if !input.is_primary() {
            return Vec::new();
        }
        let context = ResizeContext {
            start: Point::new(input.client_x, input.client_y),
            rect,
            handle,
        };
        self.enter(GestureState::Resizing(context), GestureEvent::ResizeStart)
    }

    /// Ignored while idle.
    pub fn pointer_move(&mut self, input: &PointerInput) -> Option<GestureEvent> {
        let at = Point::new(input.client_x, input.client_y);
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging(ctx) => {
                let (delta, next) = ctx.advance(at);
                self.state = GestureState::Dragging(next);
                Some(GestureEvent::Drag(delta))
            }
            GestureState::Rotating(ctx) => Some(GestureEvent::Rotate(ctx.motion(at))),
            GestureState::Resizing(ctx) => Some(GestureEvent::Resize(ctx.motion(input))),
        }
    }

    /// Ends the active gesture. A release while idle, including a duplicate
    /// release, yields nothing.
    pub fn release(&mut self) -> Option<GestureEvent> {
        let kind = std::mem::take(&mut self.state).kind()?;
        debug!("gesture end {}", kind.as_str());
        Some(end_event(kind))
    }

    fn enter(&mut self, next: GestureState, start: GestureEvent) -> Vec<GestureEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(prior) = self.release() {
            debug!("gesture preempted");
            events.push(prior);
        }
        if let Some(kind) = next.kind() {
            debug!("gesture start {}", kind.as_str());
        }
        self.state = next;
        events.push(start);
        events
    }
}

fn end_event(kind: GestureKind) -> GestureEvent {
    match kind {
        GestureKind::Drag => GestureEvent::DragEnd,
        GestureKind::Rotate => GestureEvent::RotateEnd,
        GestureKind::Resize => GestureEvent::ResizeEnd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PointerInput {
        PointerInput::new(x, y)
    }

    fn secondary(x: f64, y: f64) -> PointerInput {
        PointerInput {
            button: 2,
            ..PointerInput::new(x, y)
        }
    }

    fn rect() -> RectGeometry {
        RectGeometry {
            width: 100.0,
            height: 50.0,
            center_x: 200.0,
            center_y: 150.0,
            rotate_angle: 0.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {expected} got {actual}"
        );
    }

    #[test]
    fn drag_reports_one_incremental_delta_per_move() {
        let mut c = GestureController::new();
        assert_eq!(c.begin_drag(&at(10.0, 10.0)), vec![GestureEvent::DragStart]);
        let path = [(12.0, 15.0), (20.0, 15.0), (5.0, -3.0), (5.0, -3.0)];
        let mut deltas = Vec::new();
        for (x, y) in path {
            match c.pointer_move(&at(x, y)) {
                Some(GestureEvent::Drag(d)) => deltas.push(d),
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(deltas.len(), path.len());
        assert_eq!(deltas[0], DragDelta { delta_x: 2.0, delta_y: 5.0 });
        assert_eq!(deltas[1], DragDelta { delta_x: 8.0, delta_y: 0.0 });
        assert_eq!(deltas[3], DragDelta { delta_x: 0.0, delta_y: 0.0 });
        let sum_x: f64 = deltas.iter().map(|d| d.delta_x).sum();
        let sum_y: f64 = deltas.iter().map(|d| d.delta_y).sum();
        assert_close(sum_x, 5.0 - 10.0);
        assert_close(sum_y, -3.0 - 10.0);
    }

    #[test]
    fn drag_accepts_secondary_button() {
        let mut c = GestureController::new();
        assert_eq!(c.begin_drag(&secondary(0.0, 0.0)), vec![GestureEvent::DragStart]);
        assert_eq!(c.kind(), Some(GestureKind::Drag));
    }

    #[test]
    fn resize_is_measured_from_press_point() {
        let mut c = GestureController::new();
        c.begin_resize(&at(100.0, 100.0), rect(), Direction::SE);
        c.pointer_move(&at(150.0, 170.0));
        c.pointer_move(&at(90.0, 60.0));
        let Some(GestureEvent::Resize(m)) = c.pointer_move(&at(103.0, 104.0)) else {
            panic!("expected resize motion");
        };
        assert_close(m.length, 5.0);
        assert_close(m.angle, 4.0_f64.atan2(3.0));
        assert_eq!(m.start_rect, rect());
        assert_eq!(m.handle, Direction::SE);
    }

    #[test]
    fn resize_ignores_secondary_button() {
        let mut c = GestureController::new();
        assert!(c.begin_resize(&secondary(0.0, 0.0), rect(), Direction::N).is_empty());
        assert!(!c.is_active());
        assert_eq!(c.pointer_move(&at(10.0, 10.0)), None);
    }

    #[test]
    fn shift_follows_each_move_of_a_resize() {
        let mut c = GestureController::new();
        let with_shift = |x: f64| PointerInput {
            shift_key: true,
            ..PointerInput::new(x, 0.0)
        };
        c.begin_resize(&with_shift(0.0), rect(), Direction::E);
        for x in [5.0, 10.0] {
            let Some(GestureEvent::Resize(m)) = c.pointer_move(&with_shift(x)) else {
                panic!("expected resize motion");
            };
            assert!(m.shift_key);
        }
        // Shift let go mid-gesture unlocks the ratio right away
        let Some(GestureEvent::Resize(m)) = c.pointer_move(&at(15.0, 0.0)) else {
            panic!("expected resize motion");
        };
        assert!(!m.shift_key);
        c.release();

        c.begin_resize(&at(0.0, 0.0), rect(), Direction::E);
        let Some(GestureEvent::Resize(m)) = c.pointer_move(&at(5.0, 0.0)) else {
            panic!("expected resize motion");
        };
        assert!(!m.shift_key);
    }

    #[test]
    fn shift_pressed_mid_resize_is_reported() {
        let mut c = GestureController::new();
        c.begin_resize(&at(0.0, 0.0), rect(), Direction::E);
        let held = PointerInput {
            shift_key: true,
            ..PointerInput::new(4.0, 0.0)
        };
        let Some(GestureEvent::Resize(m)) = c.pointer_move(&held) else {
            panic!("expected resize motion");
        };
        assert!(m.shift_key);
    }

    #[test]
    fn rotate_reports_turn_and_start_angle() {
        let mut c = GestureController::new();
        let center = Point::new(100.0, 100.0);
        c.begin_rotate(&at(100.0, 50.0), center, 30.0);
        let Some(GestureEvent::Rotate(m)) = c.pointer_move(&at(150.0, 100.0)) else {
            panic!("expected rotate motion");
        };
        assert_close(m.angle, 90.0);
        assert_close(m.start_angle, 30.0);
    }

    #[test]
    fn rotate_with_secondary_button_stays_idle() {
        let mut c = GestureController::new();
        let events = c.begin_rotate(&secondary(100.0, 50.0), Point::new(100.0, 100.0), 0.0);
        assert!(events.is_empty());
        assert!(!c.is_active());
        assert_eq!(c.pointer_move(&at(150.0, 100.0)), None);
        assert_eq!(c.release(), None);
    }

    #[test]
    fn release_fires_end_once() {
        let mut c = GestureController::new();
        assert_eq!(c.release(), None);
        c.begin_rotate(&at(0.0, 0.0), Point::new(10.0, 10.0), 0.0);
        assert_eq!(c.release(), Some(GestureEvent::RotateEnd));
        assert_eq!(c.release(), None);
        assert_eq!(c.pointer_move(&at(1.0, 1.0)), None);
    }

    #[test]
    fn new_press_preempts_running_gesture() {
        let mut c = GestureController::new();
        c.begin_drag(&at(0.0, 0.0));
        let events = c.begin_resize(&at(5.0, 5.0), rect(), Direction::S);
        assert_eq!(events, vec![GestureEvent::DragEnd, GestureEvent::ResizeStart]);
        assert_eq!(c.kind(), Some(GestureKind::Resize));
        assert_eq!(c.release(), Some(GestureEvent::ResizeEnd));
    }

    #[test]
    fn rejected_press_keeps_running_gesture() {
        let mut c = GestureController::new();
        c.begin_drag(&at(0.0, 0.0));
        assert!(c.begin_rotate(&secondary(1.0, 1.0), Point::default(), 0.0).is_empty());
        assert_eq!(c.kind(), Some(GestureKind::Drag));
    }
}
