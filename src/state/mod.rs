pub mod gesture;
pub mod session;

pub use gesture::{GestureController, GestureEvent, GestureKind, GestureState};
pub use session::{CursorOverride, InteractionSession};
