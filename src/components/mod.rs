pub mod app;
pub mod rect;
pub mod resizable_rect;
