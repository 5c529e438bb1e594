// Logging bootstrap and inline style helpers

use crate::direction::Direction;

pub fn clog(msg: &str) {
    log::debug!("{msg}");
}

/// Installs the console logger and panic hook. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        clog("logger already initialized");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(_level: log::Level) {}

/// Absolute offsets that pin a box of `size` pixels onto the edge or corner
/// named by `d`, centered on the border line.
pub fn anchor_style(d: Direction, size: f64) -> String {
    let half = size / 2.0;
    let mut style = format!("position:absolute; width:{size}px; height:{size}px;");
    let vertical = match d {
        Direction::N | Direction::NE | Direction::NW => format!(" top:-{half}px;"),
        Direction::S | Direction::SE | Direction::SW => format!(" bottom:-{half}px;"),
        Direction::E | Direction::W => format!(" top:50%; margin-top:-{half}px;"),
    };
    let horizontal = match d {
        Direction::W | Direction::NW | Direction::SW => format!(" left:-{half}px;"),
        Direction::E | Direction::NE | Direction::SE => format!(" right:-{half}px;"),
        Direction::N | Direction::S => format!(" left:50%; margin-left:-{half}px;"),
    };
    style.push_str(&vertical);
    style.push_str(&horizontal);
    style
}
