use std::rc::Rc;

use super::resizable_rect::ResizableRect;
use crate::model::{DragDelta, ResizeUpdate, TopLeftStyle};
use yew::prelude::*;

const STYLE_KEY: &str = "rr_demo_style";
const WIDE_RATIO: f64 = 16.0 / 9.0;

fn initial_style() -> TopLeftStyle {
    TopLeftStyle {
        top: 120.0,
        left: 160.0,
        width: 240.0,
        height: 140.0,
        rotate_angle: 0.0,
    }
}

/// Demo-side owner of the rectangle geometry. Gesture callbacks can fire
/// several times between renders, so updates go through a reducer instead of
/// reading a possibly stale state handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoStyle(pub TopLeftStyle);

pub enum StyleAction {
    Drag(DragDelta),
    Resize(ResizeUpdate),
    Rotate(f64),
    Restore(TopLeftStyle),
    Reset,
}

impl Reducible for DemoStyle {
    type Action = StyleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            StyleAction::Drag(d) => {
                next.left += d.delta_x;
                next.top += d.delta_y;
            }
            StyleAction::Resize(update) => {
                next = TopLeftStyle {
                    rotate_angle: next.rotate_angle,
                    ..update.style
                };
            }
            StyleAction::Rotate(angle) => next.rotate_angle = angle,
            StyleAction::Restore(saved) => next = saved,
            StyleAction::Reset => next = initial_style(),
        }
        Rc::new(DemoStyle(next))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Activity {
    Idle,
    Dragging,
    Resizing,
    Rotating,
}

impl Activity {
    fn label(self) -> &'static str {
        match self {
            Activity::Idle => "idle",
            Activity::Dragging => "dragging",
            Activity::Resizing => "resizing",
            Activity::Rotating => "rotating",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let style = use_reducer(|| DemoStyle(initial_style()));
    let rotatable = use_state(|| true);
    let lock_wide = use_state(|| false);
    let activity = use_state(|| Activity::Idle);

    // Restore the last geometry
    {
        let style = style.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(STYLE_KEY) {
                        match serde_json::from_str::<TopLeftStyle>(&raw) {
                            Ok(saved) => style.dispatch(StyleAction::Restore(saved)),
                            Err(err) => log::warn!("ignoring saved style: {err}"),
                        }
                    }
                }
            }
            || ()
        });
    }
    // Remember geometry changes
    {
        let current = style.0;
        use_effect_with(current, move |current| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(current) {
                        let _ = store.set_item(STYLE_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    let on_drag = {
        let style = style.clone();
        Callback::from(move |d: DragDelta| style.dispatch(StyleAction::Drag(d)))
    };
    let on_resize = {
        let style = style.clone();
        Callback::from(move |update: ResizeUpdate| style.dispatch(StyleAction::Resize(update)))
    };
    let on_rotate = {
        let style = style.clone();
        Callback::from(move |angle: f64| style.dispatch(StyleAction::Rotate(angle)))
    };
    let mark = |state: Activity| {
        let activity = activity.clone();
        Callback::from(move |_: ()| activity.set(state))
    };

    let toggle_rotatable = {
        let rotatable = rotatable.clone();
        Callback::from(move |_| rotatable.set(!*rotatable))
    };
    let toggle_wide = {
        let lock_wide = lock_wide.clone();
        Callback::from(move |_| lock_wide.set(!*lock_wide))
    };
    let reset = {
        let style = style.clone();
        Callback::from(move |_| style.dispatch(StyleAction::Reset))
    };

    let s = style.0;
    let aspect_ratio = if *lock_wide { Some(WIDE_RATIO) } else { None };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px; z-index:10;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={*rotatable} onclick={toggle_rotatable} />
                    <span>{"Rotatable"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={*lock_wide} onclick={toggle_wide} />
                    <span>{"Lock 16:9"}</span>
                </label>
                <button onclick={reset}>{"Reset"}</button>
                <div style="font-size:11px; opacity:0.7;">{"Hold Shift while resizing to keep proportions"}</div>
                <div style="font-size:11px; line-height:1.4; background:#1c2128; border:1px solid #30363d; padding:4px 6px; border-radius:6px;">
                    { format!("{} · {:.0}×{:.0} @ {:.0}°", activity.label(), s.width.abs(), s.height.abs(), s.rotate_angle) }
                </div>
            </div>
            <ResizableRect
                left={s.left}
                top={s.top}
                width={s.width}
                height={s.height}
                rotate_angle={s.rotate_angle}
                zoomable="n, w, s, e, nw, ne, se, sw"
                rotatable={*rotatable}
                {aspect_ratio}
                on_drag_start={mark(Activity::Dragging)}
                on_drag={on_drag}
                on_drag_end={mark(Activity::Idle)}
                on_resize_start={mark(Activity::Resizing)}
                on_resize={on_resize}
                on_resize_end={mark(Activity::Idle)}
                on_rotate_start={mark(Activity::Rotating)}
                on_rotate={on_rotate}
                on_rotate_end={mark(Activity::Idle)}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(style: TopLeftStyle, action: StyleAction) -> TopLeftStyle {
        Rc::new(DemoStyle(style)).reduce(action).0
    }

    #[test]
    fn drags_accumulate_without_rerender() {
        let mut style = initial_style();
        for _ in 0..3 {
            style = reduce(
                style,
                StyleAction::Drag(DragDelta {
                    delta_x: 2.0,
                    delta_y: -1.0,
                }),
            );
        }
        assert_eq!(style.left, initial_style().left + 6.0);
        assert_eq!(style.top, initial_style().top - 3.0);
    }

    #[test]
    fn resize_keeps_current_rotation() {
        let mut style = initial_style();
        style.rotate_angle = 45.0;
        let update = ResizeUpdate {
            style: TopLeftStyle {
                top: 1.0,
                left: 2.0,
                width: 3.0,
                height: 4.0,
                rotate_angle: 0.0,
            },
            shift_key: false,
            handle: crate::direction::Direction::SE,
        };
        let next = reduce(style, StyleAction::Resize(update));
        assert_eq!(next.width, 3.0);
        assert_eq!(next.rotate_angle, 45.0);
    }

    #[test]
    fn reset_restores_initial_geometry() {
        let moved = reduce(initial_style(), StyleAction::Rotate(90.0));
        assert_eq!(moved.rotate_angle, 90.0);
        assert_eq!(reduce(moved, StyleAction::Reset), initial_style());
    }
}
