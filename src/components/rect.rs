use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::direction::{Direction, Zoomable};
use crate::geometry::{Point, resize_cursor};
use crate::model::{DragDelta, PointerInput, RectStyle, ResizeMotion, RotateMotion};
use crate::state::{GestureController, GestureEvent, InteractionSession};
use crate::util::anchor_style;

const HANDLE_SIZE: f64 = 14.0;
const SQUARE_SIZE: f64 = 7.0;
const ACCENT: &str = "#eb5648";
const ROTATE_ICON: &str = "M10.536 3.464A5 5 0 1 0 11 10l1.424 1.425a7 7 0 1 1-.475-9.374L13.659.34A.2.2 0 0 1 14 .483V5.5a.5.5 0 0 1-.5.5H8.483a.2.2 0 0 1-.142-.341l2.195-2.195z";

#[derive(Properties, PartialEq, Clone)]
pub struct RectProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub on_resize_start: Option<Callback<()>>,
    #[prop_or_default]
    pub on_resize: Option<Callback<ResizeMotion>>,
    #[prop_or_default]
    pub on_resize_end: Option<Callback<()>>,
    #[prop_or_default]
    pub on_rotate_start: Option<Callback<()>>,
    #[prop_or_default]
    pub on_rotate: Option<Callback<RotateMotion>>,
    #[prop_or_default]
    pub on_rotate_end: Option<Callback<()>>,
    #[prop_or_default]
    pub on_drag_start: Option<Callback<()>>,
    #[prop_or_default]
    pub on_drag: Option<Callback<DragDelta>>,
    #[prop_or_default]
    pub on_drag_end: Option<Callback<()>>,
    /// Rotation of the containing element; only affects handle cursors.
    #[prop_or(0.0)]
    pub parent_rotate_angle: f64,
    #[prop_or(false)]
    pub rotatable: bool,
    pub styles: RectStyle,
    /// Comma-separated handle directions, e.g. `"n, e, se"`.
    #[prop_or_default]
    pub zoomable: AttrValue,
}

#[derive(Clone, Default)]
struct GestureHooks {
    on_resize_start: Option<Callback<()>>,
    on_resize: Option<Callback<ResizeMotion>>,
    on_resize_end: Option<Callback<()>>,
    on_rotate_start: Option<Callback<()>>,
    on_rotate: Option<Callback<RotateMotion>>,
    on_rotate_end: Option<Callback<()>>,
    on_drag_start: Option<Callback<()>>,
    on_drag: Option<Callback<DragDelta>>,
    on_drag_end: Option<Callback<()>>,
}

impl From<&RectProps> for GestureHooks {
    fn from(props: &RectProps) -> Self {
        Self {
            on_resize_start: props.on_resize_start.clone(),
            on_resize: props.on_resize.clone(),
            on_resize_end: props.on_resize_end.clone(),
            on_rotate_start: props.on_rotate_start.clone(),
            on_rotate: props.on_rotate.clone(),
            on_rotate_end: props.on_rotate_end.clone(),
            on_drag_start: props.on_drag_start.clone(),
            on_drag: props.on_drag.clone(),
            on_drag_end: props.on_drag_end.clone(),
        }
    }
}

fn emit<T>(cb: &Option<Callback<T>>, value: T) {
    if let Some(cb) = cb {
        cb.emit(value);
    }
}

impl GestureHooks {
    fn dispatch(&self, event: GestureEvent) {
        match event {
            GestureEvent::DragStart => emit(&self.on_drag_start, ()),
            GestureEvent::Drag(delta) => emit(&self.on_drag, delta),
            GestureEvent::DragEnd => emit(&self.on_drag_end, ()),
            GestureEvent::RotateStart => emit(&self.on_rotate_start, ()),
            GestureEvent::Rotate(motion) => emit(&self.on_rotate, motion),
            GestureEvent::RotateEnd => emit(&self.on_rotate_end, ()),
            GestureEvent::ResizeStart => emit(&self.on_resize_start, ()),
            GestureEvent::Resize(motion) => emit(&self.on_resize, motion),
            GestureEvent::ResizeEnd => emit(&self.on_resize_end, ()),
        }
    }
}

/// Per-instance gesture state shared between render-time handlers and the
/// document listeners of the running session.
#[derive(Default)]
struct RectRuntime {
    controller: RefCell<GestureController>,
    session: RefCell<Option<InteractionSession>>,
    hooks: RefCell<GestureHooks>,
}

impl RectRuntime {
    // Callbacks may re-render this component, so no borrow is held while
    // they run.
    fn dispatch(&self, event: GestureEvent) {
        let hooks = self.hooks.borrow().clone();
        hooks.dispatch(event);
    }

    fn begin(self: &Rc<Self>, events: Vec<GestureEvent>, cursor: Option<&str>) {
        if events.is_empty() {
            return;
        }
        let Some(kind) = self.controller.borrow().kind() else {
            return;
        };
        // A preempted gesture gives up its listeners and cursor first.
        let prior = self.session.borrow_mut().take();
        drop(prior);

        // The session is in place before any callback runs, so a callback
        // that unmounts the widget also detaches it through `teardown`.
        let on_move = {
            let runtime = Rc::clone(self);
            move |e: &MouseEvent| runtime.pointer_move(e)
        };
        let on_up = {
            let runtime = Rc::clone(self);
            move |_: &MouseEvent| runtime.release()
        };
        let failure = match InteractionSession::attach(kind, cursor, on_move, on_up) {
            Ok(session) => {
                *self.session.borrow_mut() = Some(session);
                None
            }
            Err(err) => Some(err),
        };
        for event in events {
            self.dispatch(event);
        }
        if let Some(err) = failure {
            warn!("cannot track {} gesture: {err}", kind.as_str());
            self.release();
        }
    }

    fn pointer_move(&self, e: &MouseEvent) {
        let event = self.controller.borrow_mut().pointer_move(&pointer_input(e));
        if let Some(event) = event {
            e.stop_immediate_propagation();
            self.dispatch(event);
        }
    }

    fn release(&self) {
        let session = self.session.borrow_mut().take();
        let end = self.controller.borrow_mut().release();
        drop(session);
        if let Some(end) = end {
            self.dispatch(end);
        }
    }

    /// Unmount: drops the session (which also breaks the listener -> runtime
    /// reference cycle) without notifying callbacks.
    fn teardown(&self) {
        self.session.borrow_mut().take();
        *self.controller.borrow_mut() = GestureController::new();
    }
}

fn pointer_input(e: &MouseEvent) -> PointerInput {
    PointerInput {
        client_x: e.client_x() as f64,
        client_y: e.client_y() as f64,
        button: e.button(),
        shift_key: e.shift_key(),
    }
}

#[function_component(Rect)]
pub fn rect(props: &RectProps) -> Html {
    let node = use_node_ref();
    let runtime = use_memo((), |_| RectRuntime::default());
    *runtime.hooks.borrow_mut() = GestureHooks::from(props);

    {
        let runtime = runtime.clone();
        use_effect_with((), move |_| move || runtime.teardown());
    }

    let start_drag = {
        let runtime = runtime.clone();
        Callback::from(move |e: MouseEvent| {
            let events = runtime.controller.borrow_mut().begin_drag(&pointer_input(&e));
            runtime.begin(events, None);
        })
    };

    let start_rotate = {
        let runtime = runtime.clone();
        let node = node.clone();
        let start_angle = props.styles.transform.rotate_angle;
        Callback::from(move |e: MouseEvent| {
            // handle presses never reach the body's drag handler
            e.stop_propagation();
            let Some(el) = node.cast::<Element>() else {
                return;
            };
            let bounds = el.get_bounding_client_rect();
            let center = Point::new(
                bounds.left() + bounds.width() / 2.0,
                bounds.top() + bounds.height() / 2.0,
            );
            let events = runtime
                .controller
                .borrow_mut()
                .begin_rotate(&pointer_input(&e), center, start_angle);
            runtime.begin(events, None);
        })
    };

    let zoomable = Zoomable::parse(&props.zoomable);
    let cursor_angle = props.styles.transform.rotate_angle + props.parent_rotate_angle;

    let handles = zoomable
        .directions()
        .iter()
        .map(|&d| {
            let cursor = resize_cursor(cursor_angle, d);
            let onmousedown = {
                let runtime = runtime.clone();
                let rect = props.styles.geometry();
                let cursor = cursor.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    let handle = e
                        .target_dyn_into::<Element>()
                        .and_then(|target| target.get_attribute("class"))
                        .and_then(|class| Direction::from_class_attr(&class))
                        .unwrap_or(d);
                    let events = runtime
                        .controller
                        .borrow_mut()
                        .begin_resize(&pointer_input(&e), rect, handle);
                    runtime.begin(events, Some(cursor.as_str()));
                })
            };
            let style = format!(
                "{} cursor:{cursor}; z-index:1;",
                anchor_style(d, HANDLE_SIZE)
            );
            html! {
                <div key={d.as_str()} class={classes!(d.handle_class(), "resizable-handler")} {style} {onmousedown}></div>
            }
        })
        .collect::<Html>();

    let squares = zoomable
        .directions()
        .iter()
        .map(|&d| {
            let style = format!(
                "{} box-sizing:border-box; background:#fff; border:1px solid {ACCENT}; border-radius:1px;",
                anchor_style(d, SQUARE_SIZE)
            );
            html! { <div key={d.as_str()} class={classes!(d.handle_class(), "square")} {style}></div> }
        })
        .collect::<Html>();

    let rotate = if props.rotatable {
        html! {
            <div class="rotate" style="position:absolute; left:50%; top:-26px; width:18px; height:18px; margin-left:-9px; cursor:pointer; display:flex; align-items:center; justify-content:center;" onmousedown={start_rotate}>
                <svg width="14" height="14" xmlns="http://www.w3.org/2000/svg">
                    <path d={ROTATE_ICON} fill={ACCENT} fill-rule="nonzero" />
                </svg>
            </div>
        }
    } else {
        html! {}
    };

    let (left, top, width, height) = props.styles.layout_box();
    let style = format!(
        "position:absolute; left:{left}px; top:{top}px; width:{width}px; height:{height}px; \
         transform:rotate({}deg); box-sizing:border-box; border:1px solid {ACCENT}; cursor:move;",
        props.styles.transform.rotate_angle
    );

    html! {
        <div ref={node} class={classes!("rect", "single-resizer", props.class.clone())} {style} onmousedown={start_drag}>
            { rotate }
            { handles }
            { squares }
            { props.children.clone() }
        </div>
    }
}
