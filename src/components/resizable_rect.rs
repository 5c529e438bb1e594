use yew::prelude::*;

use crate::components::rect::Rect;
use crate::model::{DragDelta, ResizeMotion, ResizeUpdate, RotateMotion, TopLeftStyle};
use crate::resize::{apply_resize, snap_rotation};

/// Top-left positioned wrapper around `Rect` that turns raw gesture motion
/// into finished geometry: resized boxes, snapped angles, drag deltas.
#[derive(Properties, PartialEq, Clone)]
pub struct ResizableRectProps {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[prop_or(0.0)]
    pub rotate_angle: f64,
    #[prop_or(0.0)]
    pub parent_rotate_angle: f64,
    #[prop_or_default]
    pub zoomable: AttrValue,
    #[prop_or(true)]
    pub rotatable: bool,
    #[prop_or(10.0)]
    pub min_width: f64,
    #[prop_or(10.0)]
    pub min_height: f64,
    /// Fixed width/height ratio. Without one, Shift locks the ratio the
    /// rectangle had when the resize began.
    #[prop_or_default]
    pub aspect_ratio: Option<f64>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub on_resize_start: Option<Callback<()>>,
    #[prop_or_default]
    pub on_resize: Option<Callback<ResizeUpdate>>,
    #[prop_or_default]
    pub on_resize_end: Option<Callback<()>>,
    #[prop_or_default]
    pub on_rotate_start: Option<Callback<()>>,
    /// Receives the new absolute angle in degrees.
    #[prop_or_default]
    pub on_rotate: Option<Callback<f64>>,
    #[prop_or_default]
    pub on_rotate_end: Option<Callback<()>>,
    #[prop_or_default]
    pub on_drag_start: Option<Callback<()>>,
    #[prop_or_default]
    pub on_drag: Option<Callback<DragDelta>>,
    #[prop_or_default]
    pub on_drag_end: Option<Callback<()>>,
}

#[function_component(ResizableRect)]
pub fn resizable_rect(props: &ResizableRectProps) -> Html {
    let styles = TopLeftStyle {
        top: props.top,
        left: props.left,
        width: props.width,
        height: props.height,
        rotate_angle: props.rotate_angle,
    }
    .to_center();

    let on_resize = props.on_resize.clone().map(|cb| {
        let parent_rotate_angle = props.parent_rotate_angle;
        let aspect_ratio = props.aspect_ratio;
        let (min_width, min_height) = (props.min_width, props.min_height);
        Callback::from(move |motion: ResizeMotion| {
            cb.emit(apply_resize(
                &motion,
                parent_rotate_angle,
                aspect_ratio,
                min_width,
                min_height,
            ));
        })
    });

    let on_rotate = props.on_rotate.clone().map(|cb| {
        Callback::from(move |motion: RotateMotion| {
            cb.emit(snap_rotation(motion.start_angle, motion.angle));
        })
    });

    html! {
        <Rect
            class={props.class.clone()}
            {styles}
            zoomable={props.zoomable.clone()}
            rotatable={props.rotatable && props.on_rotate.is_some()}
            parent_rotate_angle={props.parent_rotate_angle}
            on_resize_start={props.on_resize_start.clone()}
            {on_resize}
            on_resize_end={props.on_resize_end.clone()}
            on_rotate_start={props.on_rotate_start.clone()}
            {on_rotate}
            on_rotate_end={props.on_rotate_end.clone()}
            on_drag_start={props.on_drag_start.clone()}
            on_drag={props.on_drag.clone()}
            on_drag_end={props.on_drag_end.clone()}
        >
            { props.children.clone() }
        </Rect>
    }
}
