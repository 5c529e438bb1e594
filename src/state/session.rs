//! Document-level resources held for the lifetime of one gesture.
//!
//! Pointer movement routinely leaves the widget mid-gesture, so move and
//! release are observed on the document. An `InteractionSession` owns those
//! listeners plus the optional body cursor override; dropping it detaches the
//! listeners and restores the cursor.

use gloo::events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::error::SessionError;
use crate::state::GestureKind;

fn document() -> Result<Document, SessionError> {
    web_sys::window()
        .ok_or(SessionError::NoWindow)?
        .document()
        .ok_or(SessionError::NoDocument)
}

/// Forces a cursor on `<body>` until dropped.
pub struct CursorOverride {
    body: HtmlElement,
}

impl CursorOverride {
    pub fn apply(cursor: &str) -> Result<Self, SessionError> {
        let body = document()?.body().ok_or(SessionError::NoBody)?;
        body.style()
            .set_property("cursor", cursor)
            .map_err(|err| SessionError::Style(format!("{err:?}")))?;
        Ok(Self { body })
    }
}

impl Drop for CursorOverride {
    fn drop(&mut self) {
        let _ = self.body.style().set_property("cursor", "auto");
    }
}

pub struct InteractionSession {
    kind: GestureKind,
    // Field order matters: listeners go first, then the cursor is restored.
    _listeners: Vec<EventListener>,
    _cursor: Option<CursorOverride>,
}

impl InteractionSession {
    pub fn attach<M, U>(
        kind: GestureKind,
        cursor: Option<&str>,
        mut on_move: M,
        mut on_up: U,
    ) -> Result<Self, SessionError>
    where
        M: FnMut(&MouseEvent) + 'static,
        U: FnMut(&MouseEvent) + 'static,
    {
        let document = document()?;
        let cursor = cursor.map(CursorOverride::apply).transpose()?;
        let listeners = vec![
            EventListener::new(&document, "mousemove", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    on_move(event);
                }
            }),
            EventListener::new(&document, "mouseup", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    on_up(event);
                }
            }),
        ];
        debug!("session attached for {}", kind.as_str());
        Ok(Self {
            kind,
            _listeners: listeners,
            _cursor: cursor,
        })
    }
}

impl Drop for InteractionSession {
    fn drop(&mut self) {
        debug!("session released for {}", self.kind.as_str());
    }
}
