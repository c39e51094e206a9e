//! Core data models for the inline crop editor.
//! The transform and its save payload are the only values that leave the editor;
//! `HostState` is the reducer the demo host container keeps around it.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Position and scale of an image inside a fixed viewport.
/// Translation is in pixels relative to the viewport center and is never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// CSS `transform` value for this transform.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What the editor hands to `on_save` once interaction settles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub transform: Transform,
    pub original_image_src: String,
}

/// Natural pixel size of the loaded image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMetrics {
    pub natural_width: f64,
    pub natural_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Scale, relative to a contain-fitted image at scale 1, at which the image
/// covers the whole viewport. Degenerate sizes yield 1.0.
pub fn cover_fit_scale(image: ImageMetrics, viewport: Viewport) -> f64 {
    if image.natural_width <= 0.0
        || image.natural_height <= 0.0
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        return 1.0;
    }
    let sx = viewport.width / image.natural_width;
    let sy = viewport.height / image.natural_height;
    sx.max(sy) / sx.min(sy)
}

/// State of the demo host container around the editor.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HostState {
    pub image_src: String,
    pub saved: Option<Transform>,
    pub editing: bool,
    /// Transform at the start of the current editing session, restored on cancel.
    pub session_start: Option<Option<Transform>>,
}

impl HostState {
    pub fn new(image_src: impl Into<String>, saved: Option<Transform>) -> Self {
        Self {
            image_src: image_src.into(),
            saved,
            editing: false,
            session_start: None,
        }
    }
}

pub enum HostAction {
    StartEditing,
    Saved(SavePayload),
    Cancel,
    Finish,
    /// Switch to another image along with whatever was saved for it.
    Open {
        image_src: String,
        saved: Option<Transform>,
    },
}

impl Reducible for HostState {
    type Action = HostAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use HostAction::*;
        let mut new = (*self).clone();
        match action {
            StartEditing => {
                if new.editing || new.image_src.is_empty() {
                    return self;
                }
                new.editing = true;
                new.session_start = Some(new.saved);
            }
            Saved(payload) => {
                // Saves for an image we've since moved away from are dropped.
                if payload.original_image_src != new.image_src {
                    return self;
                }
                new.saved = Some(payload.transform);
            }
            Cancel => {
                if let Some(start) = new.session_start.take() {
                    new.saved = start;
                }
                new.editing = false;
            }
            Finish => {
                new.editing = false;
                new.session_start = None;
            }
            Open { image_src, saved } => {
                if new.editing {
                    return self;
                }
                new.image_src = image_src;
                new.saved = saved;
                new.session_start = None;
            }
        }
        Rc::new(new)
    }
}
