use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement, HtmlImageElement, MouseEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use super::crop_preview::CropPreview;
use super::editor_controls::EditorControls;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::model::{ImageMetrics, SavePayload, Transform, Viewport};
use crate::state::{Command, Point, TransformEditor};
use crate::util::{Listener, from_control, is_primary_press, to_local, touch_points};

#[derive(Properties, PartialEq, Clone)]
pub struct InlineCropProps {
    /// Gesture handling on; otherwise a static preview is shown.
    pub active: bool,
    pub image_src: AttrValue,
    #[prop_or_default]
    pub saved_transform: Option<Transform>,
    pub on_save: Callback<SavePayload>,
    pub on_cancel: Callback<()>,
    #[prop_or(360)]
    pub width: u32,
    #[prop_or(640)]
    pub height: u32,
}

fn viewport_of(width: u32, height: u32) -> Viewport {
    Viewport {
        width: width as f64,
        height: height as f64,
    }
}

/// Carries out editor commands: owns the debounce timer and forwards saves.
#[derive(Clone)]
struct CommandRunner {
    editor: Rc<RefCell<TransformEditor>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    on_save: Rc<RefCell<Callback<SavePayload>>>,
    redraw: UseForceUpdateHandle,
}

impl CommandRunner {
    fn run(&self, cmd: Option<Command>) {
        match cmd {
            Some(Command::ArmAutoSave { ticket, delay_ms }) => {
                let runner = self.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    let cmd = runner.editor.borrow_mut().autosave_elapsed(ticket);
                    runner.run(cmd);
                    runner.redraw.force_update();
                });
                // Replacing the handle cancels the previous timer.
                *self.timer.borrow_mut() = Some(timeout);
            }
            Some(Command::CancelAutoSave) => {
                self.timer.borrow_mut().take();
            }
            Some(Command::Save(payload)) => {
                let on_save = self.on_save.borrow().clone();
                on_save.emit(payload);
            }
            None => {}
        }
    }
}

/// Hook up pointer capture for one editing session. Move and end events are
/// taken from the window so a drag that leaves the viewport is still tracked.
fn attach_listeners(
    viewport: &HtmlElement,
    runner: &CommandRunner,
) -> Result<Vec<Listener>, EditorError> {
    let window = web_sys::window().ok_or(EditorError::NoWindow)?;
    let mut listeners = Vec::with_capacity(8);

    listeners.push(Listener::new(viewport, "mousedown", {
        let runner = runner.clone();
        move |e: MouseEvent| {
            if !is_primary_press(&e) || from_control(&e) {
                return;
            }
            e.prevent_default();
            let at = Point::new(e.client_x() as f64, e.client_y() as f64);
            runner.editor.borrow_mut().pointer_down(at);
            runner.redraw.force_update();
        }
    })?);
    listeners.push(Listener::new(viewport, "touchstart", {
        let runner = runner.clone();
        move |e: TouchEvent| {
            if from_control(&e) {
                return;
            }
            // Also suppresses the emulated mouse events that would follow.
            e.prevent_default();
            let points = touch_points(&e.touches());
            runner.editor.borrow_mut().touch_start(&points);
            runner.redraw.force_update();
        }
    })?);
    listeners.push(Listener::new(viewport, "wheel", {
        let runner = runner.clone();
        move |e: WheelEvent| {
            e.prevent_default();
            let cmd = runner.editor.borrow_mut().wheel(e.delta_y());
            if cmd.is_some() {
                runner.run(cmd);
                runner.redraw.force_update();
            }
        }
    })?);

    listeners.push(Listener::new(&window, "mousemove", {
        let runner = runner.clone();
        move |e: MouseEvent| {
            let at = Point::new(e.client_x() as f64, e.client_y() as f64);
            if runner.editor.borrow_mut().pointer_move(at) {
                runner.redraw.force_update();
            }
        }
    })?);
    listeners.push(Listener::new(&window, "touchmove", {
        let runner = runner.clone();
        move |e: TouchEvent| {
            if !runner.editor.borrow().is_interacting() {
                return;
            }
            e.prevent_default();
            let points = touch_points(&e.touches());
            if runner.editor.borrow_mut().touch_move(&points) {
                runner.redraw.force_update();
            }
        }
    })?);
    let end = |kind: &'static str, target: &web_sys::EventTarget| {
        let runner = runner.clone();
        Listener::new(target, kind, move |_e: web_sys::Event| {
            if !runner.editor.borrow().is_interacting() {
                return;
            }
            let cmd = runner.editor.borrow_mut().gesture_end();
            runner.run(cmd);
            runner.redraw.force_update();
        })
    };
    let window_target: &web_sys::EventTarget = &window;
    listeners.push(end("mouseup", window_target)?);
    listeners.push(end("touchend", window_target)?);
    listeners.push(end("touchcancel", window_target)?);
    Ok(listeners)
}

/// Pan and pinch an image inside a fixed viewport, saving the transform once
/// interaction settles.
#[function_component(InlineCrop)]
pub fn inline_crop(props: &InlineCropProps) -> Html {
    let viewport_ref = use_node_ref();
    let editor = {
        let viewport = viewport_of(props.width, props.height);
        use_mut_ref(move || TransformEditor::new(EditorConfig::default(), viewport))
    };
    let timer = use_mut_ref(|| None::<Timeout>);
    let on_save_ref = use_mut_ref(|| props.on_save.clone()); // always the latest callback
    *on_save_ref.borrow_mut() = props.on_save.clone();
    let redraw = use_force_update();
    let runner = CommandRunner {
        editor: editor.clone(),
        timer,
        on_save: on_save_ref,
        redraw,
    };

    {
        let editor = editor.clone();
        use_effect_with((props.width, props.height), move |&(w, h)| {
            editor.borrow_mut().set_viewport(viewport_of(w, h));
            || ()
        });
    }

    // Session lifecycle: each activation starts fresh from the saved transform.
    {
        let runner = runner.clone();
        let viewport_ref = viewport_ref.clone();
        let saved = props.saved_transform;
        use_effect_with(
            (props.active, props.image_src.clone()),
            move |(active, image_src)| {
                let mut listeners = Vec::new();
                if *active {
                    let cmd = runner.editor.borrow_mut().activate(saved, image_src);
                    runner.run(cmd);
                    match viewport_ref.cast::<HtmlElement>() {
                        Some(viewport) => match attach_listeners(&viewport, &runner) {
                            Ok(attached) => listeners = attached,
                            Err(e) => log::warn!("crop editor listeners not attached: {}", e),
                        },
                        None => log::warn!("crop editor viewport not mounted"),
                    }
                    runner.redraw.force_update();
                }
                move || {
                    drop(listeners);
                    let cmd = runner.editor.borrow_mut().deactivate();
                    runner.run(cmd);
                }
            },
        );
    }

    let frame_style = format!(
        "position:relative; width:{}px; height:{}px; overflow:hidden; background:#000; touch-action:none; user-select:none;",
        props.width, props.height
    );

    if !props.active {
        return html! {<div ref={viewport_ref} style={frame_style}>
            <CropPreview image_src={props.image_src.clone()} saved_transform={props.saved_transform} />
        </div>};
    }

    // Until the activation effect runs, show what the session will start from.
    let (transform, interacting, pinch_origin, pending) = {
        let ed = editor.borrow();
        if ed.is_active() {
            (
                ed.transform(),
                ed.is_interacting(),
                ed.pinch_origin(),
                ed.has_pending_changes(),
            )
        } else {
            (props.saved_transform.unwrap_or_default(), false, None, false)
        }
    };
    let image_style = format!(
        "position:absolute; inset:0; width:100%; height:100%; object-fit:contain; transform:{}; transform-origin:center center; transition:{}; pointer-events:none;",
        transform.to_css(),
        if interacting { "none" } else { "transform 0.15s ease-out" }
    );
    let cursor = if interacting { "grabbing" } else { "grab" };
    let pinch_marker = pinch_origin
        .zip(viewport_ref.cast::<Element>())
        .map(|(origin, el)| to_local(&el, origin));

    let on_load = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                editor.borrow_mut().set_image_metrics(ImageMetrics {
                    natural_width: img.natural_width() as f64,
                    natural_height: img.natural_height() as f64,
                });
            }
        })
    };
    let cancel_cb: Callback<()> = {
        let runner = runner.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |()| {
            let cmd = runner.editor.borrow_mut().cancel();
            runner.run(cmd);
            on_cancel.emit(());
        })
    };
    let command_cb = |f: fn(&mut TransformEditor) -> Option<Command>| {
        let runner = runner.clone();
        Callback::from(move |()| {
            let cmd = f(&mut runner.editor.borrow_mut());
            runner.run(cmd);
            runner.redraw.force_update();
        })
    };

    html! {<div ref={viewport_ref} style={format!("{} cursor:{};", frame_style, cursor)}>
        if !props.image_src.is_empty() {
            <img src={props.image_src.clone()} alt="" draggable="false" onload={on_load} style={image_style} />
        }
        if let Some(p) = pinch_marker {
            <div style={format!("position:absolute; left:{}px; top:{}px; width:12px; height:12px; margin:-6px 0 0 -6px; border-radius:50%; border:2px solid rgba(255,255,255,0.8); pointer-events:none;", p.x, p.y)}></div>
        }
        <EditorControls
            on_cancel={cancel_cb}
            on_zoom_in={command_cb(TransformEditor::zoom_in)}
            on_zoom_out={command_cb(TransformEditor::zoom_out)}
            on_reset={command_cb(TransformEditor::reset)}
            pending={pending}
        />
    </div>}
}
