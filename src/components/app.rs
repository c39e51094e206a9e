use super::inline_crop::InlineCrop;
use crate::model::{HostAction, HostState, SavePayload, Transform};
use crate::storage;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const DEFAULT_IMAGE: &str = "https://picsum.photos/id/1015/1600/900";
const FRAME_WIDTH: u32 = 360;
const FRAME_HEIGHT: u32 = 640;

fn load_saved(src: &str) -> Option<Transform> {
    storage::load_transform(src).unwrap_or_else(|e| {
        log::warn!("Failed to load saved transform: {}", e);
        None
    })
}

/// Last image and its framing from localStorage, falling back to the sample image.
fn restore_host_state() -> HostState {
    let src = match storage::load_last_image() {
        Ok(Some(src)) if !src.is_empty() => src,
        Ok(_) => DEFAULT_IMAGE.to_string(),
        Err(e) => {
            log::warn!("Failed to load last image: {}", e);
            DEFAULT_IMAGE.to_string()
        }
    };
    let saved = load_saved(&src);
    log::info!("Restored {} with transform {:?}", src, saved);
    HostState::new(src, saved)
}

// Host container: owns the saved transform and decides when the editor is active.
#[function_component(App)]
pub fn app() -> Html {
    let host = use_reducer(restore_host_state);
    let url_ref = use_node_ref();

    // Persist whatever transform the current image ends up with
    {
        let src = host.image_src.clone();
        use_effect_with((src, host.saved), move |(src, saved)| {
            if let Err(e) = storage::store_transform(src, *saved) {
                log::warn!("Failed to save transform: {}", e);
            }
            if let Err(e) = storage::store_last_image(src) {
                log::warn!("Failed to save last image: {}", e);
            }
            || ()
        });
    }

    let on_save = {
        let host = host.clone();
        Callback::from(move |payload: SavePayload| {
            log::info!("Saved transform for {}: {:?}", payload.original_image_src, payload.transform);
            host.dispatch(HostAction::Saved(payload));
        })
    };
    let on_cancel = {
        let host = host.clone();
        Callback::from(move |()| host.dispatch(HostAction::Cancel))
    };
    let start_editing = {
        let host = host.clone();
        Callback::from(move |_: MouseEvent| {
            if !host.editing {
                host.dispatch(HostAction::StartEditing);
            }
        })
    };
    let finish = {
        let host = host.clone();
        Callback::from(move |_: MouseEvent| host.dispatch(HostAction::Finish))
    };
    let load_url = {
        let host = host.clone();
        let url_ref = url_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = url_ref.cast::<HtmlInputElement>() {
                let src = input.value().trim().to_string();
                if !src.is_empty() {
                    let saved = load_saved(&src);
                    host.dispatch(HostAction::Open {
                        image_src: src,
                        saved,
                    });
                }
            }
        })
    };

    let editing = host.editing;
    html! {<div style="min-height:100vh; background:#0e1116; color:#e6edf3; display:flex; flex-direction:column; align-items:center; gap:12px; padding:16px; font-family:sans-serif;">
        <form onsubmit={load_url} style="display:flex; gap:6px; width:360px;">
            <input ref={url_ref} type="url" placeholder="Image URL" value={host.image_src.clone()} style="flex:1;" />
            <button type="submit" disabled={editing}>{"Load"}</button>
        </form>
        <div onclick={start_editing} style={if editing { "" } else { "cursor:pointer;" }}>
            <InlineCrop
                active={editing}
                image_src={AttrValue::from(host.image_src.clone())}
                saved_transform={host.saved}
                on_save={on_save}
                on_cancel={on_cancel}
                width={FRAME_WIDTH}
                height={FRAME_HEIGHT}
            />
        </div>
        if editing {
            <button onclick={finish}>{"Done"}</button>
        } else {
            <div style="font-size:12px; opacity:0.7;">
                { match host.saved {
                    Some(t) => format!("scale {:.2} · x {:.0} · y {:.0}", t.scale, t.translate_x, t.translate_y),
                    None => "Not adjusted yet".to_string(),
                } }
            </div>
        }
    </div>}
}
