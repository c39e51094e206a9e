use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditorControlsProps {
    pub on_cancel: Callback<()>,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    /// Changes made that auto-save hasn't picked up yet.
    #[prop_or_default]
    pub pending: bool,
}

#[function_component(EditorControls)]
pub fn editor_controls(props: &EditorControlsProps) -> Html {
    let cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:8px; right:8px; top:8px; display:flex; gap:6px; align-items:center; z-index:2;">
        <button onclick={cancel}> {"Cancel"} </button>
        <span style="flex:1;"></span>
        if props.pending {
            <span title="Unsaved changes" style="width:8px; height:8px; border-radius:50%; background:#f0b72f;"></span>
        }
        <button onclick={zo}> {"-"} </button>
        <button onclick={zi}> {"+"} </button>
        <button onclick={reset}> {"Reset"} </button>
    </div>}
}
