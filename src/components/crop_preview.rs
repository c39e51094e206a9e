use yew::prelude::*;

use crate::model::Transform;
use crate::state::DisplayLayers;

#[derive(Properties, PartialEq, Clone)]
pub struct CropPreviewProps {
    pub image_src: AttrValue,
    pub saved_transform: Option<Transform>,
}

/// Static, non-interactive rendering of the image with its last saved transform.
#[function_component(CropPreview)]
pub fn crop_preview(props: &CropPreviewProps) -> Html {
    let Some(layers) = DisplayLayers::for_saved(&props.image_src, props.saved_transform) else {
        return html! {};
    };
    html! {<>
        if layers.backdrop {
            <img src={props.image_src.clone()} alt="" aria-hidden="true" draggable="false"
                style="position:absolute; inset:0; width:100%; height:100%; object-fit:cover; filter:blur(24px) brightness(0.5); transform:scale(1.15); pointer-events:none;" />
        }
        <img src={props.image_src.clone()} alt="" draggable="false" style={layers.image_style()} />
        if layers.hint {
            <div style="position:absolute; left:50%; bottom:16px; transform:translateX(-50%); background:rgba(0,0,0,0.6); color:#fff; font-size:13px; padding:6px 12px; border-radius:16px; pointer-events:none; white-space:nowrap;">
                {"Tap to adjust"}
            </div>
        }
    </>}
}
