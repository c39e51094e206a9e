//! Browser persistence for the host container.
//!
//! Saved transforms are kept in localStorage as one JSON object keyed by image
//! source, so reopening the page shows each image the way it was last framed.

use std::collections::BTreeMap;

use crate::error::EditorError;
use crate::model::Transform;

const STORAGE_KEY: &str = "ic_saved_transforms";
const LAST_IMAGE_KEY: &str = "ic_last_image";

pub type SavedTransforms = BTreeMap<String, Transform>;

pub fn decode(raw: &str) -> Result<SavedTransforms, EditorError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode(saved: &SavedTransforms) -> Result<String, EditorError> {
    Ok(serde_json::to_string(saved)?)
}

fn local_storage() -> Result<web_sys::Storage, EditorError> {
    let window = web_sys::window().ok_or(EditorError::NoWindow)?;
    window
        .local_storage()?
        .ok_or(EditorError::StorageUnavailable)
}

fn load_all() -> Result<SavedTransforms, EditorError> {
    match local_storage()?.get_item(STORAGE_KEY)? {
        Some(raw) => decode(&raw),
        None => Ok(SavedTransforms::new()),
    }
}

/// Transform last saved for `image_src`, if any.
pub fn load_transform(image_src: &str) -> Result<Option<Transform>, EditorError> {
    Ok(load_all()?.get(image_src).copied())
}

/// Remember `transform` for `image_src`, or forget the image when `None`.
pub fn store_transform(image_src: &str, transform: Option<Transform>) -> Result<(), EditorError> {
    let mut all = match load_all() {
        Ok(all) => all,
        Err(EditorError::Serialize(e)) => {
            log::warn!("Discarding unreadable saved transforms: {}", e);
            SavedTransforms::new()
        }
        Err(e) => return Err(e),
    };
    match transform {
        Some(t) => {
            all.insert(image_src.to_string(), t);
        }
        None => {
            all.remove(image_src);
        }
    }
    local_storage()?.set_item(STORAGE_KEY, &encode(&all)?)?;
    Ok(())
}

pub fn load_last_image() -> Result<Option<String>, EditorError> {
    Ok(local_storage()?.get_item(LAST_IMAGE_KEY)?)
}

pub fn store_last_image(image_src: &str) -> Result<(), EditorError> {
    local_storage()?.set_item(LAST_IMAGE_KEY, image_src)?;
    Ok(())
}
