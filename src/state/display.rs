// What the non-interactive preview draws for a given saved transform.
use crate::model::Transform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFit {
    /// Whole image visible, letterboxed if needed.
    Contain,
    /// Fills the viewport, overflow cropped.
    Cover,
}

impl ImageFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ImageFit::Contain => "contain",
            ImageFit::Cover => "cover",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayLayers {
    /// Blurred, darkened full-bleed copy behind the image so letterbox bars aren't empty.
    pub backdrop: bool,
    pub hint: bool,
    pub fit: ImageFit,
    pub transform: Transform,
}

impl DisplayLayers {
    /// Layers for the preview; `None` when there is no image to draw.
    pub fn for_saved(image_src: &str, saved: Option<Transform>) -> Option<Self> {
        if image_src.is_empty() {
            return None;
        }
        Some(match saved {
            None => Self {
                backdrop: true,
                hint: true,
                fit: ImageFit::Contain,
                transform: Transform::IDENTITY,
            },
            Some(transform) => Self {
                backdrop: false,
                hint: false,
                fit: ImageFit::Cover,
                transform,
            },
        })
    }

    pub fn image_style(&self) -> String {
        format!(
            "position:absolute; inset:0; width:100%; height:100%; object-fit:{}; transform:{}; transform-origin:center center; user-select:none; pointer-events:none;",
            self.fit.as_css(),
            self.transform.to_css()
        )
    }
}
