use super::super::Model;
use crate::state::SelectedImage;
use yew::prelude::*;

/// What the preview box shows for a selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub src: String,
    pub caption: String,
    pub title: String,
}

impl PreviewView {
    pub fn of<F>(image: &SelectedImage<F>) -> Self {
        Self {
            src: image.preview_data_url.clone(),
            caption: image.name.clone(),
            title: image.media_type.clone(),
        }
    }
}

pub fn render_preview_area(model: &Model) -> Html {
    match model.upload.state().selected().map(PreviewView::of) {
        Some(preview) => html! {
            <div id="imagePreview" class="image-preview" style="display: block;">
                <img src={preview.src} alt="Preview" title={preview.title} />
                <div class="image-name">{ preview.caption }</div>
            </div>
        },
        None if model.upload.is_reading() => html! {
            <div id="imagePreview" class="image-preview loading-preview">
                <i class="fa-solid fa-spinner fa-spin"></i>
                <p>{"Loading preview..."}</p>
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shows_data_url_and_file_name() {
        let image = SelectedImage {
            file: (),
            name: "left-forearm.png".to_string(),
            media_type: "image/png".to_string(),
            preview_data_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        };

        let preview = PreviewView::of(&image);
        assert_eq!(preview.src, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(preview.caption, "left-forearm.png");
        assert_eq!(preview.title, "image/png");
    }
}
