use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-microscope"></i> {" Skin Lesion Analysis"}</h1>
            <p class="subtitle">{"Upload a photo of the lesion and tell us a little about the patient"}</p>
        </header>
    }
}
