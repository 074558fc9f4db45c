use super::super::Model;
use super::super::Msg;
use super::utils::{open_picker, originates_from};
use crate::config;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(Msg::NativeChange);

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    // The picker's own click bubbles up here, so ignore it. The picker is
    // opened synchronously, while the user gesture is still active.
    let handle_area_click = {
        let file_input = model.file_input.clone();
        Callback::from(move |e: MouseEvent| {
            if !originates_from(&e, &file_input) {
                open_picker(&file_input);
            }
        })
    };

    html! {
        <div class="upload-section">
            <label>{"Lesion Image"}</label>
            <div
                id="uploadArea"
                class={classes!("upload-area", model.drop_zone.is_active().then_some("dragover"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={handle_area_click}
            >
                <input
                    type="file"
                    id="image"
                    name={config::IMAGE_FIELD}
                    accept="image/*"
                    style="display: none;"
                    ref={model.file_input.clone()}
                    onchange={handle_change}
                />
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop an image here, or click to browse"}</p>
                    <p class="file-types">{"Supported formats: JPG, PNG, WEBP, GIF"}</p>
                </div>
            </div>
        </div>
    }
}
