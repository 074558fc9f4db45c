mod api;
mod components;
mod config;
mod session;
mod state;

use api::{PatientDetails, PredictionForm, SubmitError};
use components::handlers;
use components::header::render_header;
use components::patient_form::{render_patient_form, render_submit_button};
use components::preview_area::render_preview_area;
use components::results::{ResultView, render_results};
use components::theme_toggle::render_theme_toggle;
use components::upload_section::render_upload_section;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use session::Session;
use shared::{Location, PredictionResult, Sex};
use state::{DropZone, ReadTicket, SubmissionState, Uploader};
use web_sys::DragEvent;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Upload
    SetDragging(bool),
    HandleDrop(DragEvent),
    NativeChange(Event),
    FileSelected(GlooFile),
    PreviewReady(ReadTicket, GlooFile, Result<String, String>),

    // Patient details
    SetAge(String),
    SetSex(Option<Sex>),
    SetLocalization(Option<Location>),

    // Submission
    Submit(SubmitEvent),
    SubmissionFinished(Result<PredictionResult, SubmitError>),
    CloseResult,

    // UI states
    ToggleTheme,
}

// Main component
pub struct Model {
    session: Session,
    upload: Uploader<GlooFile>,
    reader: Option<FileReader>,
    details: PatientDetails,
    submission: SubmissionState,
    result: Option<ResultView>,
    result_visible: bool,
    drop_zone: DropZone,
    file_input: NodeRef,
    _drag_guards: Vec<EventListener>,
}

impl Model {
    fn prediction_form(&self) -> PredictionForm<GlooFile> {
        PredictionForm {
            details: self.details.clone(),
            image: self.upload.state().file().cloned(),
        }
    }
}

// Stops a file dropped next to the drop zone from replacing the page.
fn window_drag_guards() -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        log::warn!("No window, drag guard not installed");
        return Vec::new();
    };

    ["dragover", "drop"]
        .into_iter()
        .map(|event_type| {
            EventListener::new_with_options(
                &window,
                event_type,
                EventListenerOptions::enable_prevent_default(),
                |event| event.prevent_default(),
            )
        })
        .collect()
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::load(),
            upload: Uploader::default(),
            reader: None,
            details: PatientDetails::default(),
            submission: SubmissionState::Idle,
            result: None,
            result_visible: false,
            drop_zone: DropZone::default(),
            file_input: NodeRef::default(),
            _drag_guards: window_drag_guards(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Upload
            Msg::SetDragging(active) => self.drop_zone.hover(active),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::NativeChange(event) => handlers::handle_native_change(ctx, event),
            Msg::FileSelected(file) => handlers::handle_file_select(self, ctx, file),
            Msg::PreviewReady(ticket, file, outcome) => {
                handlers::handle_preview_ready(self, ticket, file, outcome)
            }

            // Patient details
            Msg::SetAge(age) => {
                self.details.age = age;
                true
            }
            Msg::SetSex(sex) => {
                self.details.sex = sex;
                true
            }
            Msg::SetLocalization(localization) => {
                self.details.localization = localization;
                true
            }

            // Submission
            Msg::Submit(event) => handlers::handle_submit(self, ctx, event),
            Msg::SubmissionFinished(outcome) => handlers::handle_submission_finished(self, outcome),
            Msg::CloseResult => handlers::handle_close_result(self),

            // UI states
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                <div class="top-right">
                    { render_theme_toggle(&self.session, ctx.link()) }
                </div>

                <main class="main-content">
                    <form
                        id="predictionForm"
                        class="prediction-form"
                        onsubmit={ctx.link().callback(Msg::Submit)}
                    >
                        { render_upload_section(self, ctx) }
                        { render_preview_area(self) }
                        { render_patient_form(self, ctx) }
                        { render_submit_button(self) }
                    </form>
                </main>

                { render_results(self, ctx) }

                <footer class="app-footer">
                    <p>{"Screening aid only. Always consult a dermatologist."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
