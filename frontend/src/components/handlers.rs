use super::super::Model;
use super::super::Msg;
use super::results::ResultView;
use super::utils::notify_user;
use crate::api::{self, SubmitError};
use crate::state::{ReadTicket, SelectedImage, SubmissionEvent, SubmissionState};
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use shared::PredictionResult;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    event.stop_propagation();
    let files = event.data_transfer().and_then(|data_transfer| data_transfer.files());
    let dropped = model.drop_zone.receive(
        files
            .iter()
            .flat_map(|file_list| (0..file_list.length()).filter_map(move |i| file_list.item(i))),
    );

    if let Some(first) = dropped {
        // Keep the native input in step with what was dropped
        if let Some(input) = model.file_input.cast::<HtmlInputElement>() {
            input.set_files(files.as_ref());
        }
        ctx.link().send_message(Msg::FileSelected(GlooFile::from(first)));
    }

    true
}

pub fn handle_native_change(ctx: &Context<Model>, event: Event) -> bool {
    let input: HtmlInputElement = event.target_unchecked_into();
    if let Some(first) = input.files().and_then(|file_list| file_list.item(0)) {
        ctx.link().send_message(Msg::FileSelected(GlooFile::from(first)));
    }
    false
}

pub fn handle_file_select(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let ticket = match model.upload.accept(&file.raw_mime_type()) {
        Ok(ticket) => ticket,
        Err(error) => {
            notify_user(&error.to_string());
            return false;
        }
    };

    let link = ctx.link().clone();
    let selected = file.clone();
    let reader = read_as_data_url(&file, move |outcome| {
        link.send_message(Msg::PreviewReady(
            ticket,
            selected,
            outcome.map_err(|e| e.to_string()),
        ));
    });
    model.reader = Some(reader);

    true
}

pub fn handle_preview_ready(
    model: &mut Model,
    ticket: ReadTicket,
    file: GlooFile,
    outcome: Result<String, String>,
) -> bool {
    if model.upload.is_current(ticket) {
        model.reader = None;
    }

    match outcome {
        Ok(data_url) => {
            let image = SelectedImage {
                name: file.name(),
                media_type: file.raw_mime_type(),
                preview_data_url: data_url,
                file,
            };
            model.upload.complete(ticket, image)
        }
        Err(reason) => {
            log::warn!("Failed to read {}: {}", file.name(), reason);
            model.upload.abandon(ticket);
            true
        }
    }
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>, event: SubmitEvent) -> bool {
    event.prevent_default();

    model.submission = match model.submission.on(SubmissionEvent::Submit) {
        Ok(next) => next,
        Err(e) => {
            log::warn!("Ignoring submit: {}", e);
            return false;
        }
    };

    let form = model.prediction_form();
    log::info!(
        "Submitting {} for analysis",
        form.image
            .as_ref()
            .map(|file| file.name())
            .unwrap_or_else(|| "form without image".to_string())
    );

    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = api::submit_prediction(form).await;
            link.send_message(Msg::SubmissionFinished(outcome));
        }
    });

    true
}

/// Where one finished submission leaves the page.
#[derive(Debug)]
pub struct Settled {
    pub state: SubmissionState,
    pub view: Option<ResultView>,
    pub alert: Option<&'static str>,
    pub failure: Option<SubmitError>,
}

/// Routes a submission outcome. A body without a top prediction counts as
/// malformed. Every path ends back at `Idle`.
pub fn settle(state: SubmissionState, outcome: Result<PredictionResult, SubmitError>) -> Settled {
    let rendered = outcome.and_then(|result| {
        ResultView::project(&result).map_err(|e| SubmitError::Malformed(e.to_string()))
    });

    match rendered {
        Ok(view) => Settled {
            state: state.conclude(true),
            view: Some(view),
            alert: None,
            failure: None,
        },
        Err(error) => Settled {
            state: state.conclude(false),
            view: None,
            alert: Some(error.user_message()),
            failure: Some(error),
        },
    }
}

pub fn handle_submission_finished(
    model: &mut Model,
    outcome: Result<PredictionResult, SubmitError>,
) -> bool {
    let settled = settle(model.submission, outcome);
    model.submission = settled.state;

    if let Some(error) = &settled.failure {
        log::error!("Analysis failed: {}", error);
        gloo_console::error!(error.to_string());
    }
    if let Some(message) = settled.alert {
        notify_user(message);
    }
    if let Some(view) = settled.view {
        if let Some(raw) = view.probability_anomaly {
            log::warn!("Probability {} out of range, displaying {}", raw, view.percent_label);
        }
        log::info!("Analysis complete: {} ({})", view.diagnosis, view.percent_label);
        model.result = Some(view);
        model.result_visible = true;
    }

    true
}

pub fn handle_close_result(model: &mut Model) -> bool {
    let was_visible = model.result_visible;
    model.result_visible = false;
    was_visible
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.session.toggle_theme();
    true
}
