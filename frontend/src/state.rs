use crate::config;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{}", config::INVALID_FILE_MESSAGE)]
    NotAnImage,
}

pub fn validate_media_type(media_type: &str) -> Result<(), UploadError> {
    if media_type.starts_with("image/") {
        Ok(())
    } else {
        Err(UploadError::NotAnImage)
    }
}

/// An accepted image together with its rendered preview.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage<F> {
    pub file: F,
    pub name: String,
    pub media_type: String,
    pub preview_data_url: String,
}

/// A selection is only stored once its preview exists, so a preview
/// never outlives or precedes its file.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState<F> {
    Empty,
    Ready(SelectedImage<F>),
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        UploadState::Empty
    }
}

impl<F> UploadState<F> {
    pub fn selected(&self) -> Option<&SelectedImage<F>> {
        match self {
            UploadState::Empty => None,
            UploadState::Ready(image) => Some(image),
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.selected().map(|image| &image.file)
    }
}

/// Identifies one asynchronous file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// Owns the upload state and the bookkeeping for in-flight preview reads.
#[derive(Debug)]
pub struct Uploader<F> {
    state: UploadState<F>,
    pending: Option<ReadTicket>,
    issued: u64,
}

impl<F> Default for Uploader<F> {
    fn default() -> Self {
        Self {
            state: UploadState::Empty,
            pending: None,
            issued: 0,
        }
    }
}

impl<F> Uploader<F> {
    pub fn state(&self) -> &UploadState<F> {
        &self.state
    }

    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Validates a new selection and hands out the ticket for its read.
    /// A rejected selection leaves everything as it was.
    pub fn accept(&mut self, media_type: &str) -> Result<ReadTicket, UploadError> {
        validate_media_type(media_type)?;
        self.issued += 1;
        let ticket = ReadTicket(self.issued);
        self.pending = Some(ticket);
        Ok(ticket)
    }

    /// Replaces the whole state with `image`, unless a newer selection has
    /// superseded this read. Returns whether anything changed.
    pub fn complete(&mut self, ticket: ReadTicket, image: SelectedImage<F>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = None;
        self.state = UploadState::Ready(image);
        true
    }

    pub fn abandon(&mut self, ticket: ReadTicket) {
        if self.is_current(ticket) {
            self.pending = None;
        }
    }
}

/// Highlight of the drop zone while something is dragged over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropZone {
    active: bool,
}

impl DropZone {
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Returns whether the highlight changed.
    pub fn hover(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    /// Clears the highlight and yields the first dropped file, if any.
    pub fn receive<F>(&mut self, files: impl IntoIterator<Item = F>) -> Option<F> {
        self.active = false;
        files.into_iter().next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    Succeed,
    Fail,
    Settle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot apply {event:?} while {from:?}")]
pub struct TransitionError {
    pub from: SubmissionState,
    pub event: SubmissionEvent,
}

impl SubmissionState {
    pub fn on(self, event: SubmissionEvent) -> Result<Self, TransitionError> {
        use SubmissionEvent::*;
        use SubmissionState::*;

        match (self, event) {
            (Idle, Submit) => Ok(Submitting),
            (Submitting, Succeed) => Ok(Succeeded),
            (Submitting, Fail) => Ok(Failed),
            (Succeeded | Failed, Settle) => Ok(Idle),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    /// Records the outcome of a cycle and returns to `Idle`. Always ends
    /// idle so the form can never stay locked.
    pub fn conclude(self, succeeded: bool) -> Self {
        let outcome = if succeeded {
            SubmissionEvent::Succeed
        } else {
            SubmissionEvent::Fail
        };

        self.on(outcome)
            .and_then(|state| state.on(SubmissionEvent::Settle))
            .unwrap_or_else(|error| {
                log::warn!("Submission state out of sync: {}", error);
                SubmissionState::Idle
            })
    }

    pub fn is_busy(self) -> bool {
        self == SubmissionState::Submitting
    }
}

/// What the submit button and busy indicator show for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControls {
    pub disabled: bool,
    pub label: &'static str,
    pub show_spinner: bool,
}

impl SubmitControls {
    pub fn for_state(state: SubmissionState) -> Self {
        if state.is_busy() {
            Self {
                disabled: true,
                label: config::SUBMITTING_LABEL,
                show_spinner: true,
            }
        } else {
            Self {
                disabled: false,
                label: config::SUBMIT_LABEL,
                show_spinner: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage<&'static str> {
        SelectedImage {
            file: "blob",
            name: name.to_string(),
            media_type: "image/png".to_string(),
            preview_data_url: format!("data:image/png;base64,{}", name),
        }
    }

    #[test]
    fn only_image_media_types_pass() {
        assert!(validate_media_type("image/png").is_ok());
        assert!(validate_media_type("image/jpeg").is_ok());
        assert_eq!(
            validate_media_type("application/pdf"),
            Err(UploadError::NotAnImage)
        );
        assert!(validate_media_type("").is_err());
        assert!(validate_media_type("text/image").is_err());
    }

    #[test]
    fn rejection_message_is_user_facing() {
        let error = validate_media_type("text/plain").unwrap_err();
        assert_eq!(error.to_string(), "Please upload an image file");
    }

    #[test]
    fn preview_exists_only_after_read_completes() {
        let mut uploader = Uploader::default();
        let ticket = uploader.accept("image/png").unwrap();
        assert!(uploader.is_reading());
        assert!(uploader.state().selected().is_none());
        assert_eq!(uploader.state().file(), None);

        assert!(uploader.complete(ticket, image("mole.png")));
        let selected = uploader.state().selected().unwrap();
        assert_eq!(selected.name, "mole.png");
        assert_eq!(selected.preview_data_url, "data:image/png;base64,mole.png");
        assert_eq!(uploader.state().file(), Some(&"blob"));
        assert!(!uploader.is_reading());
    }

    #[test]
    fn invalid_reselection_keeps_prior_selection() {
        let mut uploader = Uploader::default();
        let ticket = uploader.accept("image/jpeg").unwrap();
        uploader.complete(ticket, image("first.jpg"));
        let before = uploader.state().clone();

        for media_type in ["application/pdf", "text/plain", "video/mp4", ""] {
            assert!(uploader.accept(media_type).is_err());
            assert_eq!(uploader.state(), &before);
            assert!(!uploader.is_reading());
        }
    }

    #[test]
    fn new_selection_replaces_prior_state() {
        let mut uploader = Uploader::default();
        let first = uploader.accept("image/jpeg").unwrap();
        uploader.complete(first, image("first.jpg"));
        let second = uploader.accept("image/png").unwrap();
        uploader.complete(second, image("second.png"));

        let selected = uploader.state().selected().unwrap();
        assert_eq!(selected.name, "second.png");
        assert_eq!(selected.preview_data_url, "data:image/png;base64,second.png");
    }

    #[test]
    fn superseded_read_is_discarded() {
        let mut uploader = Uploader::default();
        let stale = uploader.accept("image/png").unwrap();
        let fresh = uploader.accept("image/png").unwrap();

        assert!(!uploader.complete(stale, image("stale.png")));
        assert_eq!(uploader.state(), &UploadState::Empty);

        assert!(uploader.complete(fresh, image("fresh.png")));
        assert_eq!(uploader.state().selected().unwrap().name, "fresh.png");
    }

    #[test]
    fn failed_read_clears_only_its_own_ticket() {
        let mut uploader: Uploader<&str> = Uploader::default();
        let stale = uploader.accept("image/png").unwrap();
        let fresh = uploader.accept("image/png").unwrap();

        uploader.abandon(stale);
        assert!(uploader.is_current(fresh));

        uploader.abandon(fresh);
        assert!(!uploader.is_reading());
        assert_eq!(uploader.state(), &UploadState::Empty);
    }

    #[test]
    fn dropping_nothing_only_clears_the_highlight() {
        let mut uploader = Uploader::default();
        let ticket = uploader.accept("image/png").unwrap();
        uploader.complete(ticket, image("kept.png"));
        let before = uploader.state().clone();

        let mut zone = DropZone::default();
        assert!(zone.hover(true));
        assert!(!zone.hover(true));
        assert!(zone.is_active());

        let dropped: Option<&str> = zone.receive(Vec::new());
        assert_eq!(dropped, None);
        assert!(!zone.is_active());
        assert_eq!(uploader.state(), &before);
        assert!(!uploader.is_reading());
    }

    #[test]
    fn drop_takes_the_first_file() {
        let mut zone = DropZone::default();
        zone.hover(true);
        assert_eq!(zone.receive(["a.png", "b.png"]), Some("a.png"));
        assert!(!zone.is_active());
    }

    #[test]
    fn submission_cycle_transitions() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);

        let state = state.on(SubmissionEvent::Submit).unwrap();
        assert_eq!(state, SubmissionState::Submitting);
        assert_eq!(state.on(SubmissionEvent::Succeed), Ok(SubmissionState::Succeeded));
        assert_eq!(state.on(SubmissionEvent::Fail), Ok(SubmissionState::Failed));
        assert_eq!(
            SubmissionState::Failed.on(SubmissionEvent::Settle),
            Ok(SubmissionState::Idle)
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let state = SubmissionState::Submitting;
        assert_eq!(
            state.on(SubmissionEvent::Submit),
            Err(TransitionError {
                from: SubmissionState::Submitting,
                event: SubmissionEvent::Submit,
            })
        );
    }

    #[test]
    fn outcomes_require_an_active_submission() {
        assert!(SubmissionState::Idle.on(SubmissionEvent::Succeed).is_err());
        assert!(SubmissionState::Idle.on(SubmissionEvent::Settle).is_err());
        assert!(SubmissionState::Succeeded.on(SubmissionEvent::Submit).is_err());
    }

    #[test]
    fn controls_lock_while_submitting_and_restore_after() {
        let idle = SubmitControls::for_state(SubmissionState::Idle);
        assert!(!idle.disabled);
        assert_eq!(idle.label, "Analyze Image");
        assert!(!idle.show_spinner);

        let submitting = SubmissionState::Idle.on(SubmissionEvent::Submit).unwrap();
        let busy = SubmitControls::for_state(submitting);
        assert!(busy.disabled);
        assert_eq!(busy.label, "Analyzing...");
        assert!(busy.show_spinner);

        for succeeded in [true, false] {
            let settled = submitting.conclude(succeeded);
            assert_eq!(settled, SubmissionState::Idle);
            assert_eq!(SubmitControls::for_state(settled), idle);
        }
    }

    #[test]
    fn conclude_recovers_from_unexpected_state() {
        assert_eq!(SubmissionState::Idle.conclude(false), SubmissionState::Idle);
        assert_eq!(SubmissionState::Succeeded.conclude(true), SubmissionState::Idle);
    }
}
