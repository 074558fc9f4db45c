use super::super::{Model, Msg};
use shared::PredictionResult;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("response contained no predictions")]
    NoPrediction,
}

/// Display projection of a response. Only the top-ranked prediction is
/// shown. Every string here came from the server and is rendered as a
/// text node, never as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub diagnosis: String,
    pub risk_label: String,
    pub risk_class: String,
    pub inputs_summary: String,
    pub fill_percent: f64,
    pub percent_label: String,
    pub probability_anomaly: Option<f64>,
    pub description: String,
    pub treatments: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ResultView {
    pub fn project(result: &PredictionResult) -> Result<Self, ResultError> {
        let main = result.top_prediction().ok_or(ResultError::NoPrediction)?;
        let inputs = &result.user_inputs;
        let probability = main.probability;
        let fill_percent = probability.percent();

        Ok(Self {
            diagnosis: main.diagnosis.clone(),
            risk_label: format!("{} Risk", main.risk_level.label()),
            risk_class: main.risk_level.css_class(),
            inputs_summary: format!(
                "Age: {} | Sex: {} | Location: {}",
                inputs.age, inputs.sex, inputs.localization
            ),
            fill_percent,
            percent_label: format!("{}%", fill_percent.round() as u32),
            probability_anomaly: probability.is_anomalous().then(|| probability.value()),
            description: main.description.clone(),
            treatments: main.treatments.clone(),
            recommendations: result.recommendations.clone(),
        })
    }

    pub fn fill_style(&self) -> String {
        format!("width: {}%", self.fill_percent)
    }
}

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.result_visible {
        return html! {};
    }

    let Some(view) = model.result.as_ref() else {
        return html! {};
    };

    html! {
        <div id="resultModal" class="modal" style="display: block;">
            <div class="modal-content">
                <button
                    class="close-modal"
                    type="button"
                    title="Close"
                    onclick={ctx.link().callback(|_| Msg::CloseResult)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
                <h2>{"Analysis Results"}</h2>
                <div class="diagnosis-type">
                    <h4>{ &view.diagnosis }</h4>
                    <p class={classes!("risk-level", view.risk_class.clone())}>{ &view.risk_label }</p>
                    <p class="user-inputs">{ &view.inputs_summary }</p>
                </div>
                <div class="probability-bar">
                    <div class="progress" style={view.fill_style()}>{ &view.percent_label }</div>
                </div>
                <div class="analysis-content">
                    <p>{ &view.description }</p>
                    <h4>{"Possible Treatments:"}</h4>
                    <ul>
                        { for view.treatments.iter().map(|treatment| html! { <li>{ treatment }</li> }) }
                    </ul>
                </div>
                <div class="recommendations">
                    <h4>{"Recommendations"}</h4>
                    <ul class="recommendations-list">
                        { for view.recommendations.iter().map(|rec| html! { <li>{ rec }</li> }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}
