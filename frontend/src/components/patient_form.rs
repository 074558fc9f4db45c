use super::super::Model;
use super::super::Msg;
use crate::state::SubmitControls;
use shared::{Location, Sex};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn render_patient_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let details = &model.details;

    let handle_age = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetAge(input.value())
    });

    let handle_sex = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetSex(Sex::from_token(&select.value()))
    });

    let handle_localization = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetLocalization(Location::from_token(&select.value()))
    });

    html! {
        <div class="patient-details">
            <div class="form-group">
                <label for="age">{"Age"}</label>
                <input
                    type="number"
                    id="age"
                    name="age"
                    min="0"
                    max="120"
                    required=true
                    value={details.age.clone()}
                    oninput={handle_age}
                />
            </div>
            <div class="form-group">
                <label for="sex">{"Sex"}</label>
                <select id="sex" name="sex" required=true onchange={handle_sex}>
                    <option value="" disabled=true selected={details.sex.is_none()}>{"Select sex"}</option>
                    { for Sex::all().map(|sex| html! {
                        <option value={sex.token()} selected={details.sex == Some(sex)}>{ sex.to_string() }</option>
                    })}
                </select>
            </div>
            <div class="form-group">
                <label for="localization">{"Location"}</label>
                <select id="localization" name="localization" required=true onchange={handle_localization}>
                    <option value="" disabled=true selected={details.localization.is_none()}>{"Select location"}</option>
                    { for Location::all().map(|location| html! {
                        <option value={location.token()} selected={details.localization == Some(location)}>
                            { location.label() }
                        </option>
                    })}
                </select>
            </div>
        </div>
    }
}

pub fn render_submit_button(model: &Model) -> Html {
    let controls = SubmitControls::for_state(model.submission);

    html! {
        <button type="submit" class="submit-btn" disabled={controls.disabled}>
            <span class="btn-text">{ controls.label }</span>
            <span
                class="loading-spinner"
                style={if controls.show_spinner { "display: block;" } else { "display: none;" }}
            >
                <i class="fa-solid fa-spinner fa-spin"></i>
            </span>
        </button>
    }
}
