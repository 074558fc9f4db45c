use super::super::Model;
use super::super::Msg;
use crate::session::{Session, Theme};
use yew::html::Scope;
use yew::prelude::*;

pub fn render_theme_toggle(session: &Session, link: &Scope<Model>) -> Html {
    let (title, icon) = match session.theme {
        Theme::Light => ("Switch to Dark Mode", "fa-solid fa-moon"),
        Theme::Dark => ("Switch to Light Mode", "fa-solid fa-sun"),
    };

    html! {
        <button
            id="darkModeToggle"
            class="theme-toggle"
            type="button"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            {title}
        >
            <i class={icon}></i>
        </button>
    }
}
