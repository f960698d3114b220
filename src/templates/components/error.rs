use maud::{html, Markup};

/// Inline message for a section that could not be loaded or a rejected form.
pub fn inline_error(message: &str) -> Markup {
    html! {
        p class="inline-error" role="alert" { (message) }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        p class="muted" { (message) }
    }
}
