use crate::templates::{components::empty_state, desktop_layout};
use maud::{html, Markup};

/// Sign-in is handled entirely by the hosted identity provider page.
pub fn login_page(auth_url: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                @match auth_url {
                    Some(url) => {
                        p class="lead" {
                            "Sign in with your Google account to save time on your next search."
                        }
                        a href=(url) class="button primary" { "Continue with Google" }
                    },
                    None => (empty_state("Sign-in is not available right now.")),
                }
            }
        },
    )
}
