use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Picture, title and a short facts line, linking to `href`.
pub fn listing_card(href: &str, picture_url: Option<&str>, title: &str, body: Markup) -> Markup {
    html! {
        article class="listing-card" {
            @if let Some(src) = picture_url {
                img src=(src) alt=(title) loading="lazy";
            } @else {
                div class="listing-card-placeholder" {}
            }
            div class="listing-card-body" {
                h3 { a href=(href) { (title) } }
                (body)
            }
        }
    }
}
