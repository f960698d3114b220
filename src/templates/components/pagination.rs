use crate::domain::pagination::{page_links, PageLink};
use maud::{html, Markup};
use url::form_urlencoded;

/// Where page links point: `path` plus the query pairs to carry over, with
/// `param` set to the target page.
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    pub path: &'a str,
    pub keep: Vec<(&'a str, String)>,
    pub param: &'a str,
    pub current: usize,
    pub total: usize,
}

impl Pager<'_> {
    pub fn href(&self, page: usize) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.keep {
            query.append_pair(k, v);
        }
        query.append_pair(self.param, &page.to_string());
        format!("{}?{}", self.path, query.finish())
    }
}

/// Prev / numbered / Next buttons plus a "go to page" box.
/// Nothing is rendered for a single page.
pub fn pagination_nav(pager: &Pager) -> Markup {
    if pager.total <= 1 {
        return html! {};
    }

    html! {
        nav class="pagination" aria-label="Pagination" {
            @for link in page_links(pager.current, pager.total) {
                @match link {
                    PageLink::Prev(Some(p)) => a class="page-link" href=(pager.href(p)) { "Prev" },
                    PageLink::Prev(None) => span class="page-link disabled" { "Prev" },
                    PageLink::Page(p) => a class="page-link" href=(pager.href(p)) { (p) },
                    PageLink::Current(p) => span class="page-link current" aria-current="page" { (p) },
                    PageLink::Gap => span class="page-gap" { "…" },
                    PageLink::Next(Some(p)) => a class="page-link" href=(pager.href(p)) { "Next" },
                    PageLink::Next(None) => span class="page-link disabled" { "Next" },
                }
            }

            form method="get" action=(pager.path) class="page-jump" {
                @for (k, v) in &pager.keep {
                    input type="hidden" name=(*k) value=(v.as_str());
                }
                label for=(format!("{}-jump", pager.param)) { "Go to page" }
                input
                    type="number"
                    id=(format!("{}-jump", pager.param))
                    name=(pager.param)
                    min="1"
                    max=(pager.total)
                    required;
                button type="submit" { "Go" }
            }
        }
    }
}
