use crate::weather::WeatherReport;
use maud::{html, Markup};

/// htmx fragment swapped into the navbar ticker.
pub fn weather_ticker(reports: &[WeatherReport]) -> Markup {
    html! {
        div class="ticker-track" {
            @for r in reports {
                span class="ticker-item" {
                    strong { (r.city) }
                    " "
                    @if let Some(icon) = &r.icon_url {
                        img src=(icon) alt=(r.description) width="24" height="24";
                    }
                    (r.temp_label()) " " (r.description)
                }
            }
        }
    }
}
