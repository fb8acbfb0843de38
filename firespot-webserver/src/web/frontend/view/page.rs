use maud::{html, Markup, DOCTYPE};

use super::leaflet_css_link;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
                (leaflet_css_link())
            }
            body {
                (content)
            }
        }
    }
}
