use maud::{html, Markup, PreEscaped};

use firespot_boundary as json;
use firespot_core::{
    entities::{map::ZoomLevel, session::SessionState},
    usecases,
};

mod page;

use page::*;

const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.css";
const LEAFLET_CSS_SHA512: &str="sha512-puBpdR0798OZvTTbP4A8Ix/l+A4dHDD0DGqYW6RQ+9jxkRFclaxxQb/SJAWZfWAkuyeQUytO7+7N4QKrDh+drA==";
const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.js";
const LEAFLET_JS_SHA512 : &str="sha512-QVftwZFqvtRNi0ZyCtsznlKSWOStnDORoefr1enyq5mVL4tmKB3S/EnC3rRJcxCPavG10IcrVGSmPh6Qw5lwrg==";
const MAP_JS_URL: &str = "/map.js";

pub fn index(state: &SessionState, status: Option<(&str, &str)>) -> Markup {
    page(
        "Firespot",
        html! {
            main {
                h1 { "Fire location" }
                @if let Some((kind, message)) = status {
                    div class=(format!("flash {kind}")) id="status" { (message) }
                } @else {
                    div class="flash" id="status" {}
                }
                (geocode_form(state))
                form class="commit" action="/commit" method="POST" {
                    input class="btn" type="submit" value="Set fire location";
                }
                p id="last-click" { (state.last_click_text) }
                div id="map" {}
            }
            (map_scripts(state))
        },
    )
}

fn geocode_form(state: &SessionState) -> Markup {
    let current_zoom = state.zoom_level.get();
    html! {
        form class="geocode" action="/geocode" method="POST" {
            input
                type="text"
                name="address"
                value=(state.address_label)
                size=(50)
                maxlength=(200)
                placeholder="Address of the fire";
            select name="zoom" {
                @for zoom in ZoomLevel::MIN.get()..=ZoomLevel::MAX.get() {
                    option value=(zoom) selected[zoom == current_zoom] { (zoom) }
                }
            }
            input class="btn" type="submit" value="Go";
        }
    }
}

fn map_scripts(state: &SessionState) -> Markup {
    let view = json::MapView::from(usecases::render_map(state));
    // The view is embedded into a script element and must not close it.
    let view = serde_json::to_string(&view)
        .unwrap_or_else(|_| "null".to_owned())
        .replace("</", "<\\/");
    html! {
      script {
        (PreEscaped(format!("window.FIRESPOT_MAP_VIEW={view};")))
      }
      script
        src=(LEAFLET_JS_URL)
        integrity=(LEAFLET_JS_SHA512)
        crossorigin="anonymous" {}
      script src=(MAP_JS_URL){}
    }
}

fn leaflet_css_link() -> Markup {
    html! {
            link
                rel="stylesheet"
                href=(LEAFLET_CSS_URL)
                integrity=(LEAFLET_CSS_SHA512)
                crossorigin="anonymous";
    }
}
