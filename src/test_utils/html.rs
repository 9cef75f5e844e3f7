use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_fragment(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Get the trimmed text of the first element matching `selector`.
#[track_caller]
pub(crate) fn must_get_text(html: &Html, selector: &str) -> String {
    let parsed_selector = Selector::parse(selector).unwrap();

    html.select(&parsed_selector)
        .next()
        .unwrap_or_else(|| panic!("No element matching {selector:?}"))
        .text()
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Get the trimmed text of every element matching `selector`.
pub(crate) fn must_select_all_text(html: &Html, selector: &str) -> Vec<String> {
    let parsed_selector = Selector::parse(selector).unwrap();

    html.select(&parsed_selector)
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .collect()
}
