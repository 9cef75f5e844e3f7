#![allow(missing_docs)]

pub(crate) mod fake_backend;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_backend::{
    FAKE_TRANSACTION_DATE, FakeBackend, silent_api_config, unreachable_api_config,
};
pub(crate) use form::{
    assert_form_input_with_value, assert_form_submit_button_with_text, assert_hx_endpoint,
    assert_selected_option, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, must_get_text, must_select_all_text, parse_html_document,
    parse_html_fragment,
};
pub(crate) use http::assert_content_type;
