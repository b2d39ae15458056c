use client_core::ClientSettings;

use super::{form_from_json, page_root, render, Format};
use views::tree::Element;

#[test]
fn answers_file_accepts_text_and_scalars() {
    let form = form_from_json(r#"{"q1": "2", "q2": 3, "q3": null, "q4": true}"#).unwrap();
    assert_eq!(form.value("q1"), Some("2"));
    assert_eq!(form.value("q2"), Some("3"));
    assert_eq!(form.value("q3"), None);
    assert_eq!(form.value("q4"), Some("true"));
}

#[test]
fn answers_file_must_be_an_object() {
    assert!(form_from_json(r#"["q1", "2"]"#).is_err());
    assert!(form_from_json(r#"{"q1": ["2"]}"#).is_err());
    assert!(form_from_json("not json").is_err());
}

#[test]
fn page_root_uses_configured_host() {
    let settings = ClientSettings::default();
    assert_eq!(page_root(&settings).unwrap().as_str(), "http://localhost/");

    let settings = ClientSettings::default().with_page_host(Some("careers.example.org".into()));
    assert_eq!(
        page_root(&settings).unwrap().as_str(),
        "http://careers.example.org/"
    );

    let settings = ClientSettings::default().with_page_host(Some("::1".into()));
    assert_eq!(page_root(&settings).unwrap().as_str(), "http://[::1]/");

    let settings = ClientSettings::default().with_page_host(Some("[::1]".into()));
    assert_eq!(page_root(&settings).unwrap().as_str(), "http://[::1]/");
}

#[test]
fn render_wraps_html_in_a_page() {
    let body = Element::new("p").text("hello").into();
    let html = render(Format::Html, "Title", body);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<p>hello</p>"));

    let body = Element::new("p").text("hello").into();
    assert_eq!(render(Format::Text, "Title", body), "hello\n");
}
