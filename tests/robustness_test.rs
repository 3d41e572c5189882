use convoscrape::{extract, Error};

// The extraction core must never fail for reasons originating in the
// shape of third-party content. These inputs are deliberately hostile.

#[test]
fn malformed_html_degrades_instead_of_failing() {
    let cases = [
        "<div><div><div>unclosed everywhere",
        "<html><body><p>text</p></body></html><html>second document?</html>",
        "<<<>>>&&& not even close to html but long enough to keep",
        "<html><body><script>alert('</body>')</script>page text that is visible</body></html>",
        "<template shadowrootmode=\"open\">orphan shadow template text</template>",
    ];
    for html in cases {
        let doc = extract(html, "https://anything.example/").unwrap();
        assert!(!doc.raw_text.is_empty(), "empty raw_text for {html:?}");
    }
}

#[test]
fn unparseable_url_still_extracts_via_generic_adapter() {
    let doc = extract(
        "<html><body><main><div>please review my resume draft</div></main></body></html>",
        "not a url at all",
    )
    .unwrap();
    assert_eq!(doc.platform_id, "generic");
    assert!(doc.raw_text.contains("resume"));
}

#[test]
fn empty_document_is_the_only_hard_failure() {
    match extract("", "https://chatgpt.com/c/1") {
        Err(Error::HostUnreachable(_)) => {}
        other => panic!("expected HostUnreachable, got {other:?}"),
    }
    match extract("   \n\t  ", "https://chatgpt.com/c/1") {
        Err(Error::HostUnreachable(_)) => {}
        other => panic!("expected HostUnreachable, got {other:?}"),
    }
}

#[test]
fn deeply_nested_markup_is_handled() {
    let mut html = String::from("<html><body>");
    for _ in 0..200 {
        html.push_str("<div>");
    }
    html.push_str("<span data-message-author-role=\"user\">buried request</span>");
    for _ in 0..200 {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");

    let doc = extract(&html, "https://chatgpt.com/c/deep").unwrap();
    assert_eq!(doc.turns.len(), 1);
    assert_eq!(doc.turns[0].content, "buried request");
}

#[test]
fn noise_literals_never_survive_normalization() {
    let html = r#"<html><body>
        <div data-message-author-role="user">Copy code</div>
        <div data-message-author-role="assistant">Regenerate response</div>
        <div data-message-author-role="user">actual question here</div>
    </body></html>"#;
    let doc = extract(html, "https://chatgpt.com/c/n").unwrap();

    assert_eq!(doc.turns.len(), 1);
    for turn in &doc.turns {
        assert_ne!(turn.content, "Copy code");
        assert_ne!(turn.content, "Regenerate response");
    }
}
