use convoscrape::{extract, extract_with_options, process, Options, Role};

#[test]
fn user_only_output_contains_no_assistant_content() {
    let html = r#"<html><body>
        <div data-message-author-role="user">compare these two laptops for me</div>
        <div data-message-author-role="assistant">The first has a better screen, the second better battery.</div>
        <div data-message-author-role="user">which one for travel?</div>
    </body></html>"#;
    let doc = extract(html, "https://chatgpt.com/c/p1").unwrap();

    let out = process(&doc, &Options::default());
    for turn in doc.turns.iter().filter(|t| t.role == Role::Assistant) {
        assert!(
            !out.contains(&turn.content),
            "assistant content leaked: {}",
            turn.content
        );
    }
    assert!(out.contains("User: compare these two laptops"));
    assert!(out.contains("User: which one for travel?"));
}

#[test]
fn include_assistant_renders_full_conversation() {
    let html = r#"<html><body>
        <div data-message-author-role="user">name three rivers</div>
        <div data-message-author-role="assistant">Nile, Amazon, Danube.</div>
    </body></html>"#;
    let doc = extract(html, "https://chatgpt.com/c/p2").unwrap();

    let options = Options {
        include_assistant: true,
        ..Options::default()
    };
    let out = process(&doc, &options);
    assert_eq!(out, "User: name three rivers\n\nAssistant: Nile, Amazon, Danube.");
}

#[test]
fn fallback_text_goes_through_block_filter() {
    // A page the chatgpt adapter cannot structure: turns are empty and
    // raw_text is the whole page, so the processor's own cascade is the
    // only thing standing between assistant prose and the summarizer.
    let html = r#"<html><body><article>
        <p>Fix this bug in my script</p>
        <p>Here is the corrected version with comments explaining each change.</p>
    </article></body></html>"#;
    let doc = extract(html, "https://chatgpt.com/share/p3").unwrap();
    assert!(doc.turns.is_empty());

    let out = process(&doc, &Options::default());
    assert!(out.contains("User: Fix this bug in my script"));
    assert!(!out.contains("corrected version"));
}

#[test]
fn fallback_with_assistant_included_returns_raw_text_unmodified() {
    let html = r#"<html><body><article>
        <p>Anything whatsoever on the page stays in.</p>
    </article></body></html>"#;
    let doc = extract(html, "https://chatgpt.com/share/p4").unwrap();
    assert!(doc.turns.is_empty());

    let options = Options {
        include_assistant: true,
        ..Options::default()
    };
    assert_eq!(process(&doc, &options), doc.raw_text);
}

#[test]
fn degenerate_diagnostic_turn_flows_through_processor() {
    let html = "<html><body><p>.</p></body></html>";
    let options = Options::default();
    let doc = extract_with_options(html, "https://nowhere.example/x", &options).unwrap();

    assert_eq!(doc.turns.len(), 1);
    let out = process(&doc, &options);
    assert!(out.starts_with("User: No readable conversation content"));
}
