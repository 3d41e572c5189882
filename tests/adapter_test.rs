use convoscrape::{extract, Role};

#[test]
fn claude_mixed_markers_interleave_in_document_order() {
    let html = r#"<html><head><title>Packing list | Claude</title></head><body>
        <div data-testid="user-message">make me a packing list for Norway</div>
        <div class="font-claude-message prose">Here is a packing list.</div>
        <div data-testid="user-message">add camera gear</div>
    </body></html>"#;
    let doc = extract(html, "https://claude.ai/chat/9").unwrap();

    assert_eq!(doc.platform_id, "claude");
    assert_eq!(doc.title, "Packing list");
    let roles: Vec<Role> = doc.turns.iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
}

#[test]
fn chatgpt_parity_fallback_assigns_roles_by_position() {
    // Shared view: no author-role attributes, only conversation-turn ids.
    let html = r#"<html><body>
        <div data-testid="conversation-turn-1">what is a borrow checker</div>
        <div data-testid="conversation-turn-2">It enforces ownership rules.</div>
        <div data-testid="conversation-turn-3">thanks, show an example</div>
    </body></html>"#;
    let doc = extract(html, "https://chatgpt.com/share/e/1").unwrap();

    assert_eq!(doc.turns.len(), 3);
    assert_eq!(doc.turns[0].role, Role::User);
    assert_eq!(doc.turns[1].role, Role::Assistant);
    assert_eq!(doc.turns[2].role, Role::User);
}

#[test]
fn copilot_data_content_markers_tag_roles() {
    let html = r#"<html><body>
        <div data-content="user-message">outline a blog post about tide pools</div>
        <div data-content="ai-message">Sure, here is an outline.</div>
    </body></html>"#;
    let doc = extract(html, "https://copilot.microsoft.com/chats/2").unwrap();

    assert_eq!(doc.platform_id, "copilot");
    assert_eq!(doc.turns[0].role, Role::User);
    assert_eq!(doc.turns[1].role, Role::Assistant);
}

#[test]
fn perplexity_query_and_prose_classes_map_to_roles() {
    let html = r#"<html><body>
        <h1 class="query">best sourdough starter ratio</h1>
        <div class="prose">A common ratio is 1:1:1.</div>
    </body></html>"#;
    let doc = extract(html, "https://www.perplexity.ai/search/3").unwrap();

    assert_eq!(doc.platform_id, "perplexity");
    assert_eq!(doc.turns[0].role, Role::User);
    assert_eq!(doc.turns[1].role, Role::Assistant);
}

#[test]
fn poe_side_classes_distinguish_roles() {
    let html = r#"<html><body>
        <div class="ChatMessage_messageRow__x1 ChatMessage_rightSideMessageRow__y2">draft an apology email</div>
        <div class="ChatMessage_messageRow__x1">Here is a draft.</div>
    </body></html>"#;
    let doc = extract(html, "https://poe.com/chat/4").unwrap();

    assert_eq!(doc.platform_id, "poe");
    assert_eq!(doc.turns[0].role, Role::User);
    assert_eq!(doc.turns[1].role, Role::Assistant);
}

#[test]
fn deepseek_shotgun_emits_largest_block_verbatim_as_user() {
    let html = r#"<html><body><main>
        <div class="sidebar-x">New chat</div>
        <div class="t_a9f3">how do I pickle a dataframe
It depends on the library you use.</div>
    </main></body></html>"#;
    let doc = extract(html, "https://chat.deepseek.com/a/5").unwrap();

    assert_eq!(doc.platform_id, "deepseek");
    assert_eq!(doc.turns.len(), 1);
    assert_eq!(doc.turns[0].role, Role::User);
    // Shotgun keeps everything, including what is probably assistant text.
    assert!(doc.turns[0].content.contains("how do I pickle"));
    assert!(doc.turns[0].content.contains("It depends"));
}

#[test]
fn duplicated_nodes_from_re_renders_collapse() {
    let html = r#"<html><body>
        <div data-message-author-role="user">ping</div>
        <div data-message-author-role="user">ping</div>
        <div data-message-author-role="assistant">pong</div>
    </body></html>"#;
    let doc = extract(html, "https://chatgpt.com/c/6").unwrap();

    assert_eq!(doc.turns.len(), 2);
    assert_eq!(doc.turns[0].content, "ping");
    assert_eq!(doc.turns[1].content, "pong");
}

#[test]
fn grok_message_bubbles_use_parity() {
    let html = r#"<html><body>
        <div class="message-bubble">why is the build slow</div>
        <div class="message-bubble">Several crates recompile every time.</div>
    </body></html>"#;
    let doc = extract(html, "https://grok.com/chat/7").unwrap();

    assert_eq!(doc.platform_id, "grok");
    assert_eq!(doc.turns[0].role, Role::User);
    assert_eq!(doc.turns[1].role, Role::Assistant);
}
