use super::*;

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Great save, keeper! ⚽"), "Great save, keeper! ⚽");
}

#[test]
fn escape_html_escapes_existing_entities() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn escape_html_blocks_script_injection() {
    let out = escape_html("<script>alert(1)</script>");
    assert!(!out.contains('<'));
    assert!(!out.contains('>'));
}
