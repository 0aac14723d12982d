//! Integration tests for whole-page rewriting

use refmark_core::page::base_path;
use refmark_core::{PageRewriter, SiteConfig};

fn rewriter() -> PageRewriter {
    PageRewriter::new(&SiteConfig::default()).unwrap()
}

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<header>[ホーム] &gt; math &gt; sqrt</header>
<p>Declared in <code>&lt;IMathLib/math/math.hpp&gt;</code>.</p>
<pre class="cpp_code">#include &lt;IMathLib/math/math.hpp&gt;

int main() {
	// square root of two
	double r = iml::sqrt(2.0);
	return 0;
}
</pre>
<p>See also <code>iml::isqrt</code> and <code>iml::sqrt2</code>.</p>
</body>
</html>
"#;

#[test]
fn test_full_page_rewrite() {
    let base = base_path("docs/contents/math/math/sqrt.html", "contents").unwrap();
    assert_eq!(base, "docs/contents/");

    let out = rewriter().rewrite(PAGE, &base);

    // Home label linked in the navigation header.
    assert!(out.contains("<a href=\"docs/contents/top.html\">[ホーム]</a>"));
    // Inline code element linked to the header page.
    assert!(out.contains(
        "<code><span><a href=\"docs/contents/math/math.html\">\
         &lt;IMathLib/math/math.hpp&gt;</a></span></code>"
    ));
    // Snippet highlighted: directive, types, keyword, comment, number.
    assert!(out.contains("<span><font color=\"#424242\">#include</font></span>"));
    assert!(out.contains("<span><font color=\"#2E64FE\">int</font></span> main"));
    assert!(out.contains("<span><font color=\"#2E64FE\">double</font></span> r"));
    assert!(out.contains("<span><b><font color=\"#0431B4\">return</font></b></span>"));
    assert!(out.contains("<span><font color=\"#088A4B\">// square root of two</font></span>"));
    assert!(out.contains("<span><font color=\"#868A08\">2.0</font></span>"));
    // The known symbol is linked, its near-miss neighbour is not.
    assert!(out.contains("<a href=\"docs/contents/math/math/isqrt.html\">iml::isqrt</a>"));
    assert!(out.contains("<code>iml::sqrt2</code>"));
    // Markup outside designated elements is untouched.
    assert!(out.contains("<p>Declared in "));
}

#[test]
fn test_page_rewrite_is_idempotent_for_code_content() {
    let base = "docs/contents/";
    let r = rewriter();
    let once = r.rewrite(PAGE, base);
    let twice = r.rewrite(&once, base);

    // Code and snippet content is fully claimed after one run; the only
    // rewrite that may fire again is the unprotected home-label pass.
    let strip_header = |page: &str| {
        let start = page.find("<header>").unwrap();
        let end = page.find("</header>").unwrap();
        format!("{}{}", &page[..start], &page[end..])
    };
    assert_eq!(strip_header(&once), strip_header(&twice));
}

#[test]
fn test_unknown_identifiers_pass_through() {
    let page = "<pre class=\"cpp_code\">myVariable + other_var;</pre>";
    let out = rewriter().rewrite(page, "base/");
    assert_eq!(out, page);
}
