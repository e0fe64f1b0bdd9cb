//! Links to an online Graphviz renderer

use url::form_urlencoded;

/// GraphvizOnline reads the graph from the URL fragment.
pub const GRAPHVIZ_ONLINE: &str = "https://dreampuf.github.io/GraphvizOnline/";

/// Build a GraphvizOnline URL that renders `document`.
pub fn graphviz_online_url(document: &str) -> String {
    // Form encoding turns spaces into '+', which the viewer would keep literally
    let encoded: String = form_urlencoded::byte_serialize(document.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{GRAPHVIZ_ONLINE}#{encoded}")
}
