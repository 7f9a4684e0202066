use serde_json::Value;
use yew::prelude::*;

use crate::schema::to_script_body;
use crate::seo::PageMetadata;

#[derive(Properties, PartialEq)]
pub struct JsonLdProps {
    pub data: Value,
}

/// Renders one `application/ld+json` block.
#[function_component(JsonLd)]
pub fn json_ld(props: &JsonLdProps) -> Html {
    let body = to_script_body(&props.data);
    html! {
        <script type="application/ld+json">{ body }</script>
    }
}

/// Puts a page's metadata into `document.head` whenever it changes.
#[hook]
pub fn use_page_metadata(metadata: PageMetadata) {
    use_effect_with_deps(
        |metadata: &PageMetadata| {
            metadata.apply();
            || ()
        },
        metadata,
    );
}
