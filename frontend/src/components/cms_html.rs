use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CmsHtmlProps {
    /// Pre-rendered HTML straight from the CMS, trusted as-is.
    pub markup: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Host for CMS-rendered fragments (post bodies, series descriptions).
/// The fragment goes in as an opaque raw node so Yew never diffs into
/// markup it did not produce.
#[function_component(CmsHtml)]
pub fn cms_html(props: &CmsHtmlProps) -> Html {
    html! {
        <div class={props.class.clone()}>
            { Html::from_html_unchecked(props.markup.clone()) }
        </div>
    }
}
