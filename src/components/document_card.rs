use yew::prelude::*;

use crate::content::{reveal_style, Document};

#[derive(Properties, PartialEq)]
pub struct DocumentCardProps {
    pub document: Document,
    #[prop_or_default]
    pub delay: u32,
}

#[function_component(DocumentCard)]
pub fn document_card(props: &DocumentCardProps) -> Html {
    let document = &props.document;

    html! {
        <article class="document-card" style={reveal_style(props.delay)}>
            <div class="document-top">
                <div class="document-icon">{document.icon}</div>
                if let Some(badge) = document.badge {
                    <span class="document-badge">{badge}</span>
                }
            </div>
            <h3>{document.title}</h3>
            <p class="document-description">{document.description}</p>
            <div class="document-meta">
                <span class="meta-type">{document.meta.kind}</span>
                <span class="meta-pages">{document.meta.pages}</span>
                <span class="meta-category">{document.meta.category}</span>
            </div>
        </article>
    }
}
