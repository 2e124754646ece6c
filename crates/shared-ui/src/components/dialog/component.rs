use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal overlay. Escape and backdrop clicks report `open = false`
/// through `on_open_change`.
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "fd-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("fd-dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "fd-dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DialogSectionProps {
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Scrollable body between the title and the actions, separated by
/// divider lines.
#[component]
pub fn DialogBody(props: DialogSectionProps) -> Element {
    rsx! {
        div {
            class: "fd-dialog-body",
            ..props.attributes,
            {props.children}
        }
    }
}

/// Right-aligned row of action buttons at the bottom of a dialog.
#[component]
pub fn DialogActions(props: DialogSectionProps) -> Element {
    rsx! {
        div {
            class: "fd-dialog-actions",
            ..props.attributes,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_and_body_wrap_children() {
        fn app() -> Element {
            rsx! {
                DialogBody { p { "content" } }
                DialogActions { span { "ok" } }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"class="fd-dialog-body""#), "{html}");
        assert!(html.contains(r#"class="fd-dialog-actions""#), "{html}");
        assert!(html.contains("<p>content</p>"), "{html}");
        assert!(html.contains("<span>ok</span>"), "{html}");
    }
}
