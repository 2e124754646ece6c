use dioxus::prelude::*;

/// A themed native select element for forms and filters.
///
/// Wraps a native `<select>` with `appearance: none` and co-located
/// styling. When `placeholder` is set, an empty-valued first option is
/// rendered and shown whenever `value` is empty.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value. Empty means nothing selected.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Text of the empty option.
    #[props(default)]
    placeholder: Option<String>,
    /// `id` of the select; the label points at it.
    #[props(default)]
    id: Option<String>,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    let is_empty = value.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: id.clone(), "{label}" }
            }
            select {
                class: "form-select",
                id: id.clone(),
                value: value,
                disabled: disabled,
                "data-empty": if is_empty { "true" } else { "false" },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if let Some(text) = placeholder {
                    option { value: "", selected: is_empty, "{text}" }
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_label_and_placeholder() {
        fn app() -> Element {
            rsx! {
                FormSelect {
                    label: "Queue",
                    id: "queue-select",
                    placeholder: "Pick one",
                    option { value: "1", "Sales" }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Queue"), "{html}");
        assert!(html.contains(r#"id="queue-select""#), "{html}");
        assert!(html.contains("Pick one"), "{html}");
        assert!(html.contains("Sales"), "{html}");
        assert!(html.contains(r#"data-empty="true""#), "{html}");
    }

    #[test]
    fn no_placeholder_option_without_placeholder() {
        fn app() -> Element {
            rsx! {
                FormSelect { value: "1",
                    option { value: "1", "Sales" }
                }
            }
        }
        let html = render(app);
        assert!(!html.contains(r#"value="""#), "{html}");
        assert!(html.contains(r#"data-empty="false""#), "{html}");
    }
}
