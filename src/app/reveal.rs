use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

/// Wraps a page section and fades it in the first time it scrolls into view.
#[component]
pub fn Reveal(id: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Section>::new();
    let (shown, set_shown) = signal(false);

    use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|entry| entry.is_intersecting()) {
            set_shown.set(true);
        }
    });

    view! {
        <section
            id=id
            node_ref=target
            class=move || {
                let state = if shown.get() { "reveal reveal-shown" } else { "reveal" };
                format!("{state} {class}")
            }
        >
            {children()}
        </section>
    }
}
