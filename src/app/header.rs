use leptos::prelude::*;

use crate::content::{NAV_LINKS, PROFILE};

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-40 bg-background/90 backdrop-blur shadow" role="banner">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a class="text-2xl font-bold text-cyan" href="#home" aria-label=format!("{} - home", PROFILE.short_name)>
                    {PROFILE.short_name}
                </a>
                <nav
                    class=move || {
                        if menu_open.get() { "block" } else { "hidden md:block" }
                    }
                    role="navigation"
                    aria-label="Main navigation"
                >
                    <ul class="flex flex-col md:flex-row gap-4 md:gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            class="hover:text-cyan transition-colors duration-200"
                                            href=link.href
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
        </header>
    }
}
