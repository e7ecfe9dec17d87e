use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{build_year, CONTACT_INFO, NAV_LINKS, PROFILE, SOCIAL_LINKS};

const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[component]
pub fn Footer() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let year = build_year().map(|y| y.to_string()).unwrap_or_default();

    view! {
        <footer class="bg-black/40 border-t border-muted/30 mt-auto" role="contentinfo">
            <div class="max-w-6xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-2xl font-bold text-cyan mb-2">{PROFILE.short_name}</h3>
                    <p class="text-muted mb-4">{PROFILE.tagline}</p>
                    <div class="flex gap-3">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-2xl hover:text-cyan"
                                        aria-label=s.label
                                    >
                                        <i class=s.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h4 class="font-bold mb-3">"Quick Links"</h4>
                    <ul class="space-y-1">
                        {NAV_LINKS
                            .iter()
                            .map(|l| {
                                view! {
                                    <li>
                                        <a href=l.href class="hover:text-cyan">
                                            {l.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="font-bold mb-3">"Contact"</h4>
                    <ul class="space-y-1 text-sm">
                        {CONTACT_INFO
                            .iter()
                            .map(|item| view! { <li>{item.value}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="text-center text-sm text-muted pb-6">
                {format!("© {year} {}. All rights reserved.", PROFILE.name)}
            </div>
            <Show when=move || { scroll_y.get() > SCROLL_TOP_THRESHOLD }>
                <button
                    class="fixed bottom-6 right-6 p-3 rounded-full bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30"
                    aria-label="Scroll to top"
                    on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                >
                    "↑"
                </button>
            </Show>
        </footer>
    }
}
