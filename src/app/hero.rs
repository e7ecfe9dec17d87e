use std::time::Duration;

use leptos::prelude::*;

use crate::content::{HERO_ROLES, HERO_SOCIALS, PROFILE};
use crate::typewriter::Typewriter;

fn schedule_typing(typewriter: RwSignal<Typewriter>, delay: Duration) {
    set_timeout(
        move || {
            // signal is gone once the hero unmounts
            if let Some(next) = typewriter.try_update(|tw| tw.tick()) {
                schedule_typing(typewriter, next);
            }
        },
        delay,
    );
}

#[component]
pub fn Hero() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(HERO_ROLES));

    // effects only run in the browser
    Effect::new(move |_| schedule_typing(typewriter, Duration::ZERO));

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-4xl mx-auto text-center section-content">
                <p class="text-lg text-muted mb-2">"Hello, I'm"</p>
                <h1 class="font-bold text-4xl lg:text-6xl mb-4">{PROFILE.name}</h1>
                <h2 class="text-2xl lg:text-3xl text-cyan h-10 mb-6">
                    <span>{move || typewriter.with(|tw| tw.text())}</span>
                    <span class="animate-pulse">"|"</span>
                </h2>
                <p class="max-w-2xl mx-auto text-lg mb-8">{PROFILE.summary}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-8">
                    <a
                        href="#contact"
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href=PROFILE.resume_href
                        download="Resume.pdf"
                        class="px-6 py-3 rounded-md font-medium border border-muted hover:bg-brightBlack/30 transition-all duration-200"
                    >
                        <i class="extra-download mr-2" />
                        "Download Resume"
                    </a>
                </div>
                <div class="flex justify-center gap-4">
                    {HERO_SOCIALS
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-2xl hover:text-cyan transition-colors duration-200"
                                    aria-label=s.label
                                >
                                    <i class=s.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a href="#about" class="block mt-12 text-muted animate-bounce" aria-label="Scroll to about">
                    "↓"
                </a>
            </div>
        </section>
    }
}
