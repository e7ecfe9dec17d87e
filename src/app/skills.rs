use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{skills_for, BarTone, SkillCategory};

#[component]
pub fn Skills() -> impl IntoView {
    let (category, set_category) = signal(SkillCategory::default());

    view! {
        <Reveal id="skills" class="py-16 px-4">
            <div class="max-w-6xl mx-auto">
                <header class="text-center mb-8">
                    <h2 class="font-bold text-3xl mb-4">"Technical Skills"</h2>
                    <p class="text-lg text-muted">
                        "Comprehensive skillset across frontend, backend, and development tools"
                    </p>
                </header>
                <div class="flex justify-center gap-2 mb-8">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == c {
                                            "px-4 py-2 rounded-md border border-cyan bg-cyan/20 text-cyan"
                                        } else {
                                            "px-4 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/30"
                                        }
                                    }
                                    on:click=move |_| set_category.set(c)
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 section-content">
                    {move || {
                        skills_for(category.get())
                            .iter()
                            .map(|skill| {
                                let tone = BarTone::for_level(skill.level);
                                view! {
                                    <div class="p-4 rounded-lg border border-muted/30">
                                        <div class="flex justify-between items-start mb-3">
                                            <div>
                                                <div class="font-bold">{skill.name}</div>
                                                <div class="text-sm text-muted">{skill.description}</div>
                                            </div>
                                            <div class="font-bold">{format!("{}%", skill.level)}</div>
                                        </div>
                                        <div class="h-2 rounded bg-brightBlack">
                                            <div
                                                class=format!("h-2 rounded {}", tone.class())
                                                style=format!("width: {}%", skill.level)
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Reveal>
    }
}
