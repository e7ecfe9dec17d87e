use leptos::{either::Either, prelude::*};

use super::reveal::Reveal;
use crate::content::{featured_projects, filter_projects, Project, ProjectCategory};

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectCategory::default());
    let visible = move || filter_projects(filter.get());

    view! {
        <Reveal id="projects" class="py-16 px-4 bg-brightBlack/10">
            <div class="max-w-6xl mx-auto">
                <header class="text-center mb-8">
                    <h2 class="font-bold text-3xl mb-4">"Featured Projects"</h2>
                    <p class="text-lg text-muted">"A selection of my recent work and personal projects"</p>
                </header>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                    {featured_projects()
                        .map(|project| view! { <ProjectCard project featured=true /> })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap justify-center gap-2 mb-8">
                    {ProjectCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == category {
                                            "px-4 py-2 rounded-md border border-cyan bg-cyan/20 text-cyan"
                                        } else {
                                            "px-4 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/30"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(category)
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 section-content">
                    {move || {
                        let projects = visible();
                        if projects.is_empty() {
                            Either::Left(view! { <EmptyCard category=filter.get() /> })
                        } else {
                            Either::Right(
                                projects
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project featured=false /> })
                                    .collect_view(),
                            )
                        }
                    }}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectCard(project: &'static Project, featured: bool) -> impl IntoView {
    view! {
        <article class="p-6 rounded-lg border border-muted/30 bg-background hover:bg-brightBlack/20 transition-colors duration-200">
            {featured
                .then(|| {
                    view! {
                        <span class="inline-block mb-2 rounded-md px-2 py-1 bg-purple/20 text-purple text-xs">
                            "Featured"
                        </span>
                    }
                })}
            <h3 class="text-xl font-bold mb-2">{project.title}</h3>
            <p class="mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .technologies
                    .iter()
                    .map(|t| view! { <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">{*t}</span> })
                    .collect_view()}
            </div>
            <div class="flex gap-4">
                {project
                    .live_url
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-cyan">
                                "Live Demo"
                            </a>
                        }
                    })}
                {project
                    .github_url
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-cyan">
                                <i class="devicon-github-plain mr-1" />
                                "Code"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

#[component]
fn EmptyCard(category: ProjectCategory) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg border border-dashed border-muted/50 text-center md:col-span-2 lg:col-span-3">
            <h3 class="text-lg font-bold mb-2">"More coming in the future"</h3>
            <p class="text-muted">
                {format!(
                    "I'm actively building more {} projects — check back soon!",
                    category.empty_label(),
                )}
            </p>
        </div>
    }
}
