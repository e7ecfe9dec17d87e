use leptos::{either::*, prelude::*};

use super::reveal::Reveal;
use crate::content::{
    grid_cells, split_columns, AboutTab, Role, Skill, SkillView, ACTIVITIES, CONTACT_INFO,
    EDUCATION, EXPERIENCE, FRONTEND_SKILL_COUNT, HIGHLIGHTS, LANGUAGES, PROFILE, SOFT_SKILLS,
    TECHNICAL_SKILLS,
};

#[component]
pub fn About() -> impl IntoView {
    let (active, set_active) = signal(AboutTab::default());
    let (certs_for, set_certs_for) = signal(None::<&'static Role>);

    view! {
        <Reveal id="about" class="py-16 px-4">
            <div class="max-w-6xl mx-auto">
                <header class="text-center mb-8">
                    <h2 class="font-bold text-3xl mb-4">"About Me"</h2>
                    <p class="max-w-2xl mx-auto text-lg text-muted">{PROFILE.summary}</p>
                </header>
                <nav class="flex flex-wrap justify-center gap-2 mb-8" role="tablist" aria-label="About tabs">
                    {AboutTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (active.get() == tab).to_string()
                                    class=move || tab_class(active.get() == tab)
                                    on:click=move |_| set_active.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="section-content">
                    {move || match active.get() {
                        AboutTab::Basic => EitherOf4::A(view! { <BasicInfo /> }),
                        AboutTab::CoCurricular => {
                            EitherOf4::B(view! { <Activities on_open=set_certs_for /> })
                        }
                        AboutTab::Skills => EitherOf4::C(view! { <SkillsPanel /> }),
                        AboutTab::Experience => EitherOf4::D(view! { <ExperiencePanel /> }),
                    }}
                </div>
            </div>
            {move || {
                certs_for
                    .get()
                    .map(|role| view! { <CertificateModal role on_close=set_certs_for /> })
            }}
        </Reveal>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-md border border-cyan bg-cyan/20 text-cyan"
    } else {
        "px-4 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/30"
    }
}

#[component]
fn BasicInfo() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 p-6 rounded-lg border border-muted/30 bg-brightBlack/20">
                <h3 class="text-xl font-bold mb-2">"Contact"</h3>
                <div class="text-lg text-cyan mb-4">{PROFILE.name}</div>
                <ul class="space-y-1 mb-6">
                    {CONTACT_INFO
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <strong>{item.label}": "</strong>
                                    {match item.href {
                                        Some(href) => Either::Left(view! { <a href=href>{item.value}</a> }),
                                        None => Either::Right(item.value),
                                    }}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <h4 class="font-bold mb-2">"Education"</h4>
                {EDUCATION
                    .iter()
                    .map(|e| {
                        view! {
                            <div class="mb-3">
                                <div class="font-medium">{e.school}</div>
                                <div class="text-sm">
                                    {e.degree} " • " <span class="text-muted">{e.period}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <aside class="p-6 rounded-lg border border-muted/30 bg-brightBlack/20">
                <h3 class="text-xl font-bold mb-4">"Highlights"</h3>
                <div class="grid gap-4 mb-6">
                    {HIGHLIGHTS
                        .iter()
                        .map(|h| {
                            view! {
                                <div>
                                    <div class="text-lg font-bold text-cyan">{h.value}</div>
                                    <div class="text-sm text-muted">{h.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h4 class="font-bold mb-2">"Languages"</h4>
                <div class="flex flex-wrap gap-2">
                    {LANGUAGES
                        .iter()
                        .map(|l| view! { <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">{*l}</span> })
                        .collect_view()}
                </div>
            </aside>
        </div>
    }
}

#[component]
fn Activities(on_open: WriteSignal<Option<&'static Role>>) -> impl IntoView {
    view! {
        <h3 class="text-xl font-bold mb-1">"Co-curricular Activities"</h3>
        <p class="text-muted mb-4">"Click any role to view certificates"</p>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {ACTIVITIES
                .iter()
                .map(|group| {
                    view! {
                        <div class="p-4 rounded-lg border border-muted/30">
                            <div class="font-bold mb-3">{group.institution}</div>
                            <div class="grid grid-cols-2 gap-2">
                                {grid_cells(group.roles)
                                    .into_iter()
                                    .map(|cell| match cell {
                                        Some(role) => {
                                            Either::Left(
                                                view! {
                                                    <button
                                                        class="p-3 rounded-md border border-muted/30 hover:bg-brightBlack/30 text-left text-sm"
                                                        on:click=move |_| on_open.set(Some(role))
                                                    >
                                                        {role.label}
                                                    </button>
                                                },
                                            )
                                        }
                                        None => {
                                            Either::Right(
                                                view! { <div class="p-3 rounded-md opacity-0" aria-hidden="true"></div> },
                                            )
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CertificateModal(
    role: &'static Role,
    on_close: WriteSignal<Option<&'static Role>>,
) -> impl IntoView {
    let body = if role.certificates.is_empty() {
        Either::Left(view! {
            <div class="flex justify-between">
                <div>{format!("{} — Certificate", role.label)}</div>
                <div class="text-muted">"Certificate file not uploaded yet."</div>
            </div>
        })
    } else {
        Either::Right(
            role.certificates
                .iter()
                .map(|cert| {
                    let actions = match cert.url {
                        Some(url) => Either::Left(view! {
                            <div class="flex gap-3">
                                <a href=url target="_blank" rel="noreferrer" class="text-cyan">"View"</a>
                                <a href=url download="" class="text-cyan">"Download"</a>
                            </div>
                        }),
                        None => Either::Right(view! {
                            <div class="text-muted">"Certificate file not uploaded yet."</div>
                        }),
                    };
                    view! {
                        <div class="flex justify-between mb-2">
                            <div>{cert.title}</div>
                            {actions}
                        </div>
                    }
                })
                .collect_view(),
        )
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60"
            role="dialog"
            aria-modal="true"
            aria-label=role.label
        >
            <div class="w-full max-w-lg p-6 rounded-lg bg-background border border-muted/30">
                <div class="flex justify-between items-center mb-4">
                    <h4 class="font-bold">{role.label}</h4>
                    <button on:click=move |_| on_close.set(None) aria-label="Close">"✕"</button>
                </div>
                {body}
            </div>
        </div>
    }
}

fn skill_rows(skills: &'static [Skill], show_percent: bool) -> impl IntoView {
    skills
        .iter()
        .map(|s| {
            view! {
                <div class="mb-3">
                    <div class="flex justify-between text-sm mb-1">
                        <span>{s.name}</span>
                        {show_percent.then(|| view! { <span class="text-muted">{format!("{}%", s.level)}</span> })}
                    </div>
                    <div class="h-2 rounded bg-brightBlack">
                        <div class="h-2 rounded bg-cyan" style=format!("width: {}%", s.level)></div>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn SkillsPanel() -> impl IntoView {
    let (view_kind, set_view_kind) = signal(SkillView::default());

    view! {
        <div class="flex flex-wrap justify-between items-center mb-6 gap-4">
            <h3 class="text-xl font-bold">"Technical & Soft Skills"</h3>
            <div class="flex gap-2">
                <button
                    class=move || tab_class(view_kind.get() == SkillView::Technical)
                    on:click=move |_| set_view_kind.set(SkillView::Technical)
                >
                    "Technical Skills"
                </button>
                <button
                    class=move || tab_class(view_kind.get() == SkillView::Soft)
                    on:click=move |_| set_view_kind.set(SkillView::Soft)
                >
                    "Soft Skills"
                </button>
            </div>
        </div>
        {move || match view_kind.get() {
            SkillView::Technical => {
                let (frontend, rest) = TECHNICAL_SKILLS.split_at(FRONTEND_SKILL_COUNT);
                Either::Left(view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div>
                            <h4 class="font-bold mb-3">"Frontend"</h4>
                            {skill_rows(frontend, false)}
                        </div>
                        <div>
                            <h4 class="font-bold mb-3">"Backend & Tools"</h4>
                            {skill_rows(rest, false)}
                        </div>
                    </div>
                })
            }
            SkillView::Soft => {
                let (left, right) = split_columns(SOFT_SKILLS);
                Either::Right(view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div>{skill_rows(left, true)}</div>
                        <div>{skill_rows(right, true)}</div>
                    </div>
                })
            }
        }}
    }
}

#[component]
fn ExperiencePanel() -> impl IntoView {
    view! {
        <h3 class="text-xl font-bold mb-4">"Work Experience"</h3>
        <div class="border-l-2 border-cyan/40 pl-6 space-y-6">
            {EXPERIENCE
                .iter()
                .map(|job| {
                    view! {
                        <div>
                            <div class="text-sm text-muted">{job.period}</div>
                            <div class="text-lg font-bold">{job.title}</div>
                            <div class="text-cyan">{job.company}</div>
                            <p class="mt-1">{job.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
