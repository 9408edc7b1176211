use leptos::prelude::*;

use crate::content::{skills_in, Skill, SkillCategory, ADDITIONAL_SKILLS};

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="bg-card rounded-2xl p-6 shadow-card hover:shadow-card-hover hover:-translate-y-1 transition-all duration-300">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h3 class="font-bold text-lg">{skill.name}</h3>
                    <p class="text-sm text-muted-foreground">{skill.description}</p>
                </div>
                <span class="text-2xl font-bold text-gradient">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 rounded-full bg-muted overflow-hidden">
                <div
                    class=format!(
                        "h-full rounded-full bg-gradient-to-r {} transition-all duration-1000",
                        skill.accent,
                    )
                    style=format!("width: {}%", skill.level)
                />
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (active, set_active) = signal(SkillCategory::All);

    view! {
        <section id="skills" class="py-24 md:py-32">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Skills & " <span class="text-gradient">"Expertise"</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "The tools and disciplines I use to take an idea from sketch to shipped interface."
                    </p>
                </div>
                <div class="flex justify-center gap-3 mb-12" role="tablist">
                    {SkillCategory::FILTERS
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (active.get() == category).to_string()
                                    class=move || {
                                        if active.get() == category {
                                            "px-5 py-2 rounded-full text-sm font-medium bg-gradient-primary text-white"
                                        } else {
                                            "px-5 py-2 rounded-full text-sm font-medium bg-muted text-muted-foreground hover:text-foreground"
                                        }
                                    }
                                    on:click=move |_| set_active(category)
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    {move || {
                        skills_in(active.get())
                            .map(|skill| view! { <SkillCard skill /> })
                            .collect_view()
                    }}
                </div>
                <div class="mt-16 text-center">
                    <h3 class="text-xl font-semibold mb-6">"Also comfortable with"</h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {ADDITIONAL_SKILLS
                            .iter()
                            .map(|name| {
                                view! {
                                    <span class="px-4 py-2 rounded-full bg-card border border-border text-sm">
                                        {*name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
