use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{GalleryItem, PROJECTS};
use crate::gallery::{ClickTarget, GallerySelection};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let selection = RwSignal::new(GallerySelection::new());

    view! {
        <section id="projects" class="py-24 md:py-32 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Featured " <span class="text-gradient">"Projects"</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "A curated selection of my recent work showcasing design thinking, creativity, and attention to detail."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project selection /> })
                        .collect_view()}
                </div>
            </div>
            <ProjectModal selection />
        </section>
    }
}

#[component]
fn ToolTags(tools: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tools
                .iter()
                .map(|tool| {
                    view! {
                        <span class="text-xs px-2 py-1 rounded-md bg-muted text-muted-foreground">
                            {*tool}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(
    project: &'static GalleryItem,
    selection: RwSignal<GallerySelection>,
) -> impl IntoView {
    view! {
        <div class="group relative bg-card rounded-2xl overflow-hidden shadow-card hover:shadow-card-hover hover:-translate-y-2 transition-all duration-500">
            <div class="relative h-56 overflow-hidden">
                <img
                    src=project.image_ref
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-t {} opacity-0 group-hover:opacity-70 transition-opacity duration-500",
                    project.accent,
                ) />
                <div class="absolute inset-0 flex items-center justify-center gap-4 opacity-0 group-hover:opacity-100 transition-all duration-500">
                    <button
                        class="w-10 h-10 rounded-full bg-background/90 hover:bg-background flex items-center justify-center"
                        aria-label=format!("View {}", project.title)
                        on:click=move |_| selection.update(|s| s.select(project))
                    >
                        "👁"
                    </button>
                    <a
                        href=project.detail_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-10 h-10 rounded-full bg-background/90 hover:bg-background flex items-center justify-center"
                        aria-label=format!("Open {} details", project.title)
                    >
                        "↗"
                    </a>
                </div>
            </div>
            <div class="p-6">
                <span class="inline-block mb-3 text-xs font-semibold px-2.5 py-0.5 rounded-full bg-secondary text-secondary-foreground">
                    {project.category}
                </span>
                <h3 class="text-xl font-bold mb-2 group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-muted-foreground text-sm mb-4 line-clamp-2">{project.description}</p>
                <ToolTags tools=project.tools />
            </div>
        </div>
    }
}

#[component]
fn ProjectModal(selection: RwSignal<GallerySelection>) -> impl IntoView {
    let on_backdrop = move |ev: MouseEvent| {
        let target = ClickTarget::classify(ev.target() == ev.current_target());
        selection.update(|s| s.pointer(target));
    };

    move || {
        selection
            .with(GallerySelection::selected)
            .map(|project| {
                view! {
                    <div
                        class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4"
                        on:click=on_backdrop
                    >
                        <div
                            role="dialog"
                            aria-modal="true"
                            aria-label=project.title
                            class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto bg-card rounded-2xl shadow-2xl"
                        >
                            <button
                                class="absolute top-3 right-3 z-10 w-9 h-9 rounded-full bg-background/90 hover:bg-background"
                                aria-label="Close"
                                on:click=move |_| selection.update(|s| s.clear())
                            >
                                "✕"
                            </button>
                            <img
                                src=project.image_ref
                                alt=project.title
                                class="w-full h-72 object-cover"
                            />
                            <div class="p-8 space-y-4">
                                <span class="inline-block text-xs font-semibold px-2.5 py-0.5 rounded-full bg-secondary text-secondary-foreground">
                                    {project.category}
                                </span>
                                <h3 class="text-2xl font-bold">{project.title}</h3>
                                <p class="text-muted-foreground">{project.description}</p>
                                <ToolTags tools=project.tools />
                                <a
                                    href=project.detail_link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-block mt-2 px-6 py-3 rounded-full bg-gradient-primary text-white font-semibold"
                                >
                                    "View Details"
                                </a>
                            </div>
                        </div>
                    </div>
                }
            })
    }
}
