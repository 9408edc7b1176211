use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::motion::Carousel;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = move || TESTIMONIALS.get(carousel.with(Carousel::index));

    view! {
        <section id="testimonials" class="py-24 md:py-32">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Client " <span class="text-gradient">"Testimonials"</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Kind words from people I've had the pleasure of working with."
                    </p>
                </div>
                <div class="max-w-4xl mx-auto">
                    <div class="relative bg-card rounded-3xl p-8 md:p-12 shadow-card">
                        <span class="absolute top-6 left-6 text-6xl text-primary/20 leading-none">
                            "“"
                        </span>
                        {move || {
                            current()
                                .map(|t| {
                                    view! {
                                        <div class="text-yellow-500 mb-4" aria-label=format!("{} out of 5", t.rating)>
                                            {"★".repeat(t.rating as usize)}
                                        </div>
                                        <blockquote class="text-xl md:text-2xl font-medium mb-8 relative z-10 leading-relaxed">
                                            {t.content}
                                        </blockquote>
                                        <div class="flex items-center gap-4">
                                            <img
                                                src=t.avatar
                                                alt=t.name
                                                class="w-14 h-14 rounded-full object-cover"
                                            />
                                            <div>
                                                <div class="font-bold">{t.name}</div>
                                                <div class="text-sm text-muted-foreground">{t.role}</div>
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                    <div class="flex items-center justify-center gap-4 mt-8">
                        <button
                            class="w-12 h-12 rounded-full border border-border hover:border-primary"
                            aria-label="Previous testimonial"
                            on:click=move |_| carousel.update(Carousel::prev)
                        >
                            "‹"
                        </button>
                        <div class="flex gap-2">
                            {(0..TESTIMONIALS.len())
                                .map(|i| {
                                    view! {
                                        <button
                                            aria-label=format!("Show testimonial {}", i + 1)
                                            class=move || {
                                                if carousel.with(Carousel::index) == i {
                                                    "h-3 w-8 rounded-full bg-primary transition-all"
                                                } else {
                                                    "h-3 w-3 rounded-full bg-muted-foreground/30 transition-all"
                                                }
                                            }
                                            on:click=move |_| carousel.update(|c| c.go_to(i))
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="w-12 h-12 rounded-full border border-border hover:border-primary"
                            aria-label="Next testimonial"
                            on:click=move |_| carousel.update(Carousel::next)
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
