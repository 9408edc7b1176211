use leptos::prelude::*;

use crate::content::{HERO_ROLES, HERO_TECH_STACK, OWNER_NAME, OWNER_TAGLINE};
use crate::motion::Typewriter;

#[component]
fn TypewriterText() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(HERO_ROLES));
    let (step, set_step) = signal(0_u64);

    // each step schedules the next one with the delay the previous tick chose
    Effect::new(move |_| {
        step.track();
        let delay = typewriter.with_untracked(Typewriter::delay);
        set_timeout(
            move || {
                typewriter.try_update(|t| t.tick());
                set_step.try_update(|s| *s += 1);
            },
            delay,
        );
    });

    view! {
        <span class="text-gradient">
            {move || typewriter.with(Typewriter::text)}
            <span class="inline-block w-[3px] h-[1em] bg-primary ml-1 align-middle animate-pulse" />
        </span>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-16"
        >
            <div class="absolute inset-0 pointer-events-none">
                {HERO_TECH_STACK
                    .iter()
                    .enumerate()
                    .map(|(i, (name, accent))| {
                        let style = format!(
                            "left: {}%; top: {}%; animation-delay: {}ms",
                            8 + (i * 37) % 84,
                            12 + (i * 53) % 72,
                            i * 400,
                        );
                        view! {
                            <span
                                class=format!(
                                    "hidden lg:block absolute px-3 py-1 rounded-full text-xs font-semibold text-white bg-gradient-to-r {accent} opacity-70 animate-float",
                                )
                                style=style
                            >
                                {*name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="container mx-auto px-4 text-center relative z-10">
                <p class="text-lg text-muted-foreground mb-4">"Hello, I'm"</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">{OWNER_NAME}</h1>
                <h2 class="text-2xl md:text-4xl font-semibold mb-8 h-12">
                    <TypewriterText />
                </h2>
                <p class="text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto mb-10">
                    {OWNER_TAGLINE}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#projects"
                        class="px-8 py-4 rounded-full bg-gradient-primary text-white font-semibold shadow-lg hover:opacity-90 transition"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 rounded-full border border-border font-semibold hover:border-primary transition"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
