use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::{Stat, BIO, INTERESTS, JOURNEY, PORTRAIT_REF, STATS};
use crate::motion::CountUp;

/// Counts up once the first time it scrolls into view.
#[component]
fn AnimatedCounter(stat: &'static Stat) -> impl IntoView {
    let el = NodeRef::<html::Span>::new();
    let visible = use_element_visibility(el);
    let counter = RwSignal::new(CountUp::new(stat.value));
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if !visible.get() || started.get_value() {
            return;
        }
        started.set_value(true);
        let handle = StoredValue::new(None::<IntervalHandle>);
        let interval = set_interval_with_handle(
            move || {
                counter.try_update(|c| c.tick());
                if counter.with_untracked(CountUp::is_done) {
                    if let Some(h) = handle.get_value() {
                        h.clear();
                    }
                }
            },
            CountUp::interval(),
        );
        match interval {
            Ok(h) => handle.set_value(Some(h)),
            Err(e) => log::warn!("couldn't start counter for {}: {e:?}", stat.label),
        }
    });

    view! {
        <span node_ref=el class="text-4xl md:text-5xl font-bold text-gradient">
            {move || counter.with(|c| c.display(stat.suffix))}
        </span>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-24 md:py-32 bg-muted/30 overflow-hidden">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "About " <span class="text-gradient">"Me"</span>
                    </h2>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-center max-w-6xl mx-auto">
                    <div class="relative">
                        <img
                            src=PORTRAIT_REF
                            alt="Portrait"
                            class="rounded-3xl shadow-2xl w-full max-w-md mx-auto object-cover"
                        />
                    </div>
                    <div class="space-y-6">
                        {BIO
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-lg text-muted-foreground leading-relaxed">{*p}</p>
                                }
                            })
                            .collect_view()}
                        <div class="flex flex-wrap gap-3">
                            {INTERESTS
                                .iter()
                                .map(|interest| {
                                    view! {
                                        <span class="px-4 py-2 rounded-full bg-primary/10 text-primary text-sm font-medium">
                                            {*interest}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mt-20 max-w-5xl mx-auto">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center bg-card rounded-2xl p-6 shadow-card">
                                    <AnimatedCounter stat />
                                    <div class="mt-2 text-sm text-muted-foreground">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-20 max-w-3xl mx-auto">
                    <h3 class="text-2xl font-bold text-center mb-10">"My Journey"</h3>
                    <ol class="relative border-l-2 border-primary/30 ml-4 space-y-10">
                        {JOURNEY
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="ml-8">
                                        <span class="absolute -left-[9px] w-4 h-4 rounded-full bg-primary" />
                                        <span class="text-sm font-bold text-primary">{item.year}</span>
                                        <h4 class="text-lg font-semibold mt-1">{item.title}</h4>
                                        <p class="text-muted-foreground">{item.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}
