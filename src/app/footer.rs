use leptos::prelude::*;

use crate::config::BUILD_YEAR;
use crate::content::{OWNER_EMAIL, OWNER_LOCATION, OWNER_NAME, OWNER_TAGLINE, SECTIONS, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-border/50 bg-background">
            <div class="container mx-auto px-4 py-12 md:py-16">
                <div class="grid gap-12 md:grid-cols-4">
                    <div class="md:col-span-2 space-y-4">
                        <h3 class="text-2xl font-bold">{OWNER_NAME}</h3>
                        <p class="text-muted-foreground leading-relaxed max-w-md">{OWNER_TAGLINE}</p>
                        <div class="flex flex-col gap-2 text-sm text-muted-foreground">
                            <span>{OWNER_LOCATION}</span>
                            <a href=format!("mailto:{OWNER_EMAIL}") class="hover:text-primary">
                                {OWNER_EMAIL}
                            </a>
                        </div>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2 text-sm text-muted-foreground">
                            {SECTIONS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <li>
                                            <a href=format!("#{}", s.id) class="hover:text-primary">
                                                {s.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Connect"</h4>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                            class="w-10 h-10 rounded-full border border-border flex items-center justify-center hover:border-primary transition"
                                        >
                                            <i class=social.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="mt-12 pt-8 border-t border-border/50 text-center text-sm text-muted-foreground">
                    {format!("© {BUILD_YEAR} {OWNER_NAME}. All rights reserved.")}
                </div>
            </div>
        </footer>
    }
}
