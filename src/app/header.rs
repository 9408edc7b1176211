use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::content::{OWNER_NAME, SECTIONS};
use crate::theme::{PreferenceStore, ThemePreference, THEME_KEY};

/// Browser local storage bound to the theme key.
#[derive(Clone, Copy)]
struct LocalPreference {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl PreferenceStore for LocalPreference {
    fn read(&self, key: &str) -> Option<String> {
        debug_assert_eq!(key, THEME_KEY);
        let value = self.stored.get_untracked();
        (!value.is_empty()).then_some(value)
    }

    fn write(&self, key: &str, value: &str) {
        debug_assert_eq!(key, THEME_KEY);
        self.set_stored.set(value.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
    store: LocalPreference,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.preference.with(|p| p.theme().is_dark())
    }

    pub fn toggle(&self) {
        let store = self.store;
        self.preference.update(|p| {
            let theme = p.toggle(&store);
            log::debug!("theme switched to {theme}");
        });
    }
}

pub fn provide_theme() -> ThemeContext {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
    let prefers_dark = use_preferred_dark();
    let store = LocalPreference { stored, set_stored };
    let preference = RwSignal::new(ThemePreference::default());

    // storage and media queries only exist in the browser, so SSR renders the default
    Effect::new(move |_| {
        stored.track();
        let system_dark = prefers_dark.get();
        preference.set(ThemePreference::load(&store, system_dark));
    });

    let ctx = ThemeContext { preference, store };
    provide_context(ctx);
    ctx
}

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        SECTIONS
            .iter()
            .map(|s| {
                view! {
                    <a
                        href=format!("#{}", s.id)
                        class=class
                        on:click=move |_| set_menu_open(false)
                    >
                        {s.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-background/80 backdrop-blur-md border-b border-border/50">
            <nav class="container mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold text-gradient">
                    {OWNER_NAME}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {links("text-sm font-medium text-muted-foreground hover:text-primary transition-colors")}
                </div>
                <div class="flex items-center gap-2">
                    <button
                        class="w-10 h-10 rounded-full flex items-center justify-center hover:bg-muted transition-colors"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.is_dark() { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="md:hidden w-10 h-10 rounded-full flex items-center justify-center hover:bg-muted"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-4 px-4 pb-4 bg-background border-b border-border/50">
                    {links("text-base font-medium hover:text-primary")}
                </div>
            </Show>
        </header>
    }
}
