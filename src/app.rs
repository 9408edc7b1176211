mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;
mod testimonials;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use header::{provide_theme, Header};
use hero::HeroSection;
use projects::ProjectsSection;
use skills::SkillsSection;
use testimonials::TestimonialsSection;
use toaster::{provide_toaster, Toasts};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();
    provide_toaster();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content="Portfolio of Raj Sigdel, UX/UI and graphic designer based in Kathmandu."
        />

        // tailwind dark mode keys off any ancestor carrying the `dark` class
        <div class=move || if theme.is_dark() { "dark" } else { "" }>
            <div class="min-h-screen bg-background text-foreground transition-colors duration-300">
                <Router>
                    <Header />
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                </Router>
                <Toasts />
            </div>
        </div>
    }
}

/// The whole site is one scrolling page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Designer Portfolio" />
        <HeroSection />
        <ProjectsSection />
        <SkillsSection />
        <AboutSection />
        <TestimonialsSection />
        <ContactSection />
    }
}
