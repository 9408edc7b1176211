//! Compiled-in site content.

use std::fmt;

pub const OWNER_NAME: &str = "Raj Sigdel";
pub const OWNER_TAGLINE: &str =
    "Creative designer crafting clean, meaningful digital experiences that inspire and engage.";
pub const OWNER_EMAIL: &str = "rajsigdel1000@gmail.com";
pub const OWNER_LOCATION: &str = "Kathmandu, Nepal";
pub const OWNER_PHONE: &str = "+977 9828159781";
pub const PORTRAIT_REF: &str = "/raj.svg";

pub const HERO_ROLES: &[&str] = &["No Comfort Zone", "Always Evolving", "Vision First"];

pub const HERO_TECH_STACK: &[(&str, &str)] = &[
    ("Figma", "from-purple-500 to-pink-500"),
    ("Adobe XD", "from-pink-500 to-rose-500"),
    ("Photoshop", "from-blue-600 to-blue-400"),
    ("Illustrator", "from-orange-500 to-yellow-500"),
    ("Webflow", "from-indigo-500 to-blue-500"),
    ("HTML", "from-orange-600 to-red-500"),
    ("CSS", "from-blue-500 to-cyan-400"),
    ("JavaScript", "from-yellow-400 to-yellow-600"),
];

/// One page section, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "projects", label: "Projects" },
    Section { id: "skills", label: "Skills" },
    Section { id: "about", label: "About" },
    Section { id: "testimonials", label: "Testimonials" },
    Section { id: "contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tools: &'static [&'static str],
    pub image_ref: &'static str,
    pub detail_link: &'static str,
    /// Gradient classes for the hover overlay.
    pub accent: &'static str,
}

pub const PROJECTS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        title: "FinanceFlow Dashboard",
        description: "A comprehensive fintech dashboard with real-time analytics, intuitive navigation, and seamless user experience.",
        category: "Web App",
        tools: &["Figma", "Webflow", "After Effects"],
        image_ref: "/projects/financeflow.svg",
        detail_link: "https://dribbble.com/rajspace",
        accent: "from-purple-500 to-pink-500",
    },
    GalleryItem {
        id: 2,
        title: "EcoTrack Mobile App",
        description: "Sustainability tracking app helping users monitor and reduce their carbon footprint with gamified challenges.",
        category: "Mobile App",
        tools: &["Adobe XD", "Illustrator", "Principle"],
        image_ref: "/projects/ecotrack.svg",
        detail_link: "https://dribbble.com/rajspace",
        accent: "from-green-500 to-teal-500",
    },
    GalleryItem {
        id: 3,
        title: "Artisan E-Commerce",
        description: "Premium marketplace for handcrafted goods featuring immersive product galleries and streamlined checkout.",
        category: "E-Commerce",
        tools: &["Figma", "Photoshop", "Webflow"],
        image_ref: "/projects/artisan.svg",
        detail_link: "https://dribbble.com/rajspace",
        accent: "from-orange-500 to-red-500",
    },
    GalleryItem {
        id: 4,
        title: "MindfulMe Wellness",
        description: "Mental wellness platform with meditation guides, mood tracking, and personalized wellness journeys.",
        category: "Web App",
        tools: &["Figma", "Adobe XD", "Lottie"],
        image_ref: "/projects/mindfulme.svg",
        detail_link: "https://dribbble.com/rajspace",
        accent: "from-blue-500 to-cyan-500",
    },
    GalleryItem {
        id: 5,
        title: "TravelVerse Experience",
        description: "Immersive travel booking platform with 3D destination previews and AI-powered trip recommendations.",
        category: "Web App",
        tools: &["Figma", "Blender", "Webflow"],
        image_ref: "/projects/travelverse.svg",
        detail_link: "https://dribbble.com/rajspace",
        accent: "from-indigo-500 to-purple-500",
    },
    GalleryItem {
        id: 6,
        title: "FoodieHub Delivery",
        description: "Food delivery app with real-time tracking, personalized recommendations, and seamless ordering experience.",
        category: "Mobile App",
        tools: &["Figma", "Illustrator", "Principle"],
        image_ref: "/projects/foodiehub.svg",
        detail_link: "https://dribbble.com/rajspace",
        accent: "from-yellow-500 to-orange-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    All,
    Design,
    Development,
}

impl SkillCategory {
    pub const FILTERS: [SkillCategory; 3] = [Self::All, Self::Design, Self::Development];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Skills",
            Self::Design => "Design",
            Self::Development => "Development",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
    pub description: &'static str,
    pub category: SkillCategory,
    pub accent: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Figma", level: 92, description: "Design & Prototyping", category: SkillCategory::Design, accent: "from-purple-500 to-pink-500" },
    Skill { name: "Photoshop", level: 85, description: "Image Editing", category: SkillCategory::Design, accent: "from-blue-500 to-cyan-500" },
    Skill { name: "HTML", level: 85, description: "Semantic Markup", category: SkillCategory::Development, accent: "from-orange-600 to-red-500" },
    Skill { name: "CSS", level: 85, description: "Styling & Animations", category: SkillCategory::Development, accent: "from-blue-500 to-cyan-400" },
    Skill { name: "Illustrator", level: 80, description: "Vector Graphics", category: SkillCategory::Design, accent: "from-orange-500 to-yellow-500" },
    Skill { name: "Prototyping", level: 70, description: "Interactive Designs", category: SkillCategory::Design, accent: "from-green-500 to-teal-500" },
    Skill { name: "Webflow", level: 60, description: "No-Code Development", category: SkillCategory::Development, accent: "from-indigo-500 to-purple-500" },
    Skill { name: "Adobe XD", level: 40, description: "UI/UX Design", category: SkillCategory::Design, accent: "from-pink-500 to-rose-500" },
    Skill { name: "JavaScript", level: 40, description: "Interactive Features", category: SkillCategory::Development, accent: "from-yellow-400 to-yellow-600" },
];

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "User Research",
    "Wireframing",
    "Design Systems",
    "Motion Design",
    "Responsive Design",
    "Git & Version Control",
];

/// Skills shown under a filter tab, in declaration order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS
        .iter()
        .filter(move |s| category == SkillCategory::All || s.category == category)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: f64,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Years Learning UX", value: 1.5, suffix: "" },
    Stat { label: "Projects Completed", value: 10.0, suffix: "+" },
    Stat { label: "Design Skills", value: 10.0, suffix: "+" },
    Stat { label: "Cups of Coffee", value: 250.0, suffix: "+" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const JOURNEY: &[Milestone] = &[
    Milestone { year: "2024", title: "Learning UX/UI Design", description: "Started self-learning UX/UI design from online sources" },
    Milestone { year: "Jan 2025", title: "SEO & Graphic Design", description: "Started working as Graphic Designer & SEO at Blaze Mountain Travel" },
    Milestone { year: "2025", title: "Web Designing", description: "Building projects and continuing to build more" },
];

pub const INTERESTS: &[&str] = &["Design Trends", "Learning", "Games", "Creativity"];

pub const BIO: &[&str] = &[
    "I'm an aspiring UX/UI designer with about a year and a half of self-taught experience, turning ideas into interfaces that feel effortless.",
    "My process starts with people: research, wireframes and prototypes first, pixels last. I care about clarity, accessibility and the small details that make a product feel finished.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Chen",
        role: "CEO, TechStart Inc.",
        content: "Raj transformed our vision into a stunning reality. His attention to detail and user-centric approach resulted in a 40% increase in user engagement. Absolutely exceptional work!",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&auto=format&fit=crop",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Michael Torres",
        role: "Product Manager, InnovateCo",
        content: "Working with Raj was an absolute pleasure. He has this unique ability to understand complex requirements and translate them into beautiful, functional designs that users love.",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&auto=format&fit=crop",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Emily Watson",
        role: "Founder, DesignLab",
        content: "Raj's creativity knows no bounds. He delivered a complete brand identity and website that exceeded all expectations. His communication and professionalism are top-notch.",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&auto=format&fit=crop",
        rating: 5,
    },
    Testimonial {
        id: 4,
        name: "David Park",
        role: "CTO, AppWorks",
        content: "The mobile app design Raj created for us was phenomenal. He has a keen eye for modern aesthetics while maintaining excellent usability. Highly recommend his services!",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&auto=format&fit=crop",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon / extra icon class
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/raj-sigdel/", icon: "devicon-linkedin-plain" },
    SocialLink { label: "Twitter", href: "https://x.com/raj_sigdell", icon: "devicon-twitter-original" },
    SocialLink { label: "Facebook", href: "https://www.facebook.com/raj.sigdelll", icon: "devicon-facebook-plain" },
    SocialLink { label: "Dribbble", href: "https://dribbble.com/rajspace", icon: "extra-dribbble" },
];

pub const CONTACT_INFO: &[(&str, &str)] = &[
    ("Email", OWNER_EMAIL),
    ("Phone", OWNER_PHONE),
    ("Location", OWNER_LOCATION),
];
