//! Static page content: skills, projects, experience, socials and copy.

use crate::projects::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0..=100.
    pub percent: u8,
    pub color: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub link: &'static str,
    pub repo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub place: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Email,
}

impl SocialIcon {
    /// Stroke paths of a 24x24 line icon.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            SocialIcon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            SocialIcon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            SocialIcon::Email => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Hero copy that changes between the page variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub badge: &'static str,
    pub headline: &'static str,
    pub highlight: &'static str,
    pub intro: &'static str,
    pub titles: &'static [&'static str],
}

pub const OWNER: &str = "Ashwin";
pub const LOCATION: &str = "Chicago, US";
pub const EMAIL: &str = "hello@yourname.dev";
pub const RESUME_URL: &str = "https://example.com/resume.pdf";
pub const PROFILE_IMAGE: &str = "/images/profile.svg";
pub const FAVICON: &str = "/favicon.svg";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "hero" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Skills", anchor: "skills" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Experience", anchor: "experience" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", percent: 92, color: "#61dafb", logo: "https://cdn.simpleicons.org/react/61dafb" },
    Skill { name: "Next.js", percent: 86, color: "#ffffff", logo: "https://cdn.simpleicons.org/nextdotjs/ffffff" },
    Skill { name: "TypeScript", percent: 88, color: "#3178c6", logo: "https://cdn.simpleicons.org/typescript/3178c6" },
    Skill { name: "Framer Motion", percent: 84, color: "#f04cf0", logo: "https://cdn.simpleicons.org/framer/f04cf0" },
    Skill { name: "Tailwind CSS", percent: 90, color: "#38bdf8", logo: "https://cdn.simpleicons.org/tailwindcss/38bdf8" },
    Skill { name: "Node.js", percent: 82, color: "#77b255", logo: "https://cdn.simpleicons.org/nodedotjs/77b255" },
    Skill { name: "Express", percent: 80, color: "#f5ec99", logo: "https://cdn.simpleicons.org/express/ffffff" },
    Skill { name: "GraphQL", percent: 78, color: "#e535ab", logo: "https://cdn.simpleicons.org/graphql/e535ab" },
    Skill { name: "MongoDB", percent: 76, color: "#00ed64", logo: "https://cdn.simpleicons.org/mongodb/00ed64" },
    Skill { name: "Storybook", percent: 75, color: "#ff4785", logo: "https://cdn.simpleicons.org/storybook/ff4785" },
    Skill { name: "Vitest", percent: 74, color: "#5bba4f", logo: "https://cdn.simpleicons.org/vitest/5bba4f" },
    Skill { name: "Playwright", percent: 72, color: "#45ba76", logo: "https://cdn.simpleicons.org/playwright/45ba76" },
];

const TEXT_AND_IMAGE: Project = Project {
    title: "Text & Image",
    category: Category::Web,
    tech: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
    description: "Built a user-friendly text-on-image creation tool that lets users easily design and customize visual content. It is an absolute timesaver and supports smooth, intuitive creative workflows for modern content creators.",
    image: Some("/images/text-and-image.svg"),
    link: "https://texteffects.netlify.app/",
    repo: "https://github.com/Azhx88/Text-and-image",
};

const DATA_INSIGHTS_BOT: Project = Project {
    title: "Data-Insights-Bot",
    category: Category::Dashboard,
    tech: &["Python", "Snowflake", "Streamlit", "Flask", "Ollama", "Matplotlib"],
    description: "Data Insights Bot reads your CSV data and answers your questions by pulling exact insights directly from the data you uploaded. It acts like a smart assistant sitting on top of your data: you ask, it digs into your file and gives you real answers with trends and reasons.",
    image: Some("/images/data-insights.svg"),
    link: "https://stock-forecast.streamlit.app/",
    repo: "https://github.com/Azhx88/Stock-Forecast",
};

// Live link points at the repository: the project has no hosted demo.
const HOUSE_RENTAL: Project = Project {
    title: "House Rental System",
    category: Category::Ui,
    tech: &["Angular", "Node.js", "MongoDB", "Tailwind CSS", "Express"],
    description: "House Rental System is a full-stack web app where users can register, browse available houses, and book rentals, while admins manage listings, view bookings, and control the entire platform.",
    image: Some("/images/house-rental.svg"),
    link: "https://github.com/Azhx88/online-house-rental-system",
    repo: "https://github.com/Azhx88/online-house-rental-system",
};

const STOCK_FORECASTER: Project = Project {
    title: "Stock Forecaster",
    category: Category::Dashboard,
    tech: &["Python", "Flask", "Streamlit", "Matplotlib"],
    description: "Stock Forecaster takes stock data and predicts future prices using historical trends, giving you clean visual charts and forecasts instantly. Pick a stock and it analyzes the past data and shows you where the price is likely to go.",
    image: Some("/images/stock-forecaster.svg"),
    link: "https://stock-forecast.streamlit.app/",
    repo: "https://github.com/Azhx88/Stock-Forecast",
};

pub const AURORA_PROJECTS: &[Project] = &[TEXT_AND_IMAGE, DATA_INSIGHTS_BOT, HOUSE_RENTAL, STOCK_FORECASTER];

pub const FROST_PROJECTS: &[Project] = &[
    STOCK_FORECASTER,
    TEXT_AND_IMAGE,
    Project { image: None, ..DATA_INSIGHTS_BOT },
    HOUSE_RENTAL,
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        period: "2023 — Now",
        role: "Senior Frontend Engineer",
        place: "Freelance / Remote",
        summary: "Shipping high-polish marketing sites and SaaS dashboards for startups.",
    },
    ExperienceEntry {
        period: "2021 — 2023",
        role: "Product Engineer",
        place: "Studio Nine",
        summary: "Led React + motion rebuilds that lifted session time by 28%.",
    },
    ExperienceEntry {
        period: "2018 — 2021",
        role: "Front-End Developer",
        place: "PixelCraft",
        summary: "Built component libraries, onboarding flows, and analytics surfaces.",
    },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink { icon: SocialIcon::Github, href: "https://github.com/", label: "GitHub" },
    SocialLink { icon: SocialIcon::Linkedin, href: "https://linkedin.com", label: "LinkedIn" },
    SocialLink { icon: SocialIcon::Email, href: "mailto:hello@yourname.dev", label: "Email" },
];

pub const STATS: &[Stat] = &[
    Stat { label: "Projects", value: "48+" },
    Stat { label: "Avg uplift", value: "28%+ session time" },
    Stat { label: "Response", value: "> 48 hrs" },
];

pub const HIGHLIGHTS: &[&str] = &[
    "Led rebuilds that cut Time-to-Interactive by 42%.",
    "Designed token systems shared across web + native.",
    "Mentored teams on a11y and motion guidelines.",
];

pub const AURORA_HERO: HeroCopy = HeroCopy {
    badge: "Available for select projects",
    headline: "Be addicted to bettering",
    highlight: "Yourself",
    intro: "I craft expressive interfaces, motion-rich product tours, and fast, accessible web apps for brands who care about detail.",
    titles: &["React Specialist", "Creative Coder", "UI Engineer"],
};

pub const FROST_HERO: HeroCopy = HeroCopy {
    badge: "Booking winter sprints",
    headline: "Quietly obsessed with",
    highlight: "Craft",
    intro: "I build calm, fast interfaces and motion-led product stories for teams who sweat the small details.",
    titles: &["React Specialist", "Creative Coder", "UI Engineer"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_percent_in_range() {
        assert!(SKILLS.iter().all(|s| s.percent <= 100));
    }

    #[test]
    fn test_every_social_has_an_icon() {
        for social in SOCIALS {
            let paths = social.icon.paths();
            assert!(!paths.is_empty(), "{} has no icon", social.label);
            assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])));
        }
    }

    #[test]
    fn test_referenced_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let images = AURORA_PROJECTS
            .iter()
            .chain(FROST_PROJECTS)
            .filter_map(|p| p.image)
            .chain([PROFILE_IMAGE, FAVICON]);
        for path in images {
            assert!(
                public.join(path.trim_start_matches('/')).is_file(),
                "{path} missing from public/"
            );
        }
    }

    #[test]
    fn test_nav_anchors() {
        let anchors = NAV_ITEMS.iter().map(|n| n.anchor).collect::<Vec<_>>();
        assert_eq!(
            anchors,
            vec!["hero", "about", "skills", "projects", "experience", "contact"]
        );
    }

    #[test]
    fn test_project_titles_unique() {
        for list in [AURORA_PROJECTS, FROST_PROJECTS] {
            let mut titles = list.iter().map(|p| p.title).collect::<Vec<_>>();
            titles.sort();
            titles.dedup();
            assert_eq!(titles.len(), list.len());
        }
    }

    #[test]
    fn test_live_links_not_borrowed_from_other_projects() {
        for p in AURORA_PROJECTS.iter().filter(|p| p.category != Category::Dashboard) {
            assert!(!p.link.contains("stock-forecast"), "{} has a foreign demo link", p.title);
        }
    }
}
