pub const SITE_NAME: &str = "silvana.";
pub const NAV_CTA_LABEL: &str = "LETS TALK";
pub const PARALLAX_LABEL: &str = "Experience Design";
pub const FEATURED_HEADING: &str = "Featured Work";

pub const MESSAGES: [&str; 3] = [
    "Beyond RESEARCH: I provide a comprehensive understanding of the landscape, combining user, market, and technology insights.",
    "Beyond IDEATION: I develop future-proofed, durable scenarios particular to the brand and the organizational strength and vision.",
    "Beyond A STRATEGY: I prepare leaders to continually adapt and respond to changes in the marketplace with time-tested dynamic foresight techniques.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub country: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "5",
        title: "Smart Pricing System for Danone v55",
        subtitle: "Dynamic Pricing Strategy for Food & Beverage",
        image: "/images/silvana-img.png",
        description: "A comprehensive Smart Pricing system that leverages machine learning and real-time market data to optimize pricing strategies across diverse global markets.",
        link: "/projects/danone",
        country: "France",
    },
    Project {
        id: "1",
        title: "Kayanee - Tech-Driven Wellness Ecosystem",
        subtitle: "Empowering Women's Health in Saudi Arabia",
        image: "/images/silvana-img.png",
        description: "A revolutionary digital platform that combines AI-driven personalization with culturally sensitive design to transform women's health experiences in the Middle East.",
        link: "/projects/kayanee",
        country: "Saudi Arabia",
    },
    Project {
        id: "2",
        title: "CHiME Care - Digital Health Evolution",
        subtitle: "Revolutionizing Ophthalmic Practices Globally",
        image: "/images/silvana-img.png",
        description: "An innovative design system that bridges cultural gaps in healthcare UX, enhancing accessibility and user comprehension across diverse global markets.",
        link: "/projects/chime-care",
        country: "United States",
    },
    Project {
        id: "3",
        title: "Nomade - Digital Hospitality Platform",
        subtitle: "Redefining Guest Experience Through Technology",
        image: "/images/silvana-img.png",
        description: "A sustainable, AI-powered hospitality ecosystem that adapts to guests' cultural backgrounds, offering personalized experiences while minimizing environmental impact.",
        link: "/projects/nomade",
        country: "Mexico",
    },
    Project {
        id: "4",
        title: "Augmented Coding - AI Development Platform",
        subtitle: "Transform Your Codebase into a Dynamic, Navigable Data Warehouse",
        image: "/images/silvana-img.png",
        description: "An innovative AI-driven development tool that enhances coding efficiency and collaboration across global teams, with built-in localization support.",
        link: "/projects/augmented-coding",
        country: "Global",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<&str> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn project_links_point_at_detail_routes() {
        for project in PROJECTS {
            assert!(
                project.link.starts_with("/projects/"),
                "unexpected link for {}: {}",
                project.id,
                project.link
            );
        }
    }

    #[test]
    fn project_images_are_bundled() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for project in PROJECTS {
            let asset = root.join(project.image.trim_start_matches('/'));
            assert!(asset.is_file(), "missing image for {}: {}", project.id, asset.display());
        }
    }

    #[test]
    fn featured_work_has_five_projects() {
        assert_eq!(PROJECTS.len(), 5);
        assert_eq!(PROJECTS[0].id, "5");
    }
}
