use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub title: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        id: "home",
        title: "Home",
    },
    NavLink {
        id: "about",
        title: "About",
    },
    NavLink {
        id: "skills",
        title: "Skills",
    },
    NavLink {
        id: "projects",
        title: "Projects",
    },
    NavLink {
        id: "contact",
        title: "Contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub logo_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [Skill],
}

macro_rules! devicon {
    ($name:literal, $path:literal) => {
        Skill {
            name: $name,
            logo_url: concat!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/", $path),
        }
    };
}

pub const SKILLS: [SkillCategory; 3] = [
    SkillCategory {
        name: "Technical Skills",
        items: &[
            devicon!("React", "react/react-original.svg"),
            devicon!("Node.js", "nodejs/nodejs-original.svg"),
            devicon!("Express", "express/express-original.svg"),
            devicon!("React Native", "react/react-original.svg"),
            devicon!("Kotlin", "kotlin/kotlin-original.svg"),
            devicon!("Firebase", "firebase/firebase-plain.svg"),
            devicon!("Python", "python/python-original.svg"),
            devicon!("DSA", "cplusplus/cplusplus-original.svg"),
        ],
    },
    SkillCategory {
        name: "Tools & Platforms",
        items: &[
            devicon!("Git & GitHub", "github/github-original.svg"),
            devicon!("Figma", "figma/figma-original.svg"),
            devicon!("VS Code", "vscode/vscode-original.svg"),
            devicon!("Postman", "postman/postman-original.svg"),
            Skill {
                name: "Tailwind CSS",
                logo_url: "https://www.vectorlogo.zone/logos/tailwindcss/tailwindcss-icon.svg",
            },
            Skill {
                name: "Chart.js",
                logo_url: "https://www.chartjs.org/media/logo-title.svg",
            },
        ],
    },
    SkillCategory {
        name: "Creative Skills",
        items: &[
            Skill {
                name: "Digital Art",
                logo_url: "https://cdn-icons-png.flaticon.com/512/2921/2921222.png",
            },
            Skill {
                name: "UI/UX Design",
                logo_url: "https://cdn-icons-png.flaticon.com/512/1829/1829586.png",
            },
            Skill {
                name: "Concept Art",
                logo_url: "https://cdn-icons-png.flaticon.com/512/1087/1087840.png",
            },
            Skill {
                name: "Interaction Design",
                logo_url: "https://cdn-icons-png.flaticon.com/512/3214/3214746.png",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks {
    pub repository: Option<&'static str>,
    pub live: Option<&'static str>,
}

impl ProjectLinks {
    // "#" was used as a stand-in for demos that are not deployed yet
    fn usable(url: Option<&'static str>) -> Option<&'static str> {
        url.filter(|u| !u.is_empty() && *u != "#")
    }

    pub fn repository(&self) -> Option<&'static str> {
        Self::usable(self.repository)
    }

    pub fn live(&self) -> Option<&'static str> {
        Self::usable(self.live)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
    pub tech: &'static [&'static str],
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Normal,
    Reverse,
}

impl Layout {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Layout::Normal
        } else {
            Layout::Reverse
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Layout::Normal => "lg:flex-row",
            Layout::Reverse => "lg:flex-row-reverse",
        }
    }
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "HerShield",
        tagline: "One-click SOS alerts to verified users nearby.",
        description: "A women safety app that instantly alerts all verified users nearby during emergencies. With real-time location tracking, SOS broadcasting, and volunteer coordination, HerShield ensures quick help when it matters most.",
        image_path: "/hershield.png",
        tech: &["React Native", "Socket.io", "Leaflet", "Node.js"],
        links: ProjectLinks {
            repository: Some("https://github.com/niteshcipher/HerShield"),
            live: Some("#"),
        },
    },
    Project {
        title: "Questify",
        tagline: "Track goals with gamified progress and AI suggestions.",
        description: "Questify transforms personal growth into an adventure. It generates smart roadmaps, tracks your progress, and gamifies your journey with points, badges, and AI-based learning suggestions.",
        image_path: "/questify.png",
        tech: &["React", "Node.js", "Express", "MongoDB", "AI"],
        links: ProjectLinks {
            repository: Some("https://github.com/niteshcipher/techberg"),
            live: Some("https://frostpro-1.onrender.com/"),
        },
    },
    Project {
        title: "AerisAI",
        tagline: "Your personal voice-controlled AI assistant.",
        description: "AerisAI automates your digital life. It opens apps, writes emails, answers questions, and performs system tasks, all through natural voice commands and smart context understanding.",
        image_path: "/aerisai.png",
        tech: &["Python", "Electron", "Hugging Face", "Speech Recognition", "OpenAI API"],
        links: ProjectLinks {
            repository: Some("https://github.com/niteshcipher/Aeris-Ai"),
            live: None,
        },
    },
    Project {
        title: "Iztend",
        tagline: "Full-stack eCommerce website with secure payments.",
        description: "Iztend is a MERN-based full-stack eCommerce platform offering product browsing, cart management, and Stripe-powered payment gateway for a smooth shopping experience.",
        image_path: "/iztend.png",
        tech: &["React", "Node.js", "MongoDB", "Stripe API"],
        links: ProjectLinks {
            repository: Some("https://github.com/RajanPatel0/E-Comm"),
            live: Some("#"),
        },
    },
    Project {
        title: "Pixel Prism",
        tagline: "A minimal 3D cube runner built with Three.js.",
        description: "Pixel Prism is a fun and minimalistic cube runner game using Three.js and WebGL, showcasing creative 3D rendering and web animation techniques.",
        image_path: "/pixelprism.png",
        tech: &["Three.js", "JavaScript", "WebGL"],
        links: ProjectLinks {
            repository: Some("https://github.com/niteshcipher/pixel-prism"),
            live: Some("https://pixel-prism.onrender.com"),
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    /// devicon class name
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "LinkedIn Profile",
        url: "https://www.linkedin.com/in/nitesh-kumar-203a85274/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "GitHub Profile",
        url: "https://github.com/niteshcipher",
        icon: "devicon-github-original",
    },
    SocialLink {
        label: "Instagram Profile",
        url: "https://www.instagram.com/verseofnitesh",
        icon: "devicon-instagram-plain",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub about_title: &'static str,
    pub about: &'static str,
    pub portrait_path: &'static str,
    pub email: &'static str,
    pub contact_blurb: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Nitesh Kumar",
    greeting: "Namaste(); I'm",
    headline: "Your Go-To MERN Stack Enthusiast",
    summary: "I'm a passionate MERN Stack Developer and 2nd-year CSE student, dedicated to building user-friendly web applications and solving real-world problems through technology. I thrive on innovation, continuous learning, and creating meaningful digital experiences.",
    about_title: "A Brief Intro",
    about: "I'm a developer obsessed with innovation, someone who sees technology not just as a tool but as a medium for creativity. My work revolves around building intelligent, adaptive, and aesthetically designed digital systems. Whether it's integrating AI into real world applications or engineering complex front-end ecosystems, I'm constantly exploring how to make technology feel more human. Every project I build is a step toward redefining how people interact with the digital world.",
    portrait_path: "/portrait.png",
    email: "nitesh13122004@gmail.com",
    contact_blurb: "I'm always open to discussing new projects, creative ideas, or opportunities to be part of an ambitious vision.",
};

/// Public address of the deployed site, set with `SITE_URL` at build time.
pub const SITE_URL: Option<&str> = option_env!("SITE_URL");

/// schema.org `Person` document for the page head.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonDocument {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'static str>,
    email: String,
    job_title: &'static str,
    description: &'static str,
    same_as: Vec<&'static str>,
    knows_about: Vec<&'static str>,
}

impl PersonDocument {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: profile.name,
            url: SITE_URL,
            email: format!("mailto:{}", profile.email),
            job_title: profile.headline,
            description: profile.summary,
            same_as: SOCIAL_LINKS.iter().map(|l| l.url).collect(),
            knows_about: SKILLS
                .iter()
                .flat_map(|c| c.items.iter().map(|s| s.name))
                .collect(),
        }
    }
}

pub fn person_json_ld() -> String {
    match serde_json::to_string(&PersonDocument::from_profile(&PROFILE)) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("could not serialize person document: {e}");
            String::new()
        }
    }
}

/// Year the site was built, stamped by build.rs.
pub fn build_year() -> i32 {
    use chrono::{DateTime, Datelike, Utc};

    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_ids_unique() {
        let ids = NAV_LINKS.iter().map(|l| l.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_LINKS.len());
        assert_eq!(NAV_LINKS[0].id, "home");
    }

    #[test]
    fn test_skill_order() {
        let names = SKILLS.iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Technical Skills", "Tools & Platforms", "Creative Skills"]
        );
        assert_eq!(SKILLS[0].items.len(), 8);
        assert_eq!(SKILLS[0].items[0].name, "React");
        assert!(SKILLS[0].items[1].logo_url.starts_with("https://cdn.jsdelivr.net/gh/devicons/"));
    }

    #[test]
    fn test_layout_alternates() {
        let layouts = (0..PROJECTS.len())
            .map(Layout::for_index)
            .collect::<Vec<_>>();
        assert_eq!(
            layouts,
            vec![
                Layout::Normal,
                Layout::Reverse,
                Layout::Normal,
                Layout::Reverse,
                Layout::Normal
            ]
        );
    }

    #[test]
    fn test_placeholder_links_hidden() {
        let hershield = &PROJECTS[0];
        assert!(hershield.links.repository().is_some());
        assert_eq!(hershield.links.live(), None);
        assert_eq!(
            PROJECTS[1].links.live(),
            Some("https://frostpro-1.onrender.com/")
        );
        assert_eq!(PROJECTS[2].links.live(), None);
    }

    #[test]
    fn test_project_tags_unique() {
        for p in PROJECTS.iter() {
            let tags = p.tech.iter().collect::<HashSet<_>>();
            assert_eq!(tags.len(), p.tech.len(), "duplicate tag in {}", p.title);
        }
    }

    #[test]
    fn test_json_ld() {
        let doc: serde_json::Value = serde_json::from_str(&person_json_ld()).unwrap();
        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["name"], PROFILE.name);
        assert_eq!(doc["jobTitle"], PROFILE.headline);
        // only published when the deployment says where it lives
        assert_eq!(doc.get("url").and_then(|v| v.as_str()), SITE_URL);
        assert_eq!(doc["sameAs"].as_array().map(|a| a.len()), Some(3));
        assert!(doc["knowsAbout"]
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v == "Figma"));
    }

    #[test]
    fn test_build_year_sane() {
        assert!(build_year() >= 2024);
    }
}
