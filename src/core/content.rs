// Folio - core/content.rs
//
// The portfolio's static content. Everything here is compile-time data;
// panels only ever read it.

use super::model::{Degree, Job, Profile, Project, Skill, SocialLink};

pub const PROFILE: Profile = Profile {
    name: "Your Name",
    title: "Web Developer",
};

pub const HERO_HEADLINE: &str = "Welcome to My Portfolio";
pub const HERO_TAGLINE: &str = "Crafting digital experiences with code and creativity";
pub const HERO_CTA: &str = "View My Work";

pub const ABOUT_HEADING: &str = "About Me";
pub const ABOUT_TEXT: &str = "I'm a passionate web developer with a keen eye for design and a \
love for creating seamless user experiences. With expertise in modern web technologies, I bring \
ideas to life through clean, efficient code and intuitive interfaces.";

/// Skill names in display order. Proficiency is derived from position.
const SKILL_NAMES: [&str; 8] = [
    "React",
    "Node.js",
    "TypeScript",
    "UI/UX Design",
    "GraphQL",
    "Next.js",
    "TailwindCSS",
    "MongoDB",
];

/// Proficiency of the first skill; each following skill is 5 points lower.
const TOP_SKILL_LEVEL: u8 = 90;
const SKILL_LEVEL_STEP: u8 = 5;

pub const INTERESTS: [&str; 5] = [
    "Web Development",
    "UI/UX Design",
    "Machine Learning",
    "Open Source",
    "Tech Writing",
];

pub const EXPERIENCE_HEADING: &str = "Work Experience";

pub const JOBS: [Job; 3] = [
    Job {
        title: "Senior Web Developer",
        company: "Tech Innovators Inc.",
        period: "2020 - Present",
        description: "Lead development of complex web applications, mentor junior developers, \
and implement best practices.",
    },
    Job {
        title: "Frontend Developer",
        company: "Creative Solutions Ltd.",
        period: "2018 - 2020",
        description: "Developed responsive and accessible user interfaces for various client \
projects.",
    },
    Job {
        title: "Junior Developer",
        company: "StartUp Ventures",
        period: "2016 - 2018",
        description: "Assisted in the development of web applications and gained experience in \
full-stack development.",
    },
];

pub const EDUCATION_HEADING: &str = "Education";

pub const DEGREES: [Degree; 2] = [
    Degree {
        degree: "Master of Computer Science",
        school: "University of Technology",
        year: "2016",
        description: "Specialized in Artificial Intelligence and Machine Learning",
    },
    Degree {
        degree: "Bachelor of Software Engineering",
        school: "State University",
        year: "2014",
        description: "Focused on Web Technologies and Database Management",
    },
];

pub const PROJECTS_HEADING: &str = "Projects";
pub const PROJECT_CTA: &str = "View Project";

pub const PROJECTS: [Project; 4] = [
    Project {
        name: "E-commerce Platform",
        tech: "React, Node.js, MongoDB",
        description: "A full-stack e-commerce solution with real-time inventory management.",
    },
    Project {
        name: "Task Management App",
        tech: "Vue.js, Firebase",
        description: "A collaborative task management tool with real-time updates.",
    },
    Project {
        name: "Social Media Dashboard",
        tech: "React, D3.js, Express",
        description: "An analytics dashboard for social media performance tracking.",
    },
    Project {
        name: "Fitness Tracker",
        tech: "React Native, GraphQL",
        description: "A mobile app for tracking workouts and nutrition with personalized insights.",
    },
];

pub const CONTACT_HEADING: &str = "Contact Me";
pub const CONTACT_SUBMIT: &str = "Send Message";

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        glyph: "\u{1f431}",
        url: "#",
    },
    SocialLink {
        name: "LinkedIn",
        glyph: "\u{1f517}",
        url: "#",
    },
    SocialLink {
        name: "Email",
        glyph: "\u{2709}",
        url: "#",
    },
];

/// Skills with their derived proficiency, in display order.
pub fn skills() -> Vec<Skill> {
    SKILL_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| Skill {
            name,
            level: TOP_SKILL_LEVEL.saturating_sub(SKILL_LEVEL_STEP.saturating_mul(i as u8)),
        })
        .collect()
}
