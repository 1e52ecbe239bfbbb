//! Skill levels and the development workflow timeline.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub description: &'static str,
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        skills: &[
            skill("HTML5 & CSS3", 90),
            skill("JavaScript", 70),
            skill("TypeScript", 45),
            skill("React.js", 88),
            skill("Redux", 70),
            skill("Next.js", 45),
            skill("Bootstrap 5", 50),
            skill("SASS/SCSS", 25),
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            skill("Node.js", 85),
            skill("Express.js", 88),
            skill("RESTful APIs", 90),
            skill("GraphQL", 35),
            skill("Authentication & Security", 85),
            skill("Websockets", 50),
        ],
    },
    SkillCategory {
        title: "Database",
        skills: &[
            skill("MongoDB", 90),
            skill("Mongoose", 88),
            skill("MySQL", 70),
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        skills: &[
            skill("Git & GitHub", 88),
            skill("AWS", 65),
            skill("Jest & Testing", 75),
            skill("Webpack", 75),
        ],
    },
];

pub static WORKFLOW: [WorkflowStep; 5] = [
    WorkflowStep {
        title: "Planning & Requirements",
        description: "Defining project scope, gathering requirements, and creating wireframes for a clear roadmap.",
    },
    WorkflowStep {
        title: "Design & Architecture",
        description: "Designing intuitive UI/UX, planning robust architecture, and organizing scalable code structure.",
    },
    WorkflowStep {
        title: "Development",
        description: "Writing clean, maintainable, and efficient code using best practices and design patterns.",
    },
    WorkflowStep {
        title: "Testing & QA",
        description: "Conducting rigorous cross-browser/device testing and handling edge cases to ensure stability.",
    },
    WorkflowStep {
        title: "Deployment & Maintenance",
        description: "Automating CI/CD pipelines, deploying applications, and providing continuous support.",
    },
];
