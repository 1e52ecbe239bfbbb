//! # Catalog Data
//!
//! The six projects shown in the gallery, in display order.

use super::project::{Category, Project};

const SOURCE_ROOT: &str = "https://github.com/PrakashBind/";

/// The catalog. Fixed size, read-only for the process lifetime.
pub static CATALOG: [Project; 6] = [
    Project {
        id: 1,
        title: "Netflix Clone",
        description: "A feature-rich Netflix clone with user authentication, content browsing, and video playback functionality.",
        image: "https://images.pexels.com/photos/5082579/pexels-photo-5082579.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "Node.js", "Express", "MongoDB", "Redux"],
        category: Category::FullStack,
        demo_link: "/not-found",
        source_link: SOURCE_ROOT,
    },
    Project {
        id: 2,
        title: "E-Commerce Platform",
        description: "Complete e-commerce solution with product catalog, shopping cart, checkout, and admin dashboard.",
        image: "https://images.pexels.com/photos/5076520/pexels-photo-5076520.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["MERN Stack", "JWT", "Redux", "RESTful API"],
        category: Category::FullStack,
        demo_link: "/not-found",
        source_link: "https://github.com/PrakashBind/MERN-Ecommerce-App",
    },
    Project {
        id: 3,
        title: "Task Management App",
        description: "Collaborative task manager with real-time updates, task assignments, and progress tracking.",
        image: "https://images.pexels.com/photos/6804604/pexels-photo-6804604.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "Node.js", "MongoDB"],
        category: Category::FullStack,
        demo_link: "/not-found",
        source_link: SOURCE_ROOT,
    },
    Project {
        id: 4,
        title: "Weather Dashboard",
        description: "Interactive weather app with location-based forecasts, historical data, and visual charts.",
        image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "Weather API", "Chart.js"],
        category: Category::Frontend,
        demo_link: "/not-found",
        source_link: SOURCE_ROOT,
    },
    Project {
        id: 5,
        title: "Blog API",
        description: "RESTful API for a blogging platform with authentication, posts, comments, and user management.",
        image: "https://images.pexels.com/photos/4974915/pexels-photo-4974915.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["Node.js", "Express", "MongoDB", "JWT", "React"],
        category: Category::Backend,
        demo_link: "/not-found",
        source_link: SOURCE_ROOT,
    },
    Project {
        id: 6,
        title: "Portfolio Website",
        description: "Responsive portfolio website with dark mode, animations, and contact form.",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "Bootstrap 5", "Motion"],
        category: Category::Frontend,
        demo_link: "/not-found",
        source_link: SOURCE_ROOT,
    },
];
