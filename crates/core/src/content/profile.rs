//! Owner profile, hero copy and about section.

use serde::Serialize;

use crate::motion::ROLE_TEXT;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    /// Typed out under the name
    pub role: &'static str,
    pub intro: &'static str,
    pub portrait: &'static str,
    /// Downloadable résumé, relative to the site root
    pub resume: &'static str,
    pub about: &'static [&'static str],
    /// Short line used in the footer
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Strength {
    pub title: &'static str,
    pub description: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Prakash Bind",
    greeting: "Hello, I'm",
    role: ROLE_TEXT,
    intro: "I build exceptional, responsive websites and web applications with modern technologies and best practices. Focused on creating scalable and maintainable solutions.",
    portrait: "/assets/profile.svg",
    resume: "/assets/resume.pdf",
    about: &[
        "I'm Prakash Bind, a MERN Stack Developer specializing in building fast, scalable, and user-focused web applications.",
        "With a solid foundation in JavaScript and the MERN stack (MongoDB, Express.js, React, Node.js), I specialize in building responsive, user-centric web applications. Over the past 1.5 years, I've consistently enhanced my skills, staying up to date with modern development practices and delivering scalable solutions.",
        "I take pride in writing clean, maintainable code and following best practices to deliver scalable, high-quality solutions. Outside of coding, I enjoy exploring new technologies, contributing to open source, and mentoring others in the developer community.",
    ],
    tagline: "A passionate MERN Stack Developer focused on building exceptional, responsive web applications with modern technologies and best practices.",
};

pub static STRENGTHS: [Strength; 6] = [
    Strength {
        title: "Frontend Development",
        description: "Creating responsive, dynamic UIs using modern frameworks like React.js.",
    },
    Strength {
        title: "Backend Development",
        description: "Developing robust and scalable APIs using Node.js and Express.js.",
    },
    Strength {
        title: "Database Design",
        description: "Designing efficient schemas and writing optimized queries using MongoDB and SQL.",
    },
    Strength {
        title: "Full Stack Solutions",
        description: "Developing complete web apps with smooth integration of frontend, backend, and database using MERN & SQL.",
    },
    Strength {
        title: "Problem Solving",
        description: "Applying analytical thinking to tackle complex technical challenges efficiently.",
    },
    Strength {
        title: "Collaboration",
        description: "Thriving in cross-functional teams to deliver high-impact projects efficiently.",
    },
];
