//! Static display content. Everything here is baked in at build time; none
//! of it has a lifecycle.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub github_repositories: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Arpit Pattani",
    role: "Software Developer",
    tagline: "Crafting elegant digital experiences with modern web \
              technologies. Passionate about creating efficient, \
              user-friendly applications.",
    email: "arpitpattani2004@gmail.com",
    github: "https://github.com/Arpit9945",
    github_repositories: "https://github.com/Arpit9945?tab=repositories",
    linkedin: "https://www.linkedin.com/in/arpit-soni-5035482a2",
};

/// Section ids targetable by smooth navigation, in page order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "experience"];

/// Role titles cycled in the hero heading.
pub const ROTATING_TITLES: [&str; 4] = [
    "Software Developer",
    "React.js Developer",
    "Next.js Developer",
    "Full Stack Developer",
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm Arpit Pattani, a passionate Software Developer with expertise in \
     modern web technologies. My journey in software development started \
     with a strong educational foundation and has evolved through hands-on \
     experience in creating robust applications.",
    "I specialize in building responsive web applications using React, \
     JavaScript, and Next.js, complemented by my backend skills in PHP and \
     MySQL. My approach combines technical excellence with creative \
     problem-solving to deliver exceptional user experiences.",
];

pub const SKILL_TAGS: [&str; 14] = [
    "HTML",
    "CSS/SCSS",
    "Bootstrap",
    "Tailwind",
    "ShadCN UI",
    "JavaScript",
    "React",
    "Redux/Redux-Toolkit",
    "Next.js",
    "PHP",
    "MySQL",
    "Firebase",
    "Vercel",
    "Git",
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
}

pub const EDUCATION: [Education; 3] = [
    Education {
        degree: "BSc Information Technology",
        institution: "Sanskruti College of Thoughts ( Oct-2021 to April-2024 )",
    },
    Education {
        degree: "Higher Secondary Education",
        institution: "Shree S.P. Vidhyalaya",
    },
    Education {
        degree: "Secondary Education",
        institution: "Shree S.P. Vidhyalaya",
    },
];

/// One axis of the skills radar chart. Ratings are on a 0–100 scale.
pub struct SkillRating {
    pub name: &'static str,
    pub rating: u32,
}

pub const SKILL_RATINGS: [SkillRating; 6] = [
    SkillRating { name: "React", rating: 90 },
    SkillRating { name: "JS", rating: 85 },
    SkillRating { name: "Redux", rating: 95 },
    SkillRating { name: "Firebase", rating: 80 },
    SkillRating { name: "Next.js", rating: 75 },
    SkillRating { name: "PHP", rating: 70 },
];

pub struct Proficiency {
    pub name: &'static str,
    pub value: u32,
}

pub const PROFICIENCIES: [Proficiency; 4] = [
    Proficiency { name: "Frontend Development", value: 90 },
    Proficiency { name: "Backend Development", value: 70 },
    Proficiency { name: "Responsive Design", value: 85 },
    Proficiency { name: "State Management", value: 90 },
];

pub const TOOLS: [&str; 4] = ["VS Code", "Git", "Vercel", "MySQL"];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub tech: &'static [&'static str],
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "WDesignKit WordPress Plugin",
        description: "A comprehensive WordPress plugin for creating and \
                      customizing websites with an intuitive interface.",
        image: "/projects/wdesignkit.png",
        image_alt: "WDesignKit plugin editor interface",
        tech: &["React JS", "PHP", "Next JS", "JavaScript", "SCSS"],
    },
    Project {
        title: "DataSphere",
        description: "A complete jewelry store management software with \
                      inventory tracking, sales management, and reporting \
                      features.",
        image: "/projects/datasphere.png",
        image_alt: "DataSphere inventory dashboard",
        tech: &["React", "Tailwind", "Firebase", "PHP", "MySQL"],
    },
];

pub struct Job {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const JOBS: [Job; 2] = [
    Job {
        company: "Posimyth Innovations",
        position: "React JS Developer",
        period: "January 2024 - Present",
        description: "Working on WDesignKit WordPress plugin development, \
                      implementing new features and optimizing performance. \
                      Collaborating with design and QA teams to deliver \
                      high-quality software solutions.",
        technologies: &["WordPress", "PHP", "JavaScript", "React JS", "Next JS", "SCSS"],
    },
    Job {
        company: "Felix IT Systems",
        position: "Full Stack Developer Trainee",
        period: "April 2023 - December 2023",
        description: "Worked as a Full Stack Developer with a primary focus \
                      on building responsive and dynamic web applications \
                      using React.js. Collaborated with design and backend \
                      teams to deliver scalable front-end solutions, optimize \
                      performance, and ensure seamless user experiences.",
        technologies: &["React", "PHP", "MySQL", "Bootstrap"],
    },
];

/// Labels floated around the hero portrait.
pub const HERO_BADGES: [&str; 5] = ["React", "JS", "HTML5", "CSS3", "PHP"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_known_section_ids() {
        assert_eq!(
            SECTION_IDS,
            ["home", "about", "skills", "projects", "experience"]
        );
    }

    #[test]
    fn skill_ratings_stay_on_chart_scale() {
        for skill in &SKILL_RATINGS {
            assert!(skill.rating <= 100, "{} exceeds scale", skill.name);
        }
    }

    #[test]
    fn proficiencies_are_percentages() {
        for proficiency in &PROFICIENCIES {
            assert!(proficiency.value <= 100);
        }
    }
}
