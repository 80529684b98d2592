//! Static biography data store.
//!
//! Fixed personal facts compiled into the binary: profile header, education,
//! employment history, projects, publications, and skill groups. Nothing here
//! changes at runtime, and every resume section maps to a non-empty record
//! set, so lookups never fail.

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub contact: &'static str,
}

pub struct EducationRecord {
    pub institution: &'static str,
    pub degree: &'static str,
    pub date_range: &'static str,
}

pub struct ExperienceRecord {
    pub title: &'static str,
    pub organization: &'static str,
    pub date_range: &'static str,
    pub achievements: &'static [&'static str],
}

pub struct ProjectRecord {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct PublicationRecord {
    pub title: &'static str,
    pub venue: &'static str,
    pub year: u16,
    pub doi: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    name: "Prabhas Mahanti",
    headline: "Generative AI Developer & Machine Learning Engineer",
    contact: "prabhasnaidu2004@gmail.com | Vizianagaram, Andhra Pradesh, India",
};

pub static EDUCATION: &[EducationRecord] = &[EducationRecord {
    institution: "Amrita Vishwa Vidyapeetham",
    degree: "Bachelors of Technology in Computer Science Artificial Intelligence",
    date_range: "2021-2025",
}];

pub static EXPERIENCE: &[ExperienceRecord] = &[
    ExperienceRecord {
        title: "Associate Software Engineer - GEN AI",
        organization: "Connected Value Health Solutions",
        date_range: "Jan 2025 - Present",
        achievements: &[
            "Built a React based LLM voice agent for human-like calls to automate bookings, \
             reschedules, cancellations, and info via PostgreSQL",
            "Integrated with AWS services for real-time data processing and analytics",
        ],
    },
    ExperienceRecord {
        title: "AI/ML Intern",
        organization: "OnFocus Software Pvt Ltd.",
        date_range: "May 2024 - June 2024",
        achievements: &[
            "Developed PropGPT using LangChain and RAG to streamline property data workflows",
            "Built a dataset of 1,000+ TGRERA-registered properties for accurate real estate \
             information retrieval",
        ],
    },
];

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        name: "MedGPT",
        description: "A conversational AI assistant that helps users analyze their medical \
                      symptoms and recommends nearby doctors in Chennai.",
    },
    ProjectRecord {
        name: "GYM Pro Manager",
        description: "A gym management system that allows administrators to manage users and \
                      create workout slots, while users can book these slots.",
    },
    ProjectRecord {
        name: "Q&A Chatbot for Government Schemes",
        description: "A chatbot that answers questions about government schemes and provides \
                      information about the schemes.",
    },
];

pub static PUBLICATIONS: &[PublicationRecord] = &[PublicationRecord {
    title: "Handwritten Digit Recognition using Convolutional Neural Network",
    venue: "Technology & Engineering Management Conference - Asia Pacific (TEMSCON-ASPAC), IEEE",
    year: 2024,
    doi: "10.1109/AIDE57418.2024.10531394",
}];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        skills: &["React", "HTML5", "CSS3", "JavaScript"],
    },
    SkillGroup {
        category: "Languages",
        skills: &["Python", "Java", "SQL"],
    },
    SkillGroup {
        category: "Backend & Cloud",
        skills: &["REST APIs", "MongoDB", "PostgreSQL", "AWS"],
    },
    SkillGroup {
        category: "AI/ML",
        skills: &["LangChain", "LLMs", "RAG", "Machine Learning"],
    },
];
