//! Keyword lexicons used by the feature extractor and the faculty matcher
//!
//! Everything here is plain configuration data. It is loaded once (from
//! defaults or the config file) and compiled into matchers by
//! [`crate::processing::analyzer::ResumeAnalyzer`].

use crate::processing::document::{SectionAliases, SectionKind};
use crate::processing::faculty::Faculty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub action_verbs: Vec<String>,
    pub filler_phrases: Vec<String>,
    pub ats_keywords: Vec<String>,
    pub pronouns: Vec<String>,
    pub faculty_keywords: FacultyKeywords,
    pub sections: Vec<SectionAliases>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacultyKeywords {
    pub sciences: Vec<String>,
    pub business: Vec<String>,
    pub engineering: Vec<String>,
    pub arts: Vec<String>,
}

impl FacultyKeywords {
    pub fn for_faculty(&self, faculty: Faculty) -> &[String] {
        match faculty {
            Faculty::Sciences => &self.sciences,
            Faculty::Business => &self.business,
            Faculty::Engineering => &self.engineering,
            Faculty::Arts => &self.arts,
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            action_verbs: owned(&[
                "achieved", "managed", "developed", "implemented", "created",
                "designed", "led", "improved", "increased", "reduced",
                "optimized", "collaborated", "executed", "delivered", "built",
                "launched", "automated", "streamlined", "established", "coordinated",
                "analyzed", "engineered", "mentored", "negotiated", "organized",
                "spearheaded", "resolved", "generated", "deployed", "migrated",
            ]),
            filler_phrases: owned(&[
                "assisted", "helped", "tried", "attempted", "hopefully",
                "maybe", "somewhat", "kind of", "sort of",
                "responsible for", "duties included", "hard worker", "hard-working",
                "team player", "go-getter", "think outside the box", "self-starter",
            ]),
            ats_keywords: default_ats_keywords(),
            pronouns: owned(&[
                "i", "me", "my", "mine", "myself", "we", "our", "ours",
                "i'm", "i've", "i'd", "i'll",
            ]),
            faculty_keywords: FacultyKeywords::default(),
            sections: default_sections(),
        }
    }
}

impl Default for FacultyKeywords {
    fn default() -> Self {
        Self {
            sciences: owned(&[
                "research", "publication", "lab", "laboratory", "methodology",
                "data analysis", "experiment", "journal", "hypothesis", "peer-reviewed",
                "statistical",
            ]),
            business: owned(&[
                "revenue", "growth", "strategy", "management", "leadership",
                "budget", "client", "sales", "marketing", "analytics", "roi", "kpi",
            ]),
            engineering: owned(&[
                "project", "technical", "design", "implementation", "software",
                "system", "tool", "programming", "development", "build",
                "cad", "algorithm", "circuit",
            ]),
            arts: owned(&[
                "portfolio", "creative", "exhibition", "design", "curation",
                "visual", "installation", "commission", "collaboration",
            ]),
        }
    }
}

fn default_sections() -> Vec<SectionAliases> {
    let section = |kind, aliases: &[&str]| SectionAliases {
        kind,
        aliases: owned(aliases),
    };

    vec![
        section(SectionKind::Contact, &["contact", "contact information", "contact details"]),
        section(
            SectionKind::Summary,
            &["summary", "professional summary", "profile", "professional profile", "objective", "career objective", "about"],
        ),
        section(
            SectionKind::Experience,
            &[
                "experience", "work experience", "professional experience", "work history",
                "employment", "employment history", "career history",
            ],
        ),
        section(
            SectionKind::Education,
            &["education", "academic background", "academic history", "qualifications", "education and training"],
        ),
        section(
            SectionKind::Skills,
            &["skills", "technical skills", "key skills", "core competencies", "competencies", "expertise"],
        ),
        section(SectionKind::Projects, &["projects", "selected projects", "notable projects", "portfolio"]),
        section(SectionKind::Certifications, &["certifications", "certificates", "licenses"]),
        section(SectionKind::References, &["references", "referees"]),
    ]
}

fn default_ats_keywords() -> Vec<String> {
    owned(&[
        // Programming languages
        "rust", "python", "javascript", "typescript", "java", "c++", "c#", "golang", "ruby",
        "php", "swift", "kotlin", "scala", "haskell", "matlab", "sql",
        // Web technologies
        "react", "vue", "angular", "svelte", "html", "css", "node.js", "express",
        // Backend and infrastructure
        "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible",
        "jenkins", "ci/cd", "devops", "microservices", "api", "rest", "graphql",
        "grpc", "redis", "elasticsearch", "nginx", "linux", "git",
        // Databases
        "postgresql", "mysql", "mongodb", "cassandra", "dynamodb", "sqlite",
        // Data and machine learning
        "machine learning", "deep learning", "tensorflow", "pytorch", "pandas",
        "numpy", "spark", "hadoop", "kafka", "airflow", "excel", "tableau",
        // Testing and process
        "testing", "tdd", "agile", "scrum", "kanban", "jira",
        // Soft skills
        "leadership", "communication", "teamwork", "problem solving", "critical thinking",
        "time management", "project management", "collaboration", "mentoring",
        "presentation", "negotiation", "customer service", "stakeholder",
    ])
}
