//! Role catalog: job roles and their required skill sets

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A target job role with its required skills.
///
/// The declaration order of `skills` is significant: the matcher partitions
/// skills in this order, and the suggestion generator names missing skills
/// in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub skills: Vec<String>,
}

/// Static lookup table from role id to role definition.
///
/// Loaded once from configuration at startup and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    roles: Vec<Role>,
}

impl SkillCatalog {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn get(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(default_roles())
    }
}

/// Synonym/abbreviation table per canonical skill name.
///
/// Keys are canonical skill names as they appear in role definitions;
/// values are alternate spellings recognized by the matcher. The table is
/// configuration data and extensible without code changes.
pub type SynonymTable = HashMap<String, Vec<String>>;

pub fn default_roles() -> Vec<Role> {
    vec![
        Role {
            id: "frontend".to_string(),
            name: "Frontend Developer".to_string(),
            icon: "layout".to_string(),
            skills: vec![
                "JavaScript", "TypeScript", "React", "HTML", "CSS",
                "Responsive Design", "Git", "Webpack",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        Role {
            id: "backend".to_string(),
            name: "Backend Engineer".to_string(),
            icon: "server".to_string(),
            skills: vec![
                "Node", "Python", "SQL", "REST API", "Docker",
                "PostgreSQL", "Redis", "Microservices",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        Role {
            id: "fullstack".to_string(),
            name: "Full Stack Developer".to_string(),
            icon: "layers".to_string(),
            skills: vec![
                "JavaScript", "React", "Node", "SQL", "REST API",
                "Git", "Docker", "CSS",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        Role {
            id: "data-scientist".to_string(),
            name: "Data Scientist".to_string(),
            icon: "bar-chart".to_string(),
            skills: vec![
                "Python", "Machine Learning", "SQL", "Pandas", "NumPy",
                "Statistics", "TensorFlow", "Data Visualization",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        Role {
            id: "devops".to_string(),
            name: "DevOps Engineer".to_string(),
            icon: "settings".to_string(),
            skills: vec![
                "Docker", "Kubernetes", "AWS", "CI/CD", "Terraform",
                "Linux", "Bash", "Monitoring",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        Role {
            id: "mobile".to_string(),
            name: "Mobile Developer".to_string(),
            icon: "smartphone".to_string(),
            skills: vec![
                "Swift", "Kotlin", "React Native", "Flutter", "iOS",
                "Android", "REST API", "Git",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
    ]
}

pub fn default_synonyms() -> SynonymTable {
    let entries: &[(&str, &[&str])] = &[
        ("JavaScript", &["JS", "ECMAScript"]),
        ("TypeScript", &["TS"]),
        ("Node", &["Node.js", "NodeJS"]),
        ("React", &["React.js", "ReactJS"]),
        ("Kubernetes", &["K8s"]),
        ("PostgreSQL", &["Postgres"]),
        ("Machine Learning", &["ML"]),
        ("CI/CD", &["Continuous Integration", "Continuous Delivery"]),
        ("REST API", &["RESTful", "REST"]),
        ("AWS", &["Amazon Web Services"]),
        ("Data Visualization", &["DataViz"]),
        ("Responsive Design", &["Mobile-First Design"]),
    ];

    entries
        .iter()
        .map(|(canonical, alts)| {
            (
                canonical.to_string(),
                alts.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}
