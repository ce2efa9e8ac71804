//! Fixed keyword vocabularies shared by the extraction and scoring components

/// Industry keyword lists used for industry detection and the global skill
/// fallback scan. Order matters: keyword analysis breaks ties by taking the
/// first industry that reaches the highest match count.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Software Development",
        &[
            "JavaScript", "React", "Angular", "Vue", "Node.js", "Express", "Python",
            "Java", "C#", ".NET", "REST API", "GraphQL", "AWS", "Azure", "CI/CD",
            "Docker", "Kubernetes", "Microservices", "Agile", "DevOps", "Git", "GitHub",
        ],
    ),
    (
        "Data Science",
        &[
            "Python", "R", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch",
            "Pandas", "NumPy", "SQL", "Data Visualization", "Tableau", "Power BI",
            "Statistics", "Big Data", "Hadoop", "Spark", "NLP", "Computer Vision",
        ],
    ),
    (
        "Marketing",
        &[
            "Digital Marketing", "SEO", "Content Marketing", "Social Media", "Google Analytics",
            "Campaign Management", "A/B Testing", "Marketing Automation", "CRM", "HubSpot",
            "Email Marketing", "Brand Management", "Market Research", "Growth Hacking",
        ],
    ),
    (
        "Finance",
        &[
            "Financial Analysis", "Accounting", "Budgeting", "Forecasting", "Excel",
            "Financial Modeling", "QuickBooks", "Risk Management", "Taxation", "Audit",
            "Investment", "Portfolio Management", "CPA", "SAP", "Bloomberg",
        ],
    ),
    (
        "Healthcare",
        &[
            "Electronic Health Records", "EHR", "Patient Care", "Clinical", "Medical Coding",
            "Healthcare Compliance", "HIPAA", "Medical Terminology", "Billing", "ICD-10",
            "Telehealth", "Care Coordination", "Epic", "Cerner", "HL7",
        ],
    ),
];

/// Looser, lowercased terms related to each industry, used for partial
/// industry matches during job scoring.
pub const RELATED_INDUSTRY_TERMS: &[(&str, &[&str])] = &[
    (
        "Software Development",
        &[
            "developer", "software", "engineer", "programming", "web", "app", "frontend",
            "backend", "fullstack", "devops", "coding",
        ],
    ),
    (
        "Data Science",
        &[
            "data", "analytics", "analyst", "scientist", "machine learning",
            "artificial intelligence", "statistics", "modeling", "visualization", "ml", "ai",
        ],
    ),
    (
        "Marketing",
        &[
            "marketing", "digital", "seo", "content", "social media", "advertising", "brand",
            "campaign", "market research", "growth",
        ],
    ),
    (
        "Finance",
        &[
            "finance", "accounting", "financial", "analyst", "banking", "investment", "budget",
            "tax", "audit", "controller",
        ],
    ),
    (
        "Healthcare",
        &[
            "health", "medical", "clinical", "patient", "healthcare", "nurse", "doctor",
            "therapy", "pharmaceutical", "wellness",
        ],
    ),
    (
        "Education",
        &[
            "education", "teaching", "teacher", "instructor", "curriculum", "student",
            "learning", "school", "tutor", "professor",
        ],
    ),
    (
        "E-commerce",
        &[
            "e-commerce", "ecommerce", "retail", "online", "marketplace", "shop", "sales",
            "product", "customer", "merchant",
        ],
    ),
    (
        "Consulting",
        &[
            "consulting", "consultant", "advisor", "strategy", "business", "management",
            "solution", "client", "project", "engagement",
        ],
    ),
    (
        "Manufacturing",
        &[
            "manufacturing", "production", "operations", "quality", "assembly", "engineer",
            "supply chain", "logistics", "process", "industrial",
        ],
    ),
];

/// Programming languages and tools scanned across the whole document,
/// regardless of whether a skills section was found.
pub const PROGRAMMING_KEYWORDS: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "C#", "Ruby", "PHP", "Swift", "Kotlin", "Go",
    "HTML", "CSS", "SQL", "NoSQL", "MongoDB", "MySQL", "PostgreSQL", "Redis", "Firebase",
    "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring", "Rails",
    "TensorFlow", "PyTorch", "Keras", "scikit-learn", "pandas", "NumPy", "Matplotlib",
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Jenkins", "Git", "GitHub",
];

/// Technical and soft skills looked for inside job postings when computing
/// the skill-overlap bonus. Lowercased, matched as plain substrings.
pub const JOB_SCAN_SKILLS: &[&str] = &[
    // Technical
    "javascript", "python", "java", "c++", "ruby", "php", "sql", "nosql",
    "react", "angular", "vue", "node", "express", "django", "flask",
    "aws", "azure", "gcp", "cloud", "docker", "kubernetes", "devops",
    "machine learning", "data science", "artificial intelligence", "ai", "ml",
    // Soft
    "communication", "teamwork", "leadership", "project management",
    "problem solving", "critical thinking", "time management", "creativity",
    "organization", "adaptability", "analytical", "detail-oriented",
];

/// Words too generic to count as keywords or skills.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "our", "your", "their", "have",
    "will", "from", "about", "been", "must", "should", "would", "could", "they",
    "them", "what", "when", "where", "which", "were", "there", "into", "also",
    "than", "then", "being", "does", "more", "most", "such", "only", "some",
    "very", "like", "just", "much", "many", "over", "well", "years", "year",
    "month", "day", "time", "team", "work", "working", "position", "role", "job",
    "candidate", "candidates", "applicant", "applicants", "company", "ability",
    "experience", "skills", "required", "responsibilities", "qualifications",
];

/// Resume section synonym table. The first entry of each group is the
/// canonical section name.
pub const SECTION_SYNONYMS: &[&[&str]] = &[
    &["experience", "work experience", "employment history", "work history", "professional experience"],
    &["education", "academic background", "educational background", "academic history"],
    &["skills", "technical skills", "core competencies", "key skills", "proficiencies"],
    &["projects", "portfolio", "notable projects"],
    &["certifications", "certificates", "credentials", "qualifications"],
    &["contact", "contact information", "personal information"],
];

/// Sections an ATS expects to always find.
pub const CRITICAL_SECTIONS: &[&str] = &["experience", "education", "skills"];

/// Headings that terminate a skills section.
pub const SKILLS_SECTION_STOPS: &[&str] = &[
    "experience", "education", "projects", "certifications", "references",
    "additional information",
];

/// Headings that terminate an education section.
pub const EDUCATION_SECTION_STOPS: &[&str] = &[
    "experience", "skills", "projects", "certifications", "references",
    "additional information",
];

/// Headings that terminate an experience section.
pub const EXPERIENCE_SECTION_STOPS: &[&str] = &[
    "education", "skills", "projects", "certifications", "references",
    "additional information",
];

/// Verbs that signal achievement-oriented bullet points.
pub const ACTION_VERBS: &[&str] = &[
    "developed", "created", "managed", "led", "implemented", "designed", "analyzed",
    "resolved", "improved", "increased", "decreased", "reduced", "negotiated",
    "established", "coordinated", "generated", "maintained", "delivered", "achieved",
];

/// Experience levels ordered from junior to executive; adjacency on this
/// scale earns partial credit during job matching.
pub const EXPERIENCE_LEVELS: &[&str] = &["Entry Level", "Mid-Level", "Senior", "Executive"];

/// Related terms for the given industry, or an empty slice when the industry
/// is unknown.
pub fn related_terms(industry: &str) -> &'static [&'static str] {
    RELATED_INDUSTRY_TERMS
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, terms)| *terms)
        .unwrap_or(&[])
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_terms_lookup() {
        assert!(related_terms("Software Development").contains(&"developer"));
        assert!(related_terms("Underwater Basket Weaving").is_empty());
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("experience"));
        assert!(!is_stop_word("kubernetes"));
    }

    #[test]
    fn test_section_synonyms_have_canonical_names() {
        for group in SECTION_SYNONYMS {
            assert!(!group.is_empty());
        }
        for critical in CRITICAL_SECTIONS {
            assert!(SECTION_SYNONYMS.iter().any(|g| g[0] == *critical));
        }
    }
}
