//! Fixed vocabularies shared by the analysis stages.
//!
//! All tables are read-only constants; nothing here is mutated at runtime.

/// Function words ignored by keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "were", "been",
    "be", "have", "has", "had", "do", "does", "did", "will", "would",
    "should", "could", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "what",
    "which", "who", "whom", "whose", "where", "when", "why", "how", "all",
    "each", "every", "both", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "just", "now", "then", "here", "there", "about", "above", "below", "up",
    "down", "out", "off", "over", "under", "again", "further", "once",
];

/// Terms kept as keywords even when they occur only once.
pub const TECHNICAL_TERMS: &[&str] = &[
    "javascript", "python", "java", "react", "angular", "vue", "node",
    "sql", "database", "api", "aws", "cloud", "agile", "scrum",
    "management", "leadership", "analytics", "marketing", "sales",
    "development", "engineering", "design", "analysis", "strategy",
    "project", "team", "customer", "client", "business", "product",
    "service", "software", "system", "application", "platform",
    "experience", "years", "bachelor", "master", "degree", "certification",
    "communication", "collaboration", "problem", "solving", "creative",
    "innovative", "results", "driven", "performance", "improvement",
];

/// Case-insensitive skill patterns, one per category
/// (technical stack, soft skills, tools, methodologies).
pub const SKILL_PATTERNS: &[&str] = &[
    r"(?i)\b(javascript|python|java|react|angular|vue|node\.?js|typescript|html|css|sql|mongodb|postgresql|mysql|aws|azure|gcp|docker|kubernetes|git|github|gitlab)\b",
    r"(?i)\b(leadership|communication|teamwork|problem solving|analytical|creative|strategic|collaboration|management|negotiation)\b",
    r"(?i)\b(excel|word|powerpoint|outlook|salesforce|jira|confluence|slack|trello|asana)\b",
    r"(?i)\b(agile|scrum|kanban|waterfall|devops|ci/cd|tdd|bdd)\b",
];

/// Header that introduces a free-form skill list, e.g. `Skills: Rust, Go`.
pub const SKILL_LIST_PATTERN: &str =
    r"(?i)(?:skills?|technologies?|tools?|proficiencies?)[:\s]+([^.\n]+)";

/// Separators inside a harvested skill list.
pub const SKILL_LIST_SEPARATORS: &[char] = &[',', ';', '-', '\n', '•', '·', '▪', '◦'];

/// Filler phrases dropped from key-phrase extraction (substring match).
pub const FILLER_PHRASES: &[&str] = &[
    "the company", "the team", "the role", "the position", "the candidate",
    "will be", "must have", "should have",
];

/// Verbs counted by the signal scanner.
pub const ACTION_VERBS: &[&str] = &[
    "achieved", "managed", "developed", "implemented", "created", "led",
    "improved", "designed", "executed", "coordinated", "analyzed", "optimized",
    "increased", "reduced", "established", "built", "delivered", "transformed",
    "launched", "initiated", "supervised", "mentored", "collaborated",
    "streamlined", "enhanced",
];

/// Verbs the roadmap recommends; a superset of [`ACTION_VERBS`].
pub const RECOMMENDED_VERBS: &[&str] = &[
    "achieved", "managed", "developed", "implemented", "created", "led",
    "improved", "designed", "executed", "coordinated", "analyzed", "optimized",
    "increased", "reduced", "established", "built", "delivered", "transformed",
    "launched", "initiated", "supervised", "mentored", "collaborated",
    "streamlined", "enhanced", "generated", "secured", "expanded", "innovated",
];

/// Sample quantified statements offered when a resume lacks metrics.
pub const QUANTIFIABLE_EXAMPLES: &[&str] = &[
    "Increased sales by 25%",
    "Reduced costs by $50,000",
    "Managed team of 10 people",
    "Improved efficiency by 30%",
    "Generated $1M in revenue",
    "Completed 50+ projects",
    "Achieved 95% customer satisfaction",
    "Reduced processing time by 40%",
];

pub const PHD_TERMS: &[&str] = &["phd", "ph.d", "doctorate", "doctoral"];

pub const MASTER_TERMS: &[&str] = &[
    "master", "master's", "ma", "ms", "msc", "m.a.", "m.s.", "mba",
];

pub const BACHELOR_TERMS: &[&str] = &[
    "bachelor", "bachelor's", "ba", "bs", "bsc", "b.a.", "b.s.",
];

pub const DEGREE_TERMS: &[&str] = &["degree", "diploma", "certification", "certificate"];
