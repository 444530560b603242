//! Fixed vocabularies the generators draw from. Kept as in-code data tables;
//! changing the dataset means editing these lists.

/// Fixture hash; seeded accounts are never meant to be logged into.
pub const PASSWORD_HASH: &str = "$2b$12$seedfixturehash.not.a.real.credential";

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Casey", "Morgan", "Riley", "Quinn", "Avery", "Blake", "Cameron",
    "Jamie", "Drew", "Emery", "Finley", "Harper", "Kendall", "Logan", "Parker", "Reese", "Sage",
    "Skyler", "Tatum", "Wren", "Zion", "Adrian", "Bailey", "Charlie", "Dakota", "Eden", "Frankie",
    "Aria", "Bella", "Chloe", "Diana", "Eva", "Fiona", "Grace", "Hannah", "Iris", "Jade",
    "Kate", "Luna", "Maya", "Nina", "Opal", "Adam", "Ben", "Carl", "Dan", "Eli",
    "Finn", "Gabe", "Henry", "Ian", "Jack", "Kyle", "Leo", "Max", "Noah", "Owen",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker",
    "Hall", "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Kim", "Chen", "Singh",
    "Patel", "Kumar", "Silva", "Santos", "Costa", "Ferreira", "Almeida",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "icloud.com",
    "protonmail.com", "fastmail.com", "zoho.com", "mail.com", "aol.com",
    "live.com", "me.com", "msn.com", "gmx.com", "hey.com",
];

/// (name, description); the small profile seeds the first eight.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("Technology", "Articles on software, programming, and engineering"),
    ("Science", "Research, discoveries, and the scientific method"),
    ("Health", "Health, wellness, and medicine"),
    ("Education", "Learning, teaching, and personal growth"),
    ("Entertainment", "Film, television, culture, and leisure"),
    ("Sports", "Sports, fitness, and outdoor activity"),
    ("Business", "Business, entrepreneurship, and economics"),
    ("Travel", "Destinations, tourism, and adventure"),
    ("Food", "Recipes, cooking techniques, and gastronomy"),
    ("Art", "Art, design, photography, and creativity"),
    ("Music", "Music, instruments, and theory"),
    ("Literature", "Books, writing, and literary criticism"),
    ("History", "History, archaeology, and historical events"),
    ("Philosophy", "Philosophy, ethics, and critical thinking"),
    ("Psychology", "Human behavior and mental wellbeing"),
];

/// Tag names across tech and general topics. Deduplicated by slug at
/// generation time, so near-synonyms are safe to add here.
pub const TAGS: &[&str] = &[
    // Languages and frameworks
    "Rust", "Python", "JavaScript", "TypeScript", "Java", "Kotlin", "Swift", "Ruby", "PHP",
    "Elixir", "React", "Vue", "Angular", "Svelte", "Node.js", "Express", "Django", "Flask",
    "Rails", "Laravel",
    // Storage
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch", "Cassandra", "Neo4j",
    "InfluxDB", "TimescaleDB", "SQLite",
    // Tooling and platforms
    "Docker", "Kubernetes", "Terraform", "Ansible", "Jenkins", "GitLab", "GitHub",
    "Bitbucket", "Jira", "Confluence", "AWS", "Azure", "GCP", "DigitalOcean", "Heroku",
    "Vercel", "Netlify", "Cloudflare", "Fastly", "Akamai",
    // Data
    "Machine Learning", "Artificial Intelligence", "Data Science", "Big Data", "Analytics",
    "Business Intelligence", "ETL", "Data Warehousing", "Deep Learning", "Computer Vision",
    // Architecture
    "Microservices", "API Design", "REST", "GraphQL", "gRPC", "WebSockets", "Serverless",
    "Event-Driven", "CQRS", "Event Sourcing",
    // Security
    "Security", "Authentication", "Authorization", "OAuth", "JWT", "Encryption", "HTTPS",
    "TLS", "Penetration Testing", "Zero Trust",
    // Testing
    "Testing", "Unit Testing", "Integration Testing", "End-to-End Testing", "TDD", "BDD",
    "Performance Testing", "Load Testing", "Fuzzing", "Property Testing",
    // Operations
    "DevOps", "Continuous Integration", "Continuous Delivery", "Infrastructure as Code",
    "Monitoring", "Logging", "Tracing", "Alerting", "Metrics", "Observability",
    // General topics
    "Fitness", "Nutrition", "Medicine", "Psychology", "Wellness", "Yoga", "Meditation",
    "Exercise", "Sleep", "Learning", "Online Courses", "Certifications", "Study Skills",
    "Personal Development", "Productivity", "Habits", "Entrepreneurship", "Marketing",
    "Sales", "Finance", "Strategy", "Innovation", "Leadership", "Management", "Startups",
    "Design", "Illustration", "Architecture", "Fashion", "Interior Design", "Creativity",
    "Photography", "Tourism", "Adventure", "Culture", "Gastronomy", "Archaeology", "Nature",
    "Football", "Basketball", "Tennis", "Golf", "Running", "Cycling", "Swimming", "Climbing",
    "Instruments", "Music Theory", "Composition", "Production", "Concerts", "Festivals",
    "Books", "Writing", "Poetry", "Novels", "Essays",
];

pub const POST_TITLES: &[&str] = &[
    "Getting Started with Rust for Backend Services",
    "Building RESTful APIs That Age Well",
    "Docker for Developers: A Practical Guide",
    "PostgreSQL vs MySQL: Choosing a Database",
    "Microservices: Architecture and Trade-offs",
    "Machine Learning for Beginners",
    "Automating Delivery with CI/CD Pipelines",
    "Securing Modern Web Applications",
    "Testing Strategies That Actually Scale",
    "Tuning Database Performance in Production",
    "A Tour of the Major Cloud Providers",
    "GraphQL and REST: A Pragmatic Comparison",
    "Orchestrating Containers with Kubernetes",
    "Event-Driven Architecture in Practice",
    "Domain-Driven Design Without the Ceremony",
    "Clean Architecture: Principles and Pitfalls",
    "Scaling Past the First Million Requests",
    "Observability from Day One",
    "API Design: Lessons from the Field",
    "Sharding and Partitioning Relational Data",
];

pub const COMMENT_TEMPLATES: &[&str] = &[
    "Excellent article! Very useful for beginners.",
    "Thanks for sharing this.",
    "Interesting perspective on the topic.",
    "Could you go deeper into this aspect?",
    "Really liked the explanation.",
    "Good information, though I think it misses one thing.",
    "This approach seems very practical.",
    "Do you have an additional example?",
    "Perfect timing for my current project.",
    "This helped me understand the concept.",
    "Great work, clearly explained.",
    "Would love a follow-up article on this.",
    "Looking forward to more content like this.",
    "Nice introduction to the subject.",
    "Is there an alternative to this solution?",
];

pub const ACTIONS: &[&str] = &[
    "user_login", "user_logout", "post_created", "post_updated", "post_deleted",
    "comment_added", "comment_updated", "comment_deleted", "user_registered",
    "profile_updated", "password_changed", "email_verified", "account_locked",
    "search_performed", "file_uploaded", "file_downloaded", "api_call",
    "admin_action", "moderation_action", "backup_created",
];

pub const RESOURCE_TYPES: &[&str] = &[
    "user", "post", "comment", "category", "tag", "file", "session", "api",
];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148",
    "Mozilla/5.0 (Linux; Android 14) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36",
    "curl/8.5.0",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_are_populated() {
        assert!(FIRST_NAMES.len() >= 50);
        assert!(LAST_NAMES.len() >= 50);
        assert_eq!(CATEGORIES.len(), 15);
        assert!(TAGS.len() >= 150);
        assert_eq!(POST_TITLES.len(), 20);
        assert_eq!(RESOURCE_TYPES.len(), 8);
    }
}
