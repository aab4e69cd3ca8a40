use std::{env, fmt, str::FromStr};

/// How `GET /post/{id}` finds its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GetPostMode {
    /// Key lookup of the single post.
    #[default]
    Lookup,
    /// Legacy behaviour: full scan, every post is returned, 404 only when the
    /// table is empty. The requested id plays no part.
    Scan,
}

impl FromStr for GetPostMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lookup" => Ok(Self::Lookup),
            "scan" => Ok(Self::Scan),
            other => Err(format!("unknown get post mode: {other}")),
        }
    }
}

impl fmt::Display for GetPostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => write!(f, "lookup"),
            Self::Scan => write!(f, "scan"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the posts table (default: "posts")
    pub table_name: String,
    /// Behaviour of the single-post read (default: lookup)
    pub get_post_mode: GetPostMode,
    /// Custom DynamoDB endpoint, for local DynamoDB (default: unset)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POSTS_TABLE` - Table name (default: "posts"). The lowercase `posts`
    ///   variable that older deployments set is read when this one is unset.
    /// - `GET_POST_MODE` - `lookup` or `scan` (default: "lookup")
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            table_name: table_name_from(env::var("POSTS_TABLE").ok(), env::var("posts").ok()),
            get_post_mode: env::var("GET_POST_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

/// Picks the table name, preferring `POSTS_TABLE` over the legacy `posts`.
fn table_name_from(primary: Option<String>, legacy: Option<String>) -> String {
    primary
        .or(legacy)
        .unwrap_or_else(|| "posts".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
