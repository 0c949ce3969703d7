// Single source of truth for all default values.

// --- Enrichment ---
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "qwen/qwen3-32b";
pub const DEFAULT_TRANSLATE_MAX_TOKENS: u32 = 1_500;
pub const DEFAULT_BATCH_MAX_TOKENS: u32 = 2_000;
pub const DEFAULT_SUMMARY_MAX_TOKENS: u32 = 2_500;
pub const DEFAULT_MAX_RETRIES: u32 = 0;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 30_000;

// --- Pipeline ---
pub const DEFAULT_BATCH_SIZE: usize = crate::constants::DEFAULT_BATCH_SIZE;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
