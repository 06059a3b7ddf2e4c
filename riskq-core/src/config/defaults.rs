// Single source of truth for all default values.

// --- Aggregation ---
// Submissions whose numeric levels differ by no more than this count as agreeing.
pub const DEFAULT_CONSENSUS_TOLERANCE: f64 = 0.0;
pub const DEFAULT_HUMAN_WEIGHT: f64 = 0.25;
pub const DEFAULT_SOCIETAL_WEIGHT: f64 = 0.25;
pub const DEFAULT_ENVIRONMENTAL_WEIGHT: f64 = 0.25;
pub const DEFAULT_FINANCIAL_WEIGHT: f64 = 0.25;

// --- Persistence ---
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

// --- Worker ---
pub const DEFAULT_WORKER_QUEUE_CAPACITY: usize = 16;

// --- Charts ---
pub const DEFAULT_TRACK_WIDTH: f64 = 300.0;
pub const DEFAULT_TRACK_LEFT_INSET: f64 = 20.0;
pub const DEFAULT_TRACK_RIGHT_INSET: f64 = 20.0;

// --- Report ---
pub const DEFAULT_BLOCKS_PER_PAGE: usize = 12;
pub const DEFAULT_REPORT_TITLE_PREFIX: &str = "Risk analysis";

// --- Cache ---
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300; // 5 minutes

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
