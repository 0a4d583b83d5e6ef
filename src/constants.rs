// Units
pub const POINT_2_MM: f64 = 0.35277777777777777; // mm per point
pub const POINTS_PER_INCH: f64 = 72.0;

pub fn mm_to_pt(mm: f64) -> f64 {
    mm / POINT_2_MM
}

pub fn pt_to_mm(pt: f64) -> f64 {
    pt * POINT_2_MM
}

// Temporary files
pub const KEEP_TEMP_FILES: bool = true;
pub const TMP_DIR: &str = "tmp";

// Book list caching
pub const BOOK_LIST_CACHE_SECS: u64 = 3600 * 2;
pub const BOOK_LIST_CACHE_DIR: &str = "cache";

// Remote URLs
pub const SERVER_SLOT: &str = "{server}";
pub const BOOK_SLOT: &str = "{book}";
pub const TOC_URL: &str = "http://{server}/pub/{book}/_index/TOC.txt";
pub const BOOK_URL: &str = "http://{server}/bin/view/{book}/_all?skin=text";
pub const PUBLISH_URL: &str = "/books/";

// No vowels so cookies never spell words, no punctuation so they survive bidi text
pub const CHAPTER_COOKIE_CHARS: &str = "BCDFGHJKLMNPQRSTVWXYZ";
pub const VOWELS: &str = "AEIOU";

// Servers
pub const DEFAULT_SERVER: &str = "en.flossmanuals.net";

// Rendering
pub const DEFAULT_ENGINE: &str = "webkit";
