//! User-facing copy.
//!
//! The Thai strings are shown to players as-is and must not be translated.

/// Counter lookup for a hero absent from the dataset.
pub const HERO_NOT_FOUND: &str = "ไม่พบข้อมูลของฮีโร่";

/// The hero exists but nobody is listed as countering it.
pub const NO_COUNTERS_YET: &str = "ยังไม่มีข้อมูลตัวแก้ทางสำหรับฮีโร่นี้";

pub const MISSING_HERO_NAME: &str = "Missing or invalid heroName query parameter";

pub const COUNTER_SOURCE_UNAVAILABLE: &str = "Failed to load hero data source.";

pub const NAME_SOURCE_UNAVAILABLE: &str = "Failed to load hero data.";

pub const HERO_LIST_UNAVAILABLE: &str = "Could not load hero list.";

pub const ENTER_HERO_NAME: &str = "Please select or enter a valid hero name.";
