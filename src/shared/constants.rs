/// Questions per page on every paginated listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page served when the `page` query parameter is absent or unreadable
pub const DEFAULT_PAGE: u32 = 1;

/// `quiz_category.type` sent by the frontend when the player picks "All"
pub const ALL_CATEGORIES_SENTINEL: &str = "click";
