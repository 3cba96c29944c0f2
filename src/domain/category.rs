//! Category tags and their display icons.
//!
//! Categories are free text on the wire. Only the ten known tags below get a
//! dedicated icon; everything else renders with [`DEFAULT_ICON`].

/// Icon used for categories that are not in [`CATEGORIES`].
pub const DEFAULT_ICON: &str = "💵";

/// Known categories in picker order, paired with their icon.
pub const CATEGORIES: [(&str, &str); 10] = [
    ("飲食", "🍔"),
    ("飲料", "🥤"),
    ("交通", "🛵"),
    ("固定", "🗓️"),
    ("投資", "📈"),
    ("社交", "🎁"),
    ("其他支出", "🛠️"),
    ("薪資", "💰"),
    ("其他存入", "🧧"),
    ("其他", "💰"),
];

/// Looks up the display icon for a category tag.
///
/// Matching is exact after trimming surrounding whitespace. Unknown or empty
/// tags fall back to [`DEFAULT_ICON`].
#[must_use]
pub fn icon_for(category: &str) -> &'static str {
    let category = category.trim();
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_ICON, |(_, icon)| icon)
}

/// Returns the category name at `index`, wrapping around the table.
#[must_use]
pub fn category_at(index: usize) -> &'static str {
    CATEGORIES[index % CATEGORIES.len()].0
}
