//! Keys used by the site and admin pages
//!
//! Public and admin listings share a root segment, so invalidating the root
//! after an admin mutation refreshes both.

use crate::QueryKey;

/// Public pricing page
pub fn pricing_plans() -> QueryKey {
    QueryKey::from("pricing")
}

/// Admin pricing table, including inactive plans
pub fn admin_pricing_plans() -> QueryKey {
    pricing_plans().with("admin")
}

/// Single plan in the admin editor
pub fn pricing_plan(id: &str) -> QueryKey {
    admin_pricing_plans().with(id)
}

/// Portfolio listings, public and admin
pub fn portfolio() -> QueryKey {
    QueryKey::from("portfolio")
}

/// Portfolio listing for a filter; `filter` is any stable rendering of it
pub fn portfolio_projects(filter: &str) -> QueryKey {
    portfolio().with("list").with(filter)
}

/// Case study page
pub fn portfolio_by_slug(slug: &str) -> QueryKey {
    portfolio().with("slug").with(slug)
}

/// Home page featured strip
pub fn featured_projects() -> QueryKey {
    portfolio().with("featured")
}

/// Portfolio filter categories
pub fn portfolio_categories() -> QueryKey {
    portfolio().with("categories")
}

/// All CMS sections
pub fn content_sections() -> QueryKey {
    QueryKey::from("content")
}

/// One CMS section
pub fn content_section(section: &str) -> QueryKey {
    content_sections().with(section)
}

/// Admin user list
pub fn admin_users() -> QueryKey {
    QueryKey::from(["admin", "users"])
}

/// Dashboard statistics
pub fn admin_stats() -> QueryKey {
    QueryKey::from(["admin", "stats"])
}

/// Contact inbox
pub fn contacts() -> QueryKey {
    QueryKey::from("contacts")
}

/// Contact inbox counters
pub fn contact_stats() -> QueryKey {
    contacts().with("stats")
}

/// Uploaded image gallery
pub fn images() -> QueryKey {
    QueryKey::from("images")
}

/// Logged-in user's profile
pub fn profile() -> QueryKey {
    QueryKey::from(["auth", "me"])
}
