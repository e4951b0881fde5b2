use crate::routes::{Page, RouteEntry, RouteTable};
use crate::state::role::Role;

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Navigation entries shown as cards on `role`'s dashboard, minus the dashboard itself.
pub fn shortcuts_for(table: &RouteTable, role: Role) -> Vec<&'static RouteEntry> {
    table
        .navigation_for(role)
        .into_iter()
        .filter(|entry| !matches!(entry.page, Page::Dashboard(_)))
        .collect()
}
