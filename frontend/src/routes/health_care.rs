use super::RouteEntry;
use crate::state::role::{Role, RoleSet};

const HEALTH_CARE: RoleSet = RoleSet::only(Role::HealthCareStaff);

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::dashboard(Role::HealthCareStaff),
    RouteEntry::section(
        "/health/records",
        HEALTH_CARE,
        "Health records",
        "Medical notes and emergency contacts.",
    ),
    RouteEntry::section(
        "/health/records/:child_id",
        HEALTH_CARE,
        "Health record",
        "Medical history for one child.",
    ),
    RouteEntry::section(
        "/health/incidents",
        HEALTH_CARE,
        "Incidents",
        "Injuries and illnesses reported during the day.",
    ),
    RouteEntry::section(
        "/health/vaccinations",
        HEALTH_CARE,
        "Vaccinations",
        "Immunisation schedules and records.",
    ),
];
