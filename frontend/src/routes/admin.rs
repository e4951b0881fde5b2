use super::RouteEntry;
use crate::state::role::{Role, RoleSet};

const ADMIN: RoleSet = RoleSet::only(Role::Admin);

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::dashboard(Role::Admin),
    RouteEntry::section(
        "/admin/students",
        ADMIN,
        "Students",
        "Enrolment records for every child in the school.",
    ),
    RouteEntry::section(
        "/admin/students/:student_id",
        ADMIN,
        "Student profile",
        "Guardians, class placement and history for one child.",
    ),
    RouteEntry::section(
        "/admin/staff",
        ADMIN,
        "Staff",
        "Teachers, nutrition and health-care staff accounts.",
    ),
    RouteEntry::section(
        "/admin/classes",
        ADMIN,
        "Classes",
        "Class groups, rooms and assigned teachers.",
    ),
    RouteEntry::section(
        "/admin/attendance",
        ADMIN,
        "Attendance overview",
        "Daily check-in and check-out across all classes.",
    ),
    RouteEntry::section(
        "/admin/fees",
        ADMIN,
        "Fees",
        "Invoices, payments and outstanding balances.",
    ),
    RouteEntry::section(
        "/admin/complaints",
        ADMIN,
        "Complaints",
        "Complaints raised by parents and their resolution status.",
    ),
];
