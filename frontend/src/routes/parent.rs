use super::RouteEntry;
use crate::state::role::{Role, RoleSet};

const PARENT: RoleSet = RoleSet::only(Role::Parent);

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::dashboard(Role::Parent),
    RouteEntry::section(
        "/parent/children",
        PARENT,
        "My children",
        "Children linked to your account.",
    ),
    RouteEntry::section(
        "/parent/children/:child_id",
        PARENT,
        "Child details",
        "Class, attendance and health notes for your child.",
    ),
    RouteEntry::section(
        "/parent/attendance",
        PARENT,
        "Attendance",
        "Check-in and check-out history.",
    ),
    RouteEntry::section(
        "/parent/fees",
        PARENT,
        "Fee payments",
        "Invoices and payment history.",
    ),
    RouteEntry::section(
        "/parent/complaints",
        PARENT,
        "Complaints",
        "Raise a concern and follow its progress.",
    ),
];
