use super::RouteEntry;
use crate::state::role::{Role, RoleSet};

const TEACHER: RoleSet = RoleSet::only(Role::Teacher);

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::dashboard(Role::Teacher),
    RouteEntry::section(
        "/teacher/classes",
        TEACHER,
        "My classes",
        "Class groups you teach.",
    ),
    RouteEntry::section(
        "/teacher/attendance",
        TEACHER,
        "Take attendance",
        "Record today's check-ins for your classes.",
    ),
    RouteEntry::section(
        "/teacher/homework",
        TEACHER,
        "Homework",
        "Assignments shared with parents.",
    ),
    RouteEntry::section(
        "/teacher/students/:student_id",
        RoleSet::of(&[Role::Teacher, Role::Admin]),
        "Student",
        "Progress notes for one child.",
    ),
];
