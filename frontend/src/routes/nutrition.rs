use super::RouteEntry;
use crate::state::role::{Role, RoleSet};

const NUTRITION: RoleSet = RoleSet::only(Role::NutritionStaff);

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::dashboard(Role::NutritionStaff),
    RouteEntry::section(
        "/nutrition/menus",
        NUTRITION,
        "Menus",
        "Weekly meal menus.",
    ),
    RouteEntry::section(
        "/nutrition/meal-plans",
        NUTRITION,
        "Meal plans",
        "Special diets assigned to individual children.",
    ),
    RouteEntry::section(
        "/nutrition/allergies",
        RoleSet::of(&[Role::NutritionStaff, Role::HealthCareStaff]),
        "Allergies",
        "Known food allergies and intolerances.",
    ),
];
