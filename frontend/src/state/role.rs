use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Permission class of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Parent,
    Teacher,
    NutritionStaff,
    HealthCareStaff,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct RoleParseError(pub String);

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Parent,
        Role::Teacher,
        Role::NutritionStaff,
        Role::HealthCareStaff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Parent => "parent",
            Role::Teacher => "teacher",
            Role::NutritionStaff => "nutrition_staff",
            Role::HealthCareStaff => "health_care_staff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Parent => "Parent",
            Role::Teacher => "Teacher",
            Role::NutritionStaff => "Nutrition staff",
            Role::HealthCareStaff => "Health-care staff",
        }
    }

    /// Landing page after sign-in.
    pub const fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Parent => "/parent/dashboard",
            Role::Teacher => "/teacher/dashboard",
            Role::NutritionStaff => "/nutrition/dashboard",
            Role::HealthCareStaff => "/health/dashboard",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| RoleParseError(raw.to_string()))
    }
}

/// Set of roles a route admits. The empty set admits every signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);

    pub const fn of(roles: &[Role]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        RoleSet(bits)
    }

    pub const fn only(role: Role) -> Self {
        RoleSet(role.bit())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// Whether a user holding `role` may enter a route guarded by this set.
    pub const fn admits(self, role: Role) -> bool {
        self.is_empty() || self.contains(role)
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        RoleSet(iter.into_iter().fold(0, |bits, role| bits | role.bit()))
    }
}
