//! Route tables: which page lives at which path and who may open it.
//!
//! Tables are plain data. Rendering happens in `crate::router`, access
//! decisions in `crate::components::guard`.

use percent_encoding::percent_decode_str;

use crate::state::role::{Role, RoleSet};

pub mod admin;
pub mod health_care;
pub mod nutrition;
pub mod parent;
pub mod teacher;

pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const UNAUTHORIZED: &str = "/unauthorized";
    pub const PROFILE: &str = "/profile";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Requires a signed-in user; a non-empty set also restricts the role.
    Protected(RoleSet),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Unauthorized,
    Profile,
    Dashboard(Role),
    Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
    pub page: Page,
    pub title: &'static str,
    pub summary: &'static str,
}

impl RouteEntry {
    pub const fn public(path: &'static str, page: Page, title: &'static str) -> Self {
        Self {
            path,
            access: Access::Public,
            page,
            title,
            summary: "",
        }
    }

    pub const fn dashboard(role: Role) -> Self {
        Self {
            path: role.home_path(),
            access: Access::Protected(RoleSet::only(role)),
            page: Page::Dashboard(role),
            title: "Dashboard",
            summary: "Overview and shortcuts.",
        }
    }

    pub const fn section(
        path: &'static str,
        roles: RoleSet,
        title: &'static str,
        summary: &'static str,
    ) -> Self {
        Self {
            path,
            access: Access::Protected(roles),
            page: Page::Section,
            title,
            summary,
        }
    }

    pub fn required_roles(&self) -> Option<RoleSet> {
        match self.access {
            Access::Public => None,
            Access::Protected(roles) => Some(roles),
        }
    }

    pub fn has_params(&self) -> bool {
        segments(self.path).any(|segment| segment.starts_with(':'))
    }

    fn literal_segments(&self) -> usize {
        segments(self.path)
            .filter(|segment| !segment.starts_with(':'))
            .count()
    }
}

pub const PUBLIC_ROUTES: &[RouteEntry] = &[
    RouteEntry::public(paths::HOME, Page::Home, "KidsLink"),
    RouteEntry::public(paths::LOGIN, Page::Login, "Sign in"),
    RouteEntry::public(paths::UNAUTHORIZED, Page::Unauthorized, "Access denied"),
];

pub const SHARED_ROUTES: &[RouteEntry] = &[RouteEntry {
    path: paths::PROFILE,
    access: Access::Protected(RoleSet::EMPTY),
    page: Page::Profile,
    title: "My profile",
    summary: "Your account details.",
}];

/// Route table owned by each role group.
pub const ROLE_GROUPS: &[(Role, &[RouteEntry])] = &[
    (Role::Admin, admin::ROUTES),
    (Role::Parent, parent::ROUTES),
    (Role::Teacher, teacher::ROUTES),
    (Role::NutritionStaff, nutrition::ROUTES),
    (Role::HealthCareStaff, health_care::ROUTES),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<&'static RouteEntry>,
}

impl RouteTable {
    pub fn new(groups: &[&'static [RouteEntry]]) -> Self {
        Self {
            entries: groups.iter().copied().flat_map(|group| group.iter()).collect(),
        }
    }

    /// Every route the application serves.
    pub fn app() -> Self {
        let mut groups: Vec<&'static [RouteEntry]> = vec![PUBLIC_ROUTES, SHARED_ROUTES];
        groups.extend(ROLE_GROUPS.iter().map(|(_, routes)| *routes));
        Self::new(&groups)
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static RouteEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Finds the entry for `path`. Query strings, fragments and trailing
    /// slashes are ignored; when several patterns match, the one with the
    /// most literal segments wins.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut best: Option<RouteMatch> = None;
        for entry in self.entries() {
            let Some(params) = match_pattern(entry.path, path) else {
                continue;
            };
            let better = best
                .as_ref()
                .map(|current| entry.literal_segments() > current.entry.literal_segments())
                .unwrap_or(true);
            if better {
                best = Some(RouteMatch { entry, params });
            }
        }
        best
    }

    /// Parameterless protected entries `role` may open, in table order.
    pub fn navigation_for(&self, role: Role) -> Vec<&'static RouteEntry> {
        self.entries()
            .filter(|entry| !entry.has_params())
            .filter(|entry| {
                entry
                    .required_roles()
                    .map(|roles| roles.admits(role))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn duplicate_paths(&self) -> Vec<&'static str> {
        let mut seen = std::collections::HashSet::new();
        self.entries()
            .filter(|entry| !seen.insert(entry.path))
            .map(|entry| entry.path)
            .collect()
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    let mut params = Vec::new();
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    let value = percent_decode_str(actual).decode_utf8_lossy().into_owned();
                    params.push((name, value));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}
