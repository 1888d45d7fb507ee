use crate::access::policy::is_role_allowed;
use dto::role::Role;
use dto::role::Role::{Admin, Member, Receptionist, Trainer};
use serde::Serialize;

/// A link of the authenticated header, with the roles allowed to see it.
#[derive(Debug, Serialize, PartialEq)]
pub struct NavigationEntry {
    label: &'static str,
    path: &'static str,
    allowed_roles: &'static [Role],
}

impl NavigationEntry {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn allowed_roles(&self) -> &'static [Role] {
        self.allowed_roles
    }
}

/// The single source of truth for which section each role may see.
/// Members/Trainers/Queries are management sections, member-role identities
/// must not see them. Defined once, never mutated at runtime.
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry {
        label: "Dashboard",
        path: "/dashboard",
        allowed_roles: &[Admin, Receptionist, Trainer, Member],
    },
    NavigationEntry {
        label: "Workouts",
        path: "/workouts",
        allowed_roles: &[Admin, Receptionist, Trainer, Member],
    },
    NavigationEntry {
        label: "Members",
        path: "/members",
        allowed_roles: &[Admin, Receptionist, Trainer],
    },
    NavigationEntry {
        label: "Trainers",
        path: "/trainers",
        allowed_roles: &[Admin, Receptionist, Trainer],
    },
    NavigationEntry {
        label: "Plans",
        path: "/plans",
        allowed_roles: &[Admin, Receptionist, Trainer, Member],
    },
    NavigationEntry {
        label: "Queries",
        path: "/queries",
        allowed_roles: &[Admin, Receptionist, Trainer],
    },
    NavigationEntry {
        label: "Profile",
        path: "/profile",
        allowed_roles: &[Admin, Receptionist, Trainer, Member],
    },
];

pub fn find_entry(path: &str) -> Option<&'static NavigationEntry> {
    NAVIGATION.iter().find(|entry| entry.path() == path)
}

/// The links to render in the header for a given role.
pub fn entries_for_role(user_role: Option<&str>) -> Vec<&'static NavigationEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| is_role_allowed(user_role, entry.allowed_roles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_only_known_roles_and_no_empty_entry() {
        for entry in NAVIGATION {
            assert!(
                !entry.allowed_roles().is_empty(),
                "entry {} allows nobody",
                entry.label()
            );
            for role in entry.allowed_roles() {
                assert!(dto::role::ALL_ROLES.contains(role));
            }
        }
    }

    #[test]
    fn should_withhold_management_sections_from_members() {
        for path in ["/members", "/trainers", "/queries"] {
            let entry = find_entry(path).unwrap();
            assert!(!entry.allowed_roles().contains(&Member), "{path}");
        }
    }

    #[test]
    fn should_list_entries_for_role() {
        let labels: Vec<&str> = entries_for_role(Some("member"))
            .iter()
            .map(|entry| entry.label())
            .collect();
        assert_eq!(vec!["Dashboard", "Workouts", "Plans", "Profile"], labels);

        assert_eq!(NAVIGATION.len(), entries_for_role(Some("Admin")).len());
        assert!(entries_for_role(None).is_empty());
    }

    #[test]
    fn should_find_entry_by_path() {
        assert_eq!("Members", find_entry("/members").unwrap().label());
        assert_eq!(None, find_entry("/nowhere"));
    }
}
