use realmgate_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Realm role. The name is the external identifier used by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Identifier assigned by the identity provider.
    pub id: String,
    /// Unique role name in realm scope.
    pub name: String,
    /// Free-form description, empty when unset.
    pub description: String,
    /// Composite flag; semantics belong to the identity provider.
    pub composite: bool,
}

/// Payload for role creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInput {
    /// Unique role name in realm scope.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Composite flag.
    pub composite: bool,
}

impl RoleInput {
    /// Checks required fields.
    pub fn validate(&self) -> AppResult<()> {
        NonEmptyString::required("role name", self.name.as_str())?;
        Ok(())
    }
}

/// Partial role update with merge semantics.
///
/// Blank `name` and `description` keep the current value. `composite` has no
/// unset state and always replaces the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement composite flag.
    pub composite: bool,
}

impl RolePatch {
    /// Merges the patch onto the current role.
    #[must_use]
    pub fn apply(&self, current: Role) -> Role {
        Role {
            id: current.id,
            name: non_blank(self.name.as_deref()).unwrap_or(current.name),
            description: non_blank(self.description.as_deref()).unwrap_or(current.description),
            composite: self.composite,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn existing_role() -> Role {
        Role {
            id: "r-1".to_owned(),
            name: "editor".to_owned(),
            description: "Content editors".to_owned(),
            composite: true,
        }
    }

    #[test]
    fn description_only_patch_keeps_name() {
        let patch = RolePatch {
            name: None,
            description: Some("x".to_owned()),
            composite: true,
        };

        let merged = patch.apply(existing_role());

        assert_eq!(merged.id, "r-1");
        assert_eq!(merged.name, "editor");
        assert_eq!(merged.description, "x");
        assert!(merged.composite);
    }

    #[test]
    fn composite_is_always_overwritten() {
        let merged = RolePatch::default().apply(existing_role());

        assert_eq!(merged.name, "editor");
        assert_eq!(merged.description, "Content editors");
        assert!(!merged.composite);
    }

    #[test]
    fn empty_name_is_rejected_on_input() {
        let input = RoleInput {
            name: String::new(),
            description: String::new(),
            composite: false,
        };
        assert!(input.validate().is_err());
    }

    proptest! {
        #[test]
        fn patch_merge_follows_blank_means_keep(
            name in proptest::option::of("[a-z ]{0,8}"),
            description in proptest::option::of("[a-z ]{0,8}"),
            composite in any::<bool>(),
        ) {
            let current = existing_role();
            let patch = RolePatch { name: name.clone(), description: description.clone(), composite };

            let merged = patch.apply(current.clone());

            prop_assert_eq!(&merged.id, &current.id);
            prop_assert_eq!(merged.composite, composite);
            match name.filter(|value| !value.trim().is_empty()) {
                Some(value) => prop_assert_eq!(&merged.name, &value),
                None => prop_assert_eq!(&merged.name, &current.name),
            }
            match description.filter(|value| !value.trim().is_empty()) {
                Some(value) => prop_assert_eq!(&merged.description, &value),
                None => prop_assert_eq!(&merged.description, &current.description),
            }
        }
    }
}
