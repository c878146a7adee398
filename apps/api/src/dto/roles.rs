use realmgate_domain::{Role, RoleInput, RolePatch};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for role creation and full replacement.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-request.ts"
)]
pub struct RoleRequest {
    pub name: String,
    pub description: String,
    pub composite: bool,
}

impl From<RoleRequest> for RoleInput {
    fn from(value: RoleRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            composite: value.composite,
        }
    }
}

/// Incoming payload for a partial role update.
///
/// Blank `name` or `description` keeps the current value; a missing
/// `composite` is written as `false`.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/patch-role-request.ts"
)]
pub struct PatchRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub composite: Option<bool>,
}

impl From<PatchRoleRequest> for RolePatch {
    fn from(value: PatchRoleRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            composite: value.composite.unwrap_or(false),
        }
    }
}

/// API representation of a realm role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub composite: bool,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            composite: value.composite,
        }
    }
}
