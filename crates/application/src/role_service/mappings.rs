use super::*;

impl RoleService {
    pub(super) async fn assign(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()> {
        let (user_id, role_name) = mapping_target(user_id, role_name)?;
        self.identity_provider
            .assign_role_to_user(bearer, user_id.as_str(), role_name.as_str())
            .await
    }

    pub(super) async fn unassign(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()> {
        let (user_id, role_name) = mapping_target(user_id, role_name)?;
        self.identity_provider
            .remove_role_from_user(bearer, user_id.as_str(), role_name.as_str())
            .await
    }

    pub(super) async fn mapped_roles(
        &self,
        bearer: &BearerToken,
        user_id: &str,
    ) -> AppResult<Vec<Role>> {
        let user_id = NonEmptyString::required("user id", user_id)?;
        let roles = self
            .identity_provider
            .list_user_roles(bearer, user_id.as_str())
            .await?;
        Ok(roles.into_iter().map(Role::from).collect())
    }
}

fn mapping_target(user_id: &str, role_name: &str) -> AppResult<(NonEmptyString, NonEmptyString)> {
    Ok((
        NonEmptyString::required("user id", user_id)?,
        NonEmptyString::required("role name", role_name)?,
    ))
}
