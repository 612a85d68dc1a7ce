// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, Page, RoleDto, UserDto},
        error::{ApplicationError, ApplicationResult},
        queries::{page_request, parse_sort},
    },
    domain::user::{Role, UserFilter, UserId, UserRepository, UserSortField},
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAdminsQuery {
    /// Matched against name and email.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_admin(&self, actor: &Actor, id: i64) -> ApplicationResult<UserDto> {
        ensure_permission(actor, Permission::ManageAdmins)?;

        let id = UserId::new(id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("admin not found"))?;
        Ok(user.into())
    }

    pub async fn list_admins(
        &self,
        actor: &Actor,
        query: ListAdminsQuery,
    ) -> ApplicationResult<Page<UserDto>> {
        ensure_permission(actor, Permission::ManageAdmins)?;

        let sort = parse_sort::<UserSortField>(query.sort_by.as_deref(), query.sort_order.as_deref())?;
        let page = page_request(query.page, query.per_page);
        let filter = UserFilter {
            search: query.search.filter(|s| !s.trim().is_empty()),
            role: query.role,
            is_active: query.is_active,
        };

        let (records, total) = self.user_repo.list(&filter, sort, page).await?;
        Ok(Page::from_records(records, page, total))
    }

    /// The role catalogue, highest level first.
    pub fn roles(&self, actor: &Actor) -> ApplicationResult<Vec<RoleDto>> {
        ensure_permission(actor, Permission::ManageAdmins)?;
        Ok(Role::ALL.into_iter().map(RoleDto::from).collect())
    }
}
