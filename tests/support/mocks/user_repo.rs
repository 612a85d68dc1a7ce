// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lipi_core::domain::errors::{DomainError, DomainResult};
use lipi_core::domain::listing::{PageRequest, Sort, SortOrder};
use lipi_core::domain::user::{
    Email, NewUser, PasswordHash, Role, User, UserFilter, UserId, UserName, UserRepository,
    UserSortField, UserUpdate,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserRepo {
    rows: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, id: i64, name: &str, email: &str, role: Role, at: DateTime<Utc>) -> User {
        let user = User {
            id: UserId(id),
            name: UserName::new(name).unwrap(),
            email: Email::new(email).unwrap(),
            password_hash: PasswordHash::new("hashed:seeded").unwrap(),
            role,
            is_active: true,
            avatar: None,
            created_at: at,
            updated_at: at,
        };
        self.rows.lock().unwrap().insert(id, user.clone());
        user
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let user = User {
            id: UserId(id),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            avatar: new_user.avatar,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("admin not found".into()))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("admin not found".into()))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|u| &u.email == email).cloned())
    }

    async fn list(
        &self,
        filter: &UserFilter,
        sort: Sort<UserSortField>,
        page: PageRequest,
    ) -> DomainResult<(Vec<User>, u64)> {
        let rows = self.rows.lock().unwrap();
        let mut hits: Vec<User> = rows
            .values()
            .filter(|u| {
                filter.search.as_ref().is_none_or(|s| {
                    let needle = s.to_lowercase();
                    u.name.as_str().to_lowercase().contains(&needle)
                        || u.email.as_str().to_lowercase().contains(&needle)
                })
            })
            .filter(|u| filter.role.is_none_or(|r| u.role == r))
            .filter(|u| filter.is_active.is_none_or(|a| u.is_active == a))
            .cloned()
            .collect();

        hits.sort_by(|a, b| {
            let ordering = match sort.field {
                UserSortField::Id => a.id.cmp(&b.id),
                UserSortField::Name => a.name.as_str().cmp(b.name.as_str()),
                UserSortField::Email => a.email.as_str().cmp(b.email.as_str()),
                UserSortField::Role => a.role.as_str().cmp(b.role.as_str()),
                UserSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            }
            .then(a.id.cmp(&b.id));
            match sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = hits.len() as u64;
        let items = hits
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page() as usize)
            .collect();
        Ok((items, total))
    }
}
