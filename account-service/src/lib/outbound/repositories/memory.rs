use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::Handle;
use crate::domain::user::models::Secret;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

#[derive(Default)]
struct Table {
    users: HashMap<Handle, User>,
    last_id: i64,
}

/// Process-local user table.
///
/// Lives exactly as long as the instance that owns it.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, handle: &Handle, secret: &Secret) -> Result<UserId, UserError> {
        let mut table = self.table.write().await;

        if table.users.contains_key(handle) {
            return Err(UserError::DuplicateHandle(handle.to_string()));
        }

        table.last_id += 1;
        let id = UserId(table.last_id);
        table.users.insert(
            handle.clone(),
            User {
                id,
                handle: handle.clone(),
                secret: secret.clone(),
            },
        );

        Ok(id)
    }

    async fn find_by_credentials(
        &self,
        handle: &Handle,
        secret: &Secret,
    ) -> Result<Option<User>, UserError> {
        let table = self.table.read().await;

        Ok(table
            .users
            .get(handle)
            .filter(|user| &user.secret == secret)
            .cloned())
    }
}
