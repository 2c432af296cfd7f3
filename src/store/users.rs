use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::model::user::{User, UserPatch};
use crate::query::descriptor::QueryDescriptor;
use crate::query::engine;
use crate::query::results::QueryResult;
use crate::text::validate;

/// In-memory account repository. Usernames and email addresses are
/// unique across the store.
pub struct UserStore {
    users: RwLock<Vec<User>>,
    config: Config,
}

impl UserStore {
    pub fn new(config: Config) -> Self {
        UserStore {
            users: RwLock::new(Vec::new()),
            config,
        }
    }

    pub fn add(&self, user: User) -> Result<User> {
        validate::username(&user.username, &self.config.validation)?;
        validate::email(&user.email)?;
        if let Some(bio) = &user.bio {
            validate::bio(bio, &self.config.validation)?;
        }

        let mut users = self.users.write();
        if users.iter().any(|u| u.username == user.username) {
            return Err(Error::new(
                ErrorKind::InvalidState,
                format!("username already taken: {}", user.username),
            ));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(Error::new(
                ErrorKind::InvalidState,
                format!("email already registered: {}", user.email),
            ));
        }
        debug!(id = %user.id, username = %user.username, "user added");
        users.insert(0, user.clone());
        Ok(user)
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Admin listing: search, role filters, pagination.
    pub fn list(&self, descriptor: &QueryDescriptor) -> QueryResult<User> {
        let users = self.users.read();
        engine::query(users.as_slice(), descriptor)
    }

    pub fn update(&self, id: Uuid, patch: UserPatch) -> Result<User> {
        let limits = &self.config.validation;
        if let Some(username) = &patch.username {
            validate::username(username, limits)?;
        }
        if let Some(email) = &patch.email {
            validate::email(email)?;
        }
        if let Some(bio) = &patch.bio {
            validate::bio(bio, limits)?;
        }

        let mut users = self.users.write();
        if let Some(username) = &patch.username {
            if users.iter().any(|u| u.id != id && u.username == *username) {
                return Err(Error::new(
                    ErrorKind::InvalidState,
                    format!("username already taken: {username}"),
                ));
            }
        }
        if let Some(email) = &patch.email {
            if users.iter().any(|u| u.id != id && u.email == *email) {
                return Err(Error::new(
                    ErrorKind::InvalidState,
                    format!("email already registered: {email}"),
                ));
            }
        }
        let user = Self::find_mut(&mut users, id)?;
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(bio) = patch.bio {
            user.bio = Some(bio);
        }
        if let Some(website) = patch.website {
            user.website = Some(website);
        }
        if let Some(is_verified) = patch.is_verified {
            user.is_verified = is_verified;
        }
        debug!(id = %user.id, "user updated");
        Ok(user.clone())
    }

    /// Admin switch: suspended accounts keep their content but can't act.
    pub fn set_active(&self, id: Uuid, is_active: bool) -> Result<User> {
        let mut users = self.users.write();
        let user = Self::find_mut(&mut users, id)?;
        user.is_active = is_active;
        debug!(id = %user.id, is_active, "user activation changed");
        Ok(user.clone())
    }

    pub fn record_login(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.write();
        let user = Self::find_mut(&mut users, id)?;
        user.last_login = Some(Utc::now());
        Ok(())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(Error::not_found(format!("user {id}")));
        }
        debug!(%id, "user deleted");
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.read().clone()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    fn find_mut(users: &mut [User], id: Uuid) -> Result<&mut User> {
        users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::not_found(format!("user {id}")))
    }
}
