//! Fixture state: the in-memory world the mocked API serves from.
//!
//! Each test builds its own [`FixtureState`]; instances share nothing. The
//! state object is explicit - handlers receive a clone of the handle rather
//! than closing over ambient variables - so parallel test execution stays
//! safe.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use pizza_stand_core::{Email, FranchiseId, RoleAssignment, StoreId, UserId};

use crate::config::FixtureOptions;
use crate::error::{BackendError, Result};
use crate::models::{
    CreateFranchise, Franchise, FranchiseAdmin, MenuItem, OrderDraft, Receipt, Store, User,
    UserUpdate,
};
use crate::token;

/// Cheaply cloneable handle to one fixture instance's state.
#[derive(Clone)]
pub struct FixtureState {
    inner: Arc<Mutex<World>>,
    options: FixtureOptions,
}

/// The mutable world behind one fixture instance.
#[derive(Debug, Default)]
struct World {
    /// User directory keyed by email; at most one user per email.
    users: HashMap<String, User>,
    /// The single logged-in-user slot.
    session: Option<UserId>,
    franchises: Vec<Franchise>,
    menu: Vec<MenuItem>,
    /// Next generated identifier; always above every seeded id.
    next_id: i64,
}

impl World {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl FixtureState {
    /// Assemble a state object from seed data.
    ///
    /// Generated identifiers start above the largest seeded id so seeds may
    /// pin the specific values UI tests assert on.
    pub(crate) fn new(
        options: FixtureOptions,
        users: Vec<User>,
        franchises: Vec<Franchise>,
        menu: Vec<MenuItem>,
    ) -> Self {
        let seeded_max = users
            .iter()
            .map(|u| u.id.as_i64())
            .chain(franchises.iter().map(|f| f.id.as_i64()))
            .chain(
                franchises
                    .iter()
                    .flat_map(|f| f.stores.iter().map(|s| s.id.as_i64())),
            )
            .chain(menu.iter().map(|m| m.id.as_i64()))
            .max()
            .unwrap_or(0);

        let users = users
            .into_iter()
            .map(|u| (u.email.as_str().to_owned(), u))
            .collect();

        Self {
            inner: Arc::new(Mutex::new(World {
                users,
                session: None,
                franchises,
                menu,
                next_id: seeded_max + 1,
            })),
            options,
        }
    }

    /// The behavior toggles this instance was built with.
    #[must_use]
    pub const fn options(&self) -> FixtureOptions {
        self.options
    }

    fn world(&self) -> MutexGuard<'_, World> {
        // A panic while holding the lock only poisons test data; keep going.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Authenticate against the user directory.
    ///
    /// The match is exact and case-sensitive, no hashing - test fixture
    /// only. Success records the user as the active session; failure leaves
    /// any prior session untouched.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Unauthorized` on unknown email or wrong
    /// password.
    pub fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let mut world = self.world();

        let user = match world.users.get(email) {
            Some(user) if user.password_matches(password) => user.clone(),
            _ => {
                tracing::debug!(email, "login rejected");
                return Err(BackendError::Unauthorized);
            }
        };

        world.session = Some(user.id);
        tracing::info!(user = %user.email, "session opened");
        Ok((user, token::session()))
    }

    /// Register a new diner.
    ///
    /// Always succeeds; there is no duplicate-email check, a re-registered
    /// email simply replaces the directory entry. Whether the session opens
    /// too depends on [`FixtureOptions::login_on_register`].
    ///
    /// # Errors
    ///
    /// Returns `BackendError::BadRequest` if the email is malformed.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<(User, String)> {
        let email = Email::parse(email).map_err(|e| BackendError::BadRequest(e.to_string()))?;

        let mut world = self.world();
        let user = User {
            id: UserId::new(world.allocate_id()),
            name: name.to_owned(),
            email,
            password: Some(password.to_owned()),
            roles: vec![RoleAssignment::diner()],
        };
        world
            .users
            .insert(user.email.as_str().to_owned(), user.clone());

        if self.options.login_on_register {
            world.session = Some(user.id);
        }

        tracing::info!(user = %user.email, id = %user.id, "registered");
        Ok((user, token::session()))
    }

    /// Whatever user the session slot currently holds.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let world = self.world();
        let id = world.session?;
        world.users.values().find(|u| u.id == id).cloned()
    }

    /// Merge a partial record onto the stored user with the given id.
    ///
    /// The password is preserved unless explicitly overwritten. When the
    /// email changes, the directory key moves with it, so subsequent
    /// authentication uses the new email.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::NotFound` for an unknown id and
    /// `BackendError::BadRequest` for a malformed replacement email.
    pub fn update_user(&self, id: UserId, update: &UserUpdate) -> Result<(User, String)> {
        let mut world = self.world();

        let Some((old_key, mut user)) = world
            .users
            .iter()
            .find(|(_, u)| u.id == id)
            .map(|(k, u)| (k.clone(), u.clone()))
        else {
            return Err(BackendError::NotFound(format!("user {id}")));
        };

        user.apply(update)
            .map_err(|e| BackendError::BadRequest(e.to_string()))?;

        // Re-key the directory when the email changed.
        world.users.remove(&old_key);
        world
            .users
            .insert(user.email.as_str().to_owned(), user.clone());

        tracing::info!(user = %user.email, id = %user.id, "profile updated");
        Ok((user, token::session()))
    }

    /// Clear the session slot unconditionally.
    pub fn logout(&self) {
        let mut world = self.world();
        if world.session.take().is_some() {
            tracing::info!("session closed");
        }
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// The static menu, read-only.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuItem> {
        self.world().menu.clone()
    }

    // =========================================================================
    // Franchises & stores
    // =========================================================================

    /// List franchises, optionally filtered by name pattern and paginated.
    ///
    /// The pattern supports `*` wildcards and matches case-insensitively.
    /// Without a `limit` the full filtered list is returned and the second
    /// element (the "more results" flag) is `false`; with one, the flag says
    /// whether a further page has content.
    #[must_use]
    pub fn list_franchises(
        &self,
        name: Option<&str>,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> (Vec<Franchise>, bool) {
        let world = self.world();
        let matched: Vec<Franchise> = world
            .franchises
            .iter()
            .filter(|f| name_matches(name, &f.name))
            .cloned()
            .collect();

        match limit {
            None => (matched, false),
            Some(limit) => {
                let start = page.unwrap_or(0).saturating_mul(limit);
                let more = matched.len() > start.saturating_add(limit);
                let slice = matched.into_iter().skip(start).take(limit).collect();
                (slice, more)
            }
        }
    }

    /// Franchises the given user administers.
    #[must_use]
    pub fn franchises_for(&self, user: UserId) -> Vec<Franchise> {
        self.world()
            .franchises
            .iter()
            .filter(|f| f.admins.iter().any(|a| a.id == user))
            .cloned()
            .collect()
    }

    /// Append a new franchise to the collection.
    ///
    /// Submitted admin emails are resolved against the user directory;
    /// unknown emails are skipped.
    #[must_use]
    pub fn create_franchise(&self, req: CreateFranchise) -> Franchise {
        let mut world = self.world();

        let admins: Vec<FranchiseAdmin> = req
            .admins
            .iter()
            .filter_map(|r| world.users.get(&r.email))
            .map(|u| FranchiseAdmin {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
            })
            .collect();

        let franchise = Franchise {
            id: FranchiseId::new(world.allocate_id()),
            name: req.name,
            admins,
            stores: Vec::new(),
        };
        world.franchises.push(franchise.clone());

        tracing::info!(franchise = %franchise.name, id = %franchise.id, "franchise created");
        franchise
    }

    /// Append a new store to the given franchise's store list.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::NotFound` if the franchise does not exist.
    pub fn create_store(&self, franchise: FranchiseId, name: &str) -> Result<Store> {
        let mut world = self.world();
        let id = StoreId::new(world.allocate_id());

        let Some(record) = world.franchises.iter_mut().find(|f| f.id == franchise) else {
            return Err(BackendError::NotFound(format!("franchise {franchise}")));
        };

        let store = Store {
            id,
            name: name.to_owned(),
            franchise_id: franchise,
            total_revenue: None,
        };
        record.stores.push(store.clone());

        tracing::info!(store = %store.name, id = %store.id, %franchise, "store created");
        Ok(store)
    }

    /// Remove the matching store from the owning franchise's list.
    ///
    /// Absent franchise or store is a no-op; deletion always acknowledges.
    pub fn delete_store(&self, franchise: FranchiseId, store: StoreId) {
        let mut world = self.world();
        if let Some(record) = world.franchises.iter_mut().find(|f| f.id == franchise) {
            let before = record.stores.len();
            record.stores.retain(|s| s.id != store);
            if record.stores.len() < before {
                tracing::info!(%store, %franchise, "store deleted");
            }
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Construct an order from the payload: echo plus generated id, date
    /// stamp, and settlement token. Orders are never stored.
    #[must_use]
    pub fn place_order(&self, draft: OrderDraft) -> Receipt {
        let id = pizza_stand_core::OrderId::new(self.world().allocate_id());
        let order = draft.into_order(id, Utc::now());

        tracing::info!(order = %order.id, items = order.items.len(), "order placed");
        Receipt {
            jwt: token::settlement(order.id),
            order,
        }
    }
}

/// Case-insensitive `*`-wildcard match; an absent pattern matches anything.
fn name_matches(pattern: Option<&str>, name: &str) -> bool {
    pattern.is_none_or(|p| glob_match(&p.to_lowercase(), &name.to_lowercase()))
}

fn glob_match(pattern: &str, text: &str) -> bool {
    let anchored_start = !pattern.starts_with('*');
    let anchored_end = !pattern.ends_with('*');
    let fragments: Vec<&str> = pattern.split('*').filter(|f| !f.is_empty()).collect();

    // All wildcards match anything; the empty pattern only matches empty text.
    let Some((&last, rest)) = fragments.split_last() else {
        return !pattern.is_empty() || text.is_empty();
    };

    let mut remainder = text;
    for (i, fragment) in rest.iter().enumerate() {
        match remainder.find(fragment) {
            Some(pos) => {
                if i == 0 && anchored_start && pos != 0 {
                    return false;
                }
                remainder = remainder.get(pos + fragment.len()..).unwrap_or("");
            }
            None => return false,
        }
    }

    if anchored_end {
        if rest.is_empty() && anchored_start {
            remainder == last
        } else {
            remainder.ends_with(last)
        }
    } else {
        match remainder.find(last) {
            Some(pos) => !(rest.is_empty() && anchored_start && pos != 0),
            None => false,
        }
    }
}
