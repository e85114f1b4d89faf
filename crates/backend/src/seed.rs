//! Seed data and the fixture builder.
//!
//! Seeding happens once, at build time; the resulting [`FixtureState`] then
//! evolves only through the mocked API. Seeds may pin explicit identifiers
//! because UI tests assert on them.

use pizza_stand_core::{Email, FranchiseId, MenuItemId, RoleAssignment, StoreId, UserId};

use crate::config::FixtureOptions;
use crate::models::{Franchise, FranchiseAdmin, MenuItem, Store, User};
use crate::state::FixtureState;

/// Builder for a fixture instance's initial world.
#[derive(Debug, Default)]
pub struct FixtureBuilder {
    users: Vec<User>,
    franchises: Vec<Franchise>,
    menu: Vec<MenuItem>,
    options: FixtureOptions,
}

impl FixtureBuilder {
    /// An empty world with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user into the directory.
    #[must_use]
    pub fn user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Seed a franchise (with any nested stores and admins).
    #[must_use]
    pub fn franchise(mut self, franchise: Franchise) -> Self {
        self.franchises.push(franchise);
        self
    }

    /// Seed a menu item.
    #[must_use]
    pub fn menu_item(mut self, item: MenuItem) -> Self {
        self.menu.push(item);
        self
    }

    /// Whether registration also opens the session (defaults to true).
    #[must_use]
    pub const fn login_on_register(mut self, enabled: bool) -> Self {
        self.options.login_on_register = enabled;
        self
    }

    /// Assemble the fixture state.
    #[must_use]
    pub fn build(self) -> FixtureState {
        FixtureState::new(self.options, self.users, self.franchises, self.menu)
    }
}

/// The canonical dataset the storefront UI tests were written against.
///
/// Users (id / password):
/// - `a@jwt.com` - Admin User (1 / `admin`), global admin
/// - `f@jwt.com` - franchisee user (2 / `franchisee`), administers LotaPizza
/// - `d@jwt.com` - Kai Chen (3 / `a`), diner
///
/// Franchises: LotaPizza (Lehi, Springville, American Fork), PizzaCorp
/// (Spanish Fork), topSpot (no stores). Menu: Veggie and Pepperoni.
///
/// Returned as a builder so callers can toggle options or seed more data
/// before building.
#[must_use]
pub fn classic() -> FixtureBuilder {
    let franchisee = user(
        2,
        "franchisee user",
        "f@jwt.com",
        "franchisee",
        vec![RoleAssignment::franchisee(FranchiseId::new(2))],
    );
    let lota_admins = vec![admin_of(&franchisee)];

    FixtureBuilder::new()
        .user(user(
            1,
            "Admin User",
            "a@jwt.com",
            "admin",
            vec![RoleAssignment::admin()],
        ))
        .user(franchisee)
        .user(user(
            3,
            "Kai Chen",
            "d@jwt.com",
            "a",
            vec![RoleAssignment::diner()],
        ))
        .franchise(franchise(
            2,
            "LotaPizza",
            lota_admins,
            vec![
                store(4, 2, "Lehi"),
                store(5, 2, "Springville"),
                store(6, 2, "American Fork"),
            ],
        ))
        .franchise(franchise(
            3,
            "PizzaCorp",
            vec![],
            vec![store(7, 3, "Spanish Fork")],
        ))
        .franchise(franchise(4, "topSpot", vec![], vec![]))
        .menu_item(MenuItem::new(
            MenuItemId::new(1),
            "Veggie",
            "pizza1.png",
            0.0038,
            "A garden of delight",
        ))
        .menu_item(MenuItem::new(
            MenuItemId::new(2),
            "Pepperoni",
            "pizza2.png",
            0.0042,
            "Spicy treat",
        ))
}

/// Shorthand for a seeded user record.
#[must_use]
pub fn user(
    id: i64,
    name: &str,
    email_addr: &str,
    password: &str,
    roles: Vec<RoleAssignment>,
) -> User {
    User {
        id: UserId::new(id),
        name: name.to_owned(),
        email: email(email_addr),
        password: Some(password.to_owned()),
        roles,
    }
}

/// Shorthand for a seeded franchise record.
#[must_use]
pub fn franchise(
    id: i64,
    name: &str,
    admins: Vec<FranchiseAdmin>,
    stores: Vec<Store>,
) -> Franchise {
    Franchise {
        id: FranchiseId::new(id),
        name: name.to_owned(),
        admins,
        stores,
    }
}

/// Shorthand for a seeded store record.
#[must_use]
pub fn store(id: i64, franchise: i64, name: &str) -> Store {
    Store {
        id: StoreId::new(id),
        name: name.to_owned(),
        franchise_id: FranchiseId::new(franchise),
        total_revenue: None,
    }
}

/// Project a seeded user into a franchise admin entry.
#[must_use]
pub fn admin_of(user: &User) -> FranchiseAdmin {
    FranchiseAdmin {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

fn email(raw: &str) -> Email {
    Email::parse(raw).unwrap_or_else(|_| unreachable!("seed emails are valid"))
}
