//! Fixtures

use std::{collections::BTreeMap, fs, path::PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::Cart,
    items::Item,
    session::{Session, SessionError},
    users::User,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Cart scenario not found
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// Session state error while assembling a scenario
    #[error("Failed to build session: {0}")]
    Session(#[from] SessionError),
}

#[derive(Debug, Deserialize)]
struct CartsFixture {
    carts: BTreeMap<String, CartFixture>,
}

#[derive(Debug, Deserialize)]
struct CartFixture {
    #[serde(default)]
    user: Option<String>,

    #[serde(default)]
    discount: Option<Decimal>,

    items: Vec<ItemFixture>,
}

#[derive(Debug, Deserialize)]
struct ItemFixture {
    #[serde(default)]
    label: Option<String>,

    price: Decimal,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded cart scenarios keyed by fixture key
    carts: BTreeMap<String, CartFixture>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    #[must_use]
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            carts: BTreeMap::new(),
        }
    }

    /// Load cart scenarios from a YAML fixture file
    ///
    /// Scenarios from later loads are merged over earlier ones by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_carts(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartsFixture = serde_norway::from_str(&contents)?;

        self.carts.extend(fixture.carts);

        Ok(self)
    }

    /// Load a complete fixture set
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_carts(name)?;

        Ok(fixture)
    }

    /// Build the items of a cart scenario by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is not found.
    pub fn items(&self, key: &str) -> Result<Vec<Item>, FixtureError> {
        let fixture = self.cart_fixture(key)?;

        Ok(fixture
            .items
            .iter()
            .map(|item| match &item.label {
                Some(label) => Item::with_label(label, item.price),
                None => Item::new(item.price),
            })
            .collect())
    }

    /// Build a cart from a scenario by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is not found.
    pub fn cart(&self, key: &str) -> Result<Cart, FixtureError> {
        Ok(Cart::with_items(self.items(key)?))
    }

    /// Build a ready-to-checkout session from a scenario by its fixture key
    ///
    /// The fixture user (if any) is signed in, the cart is initialized, and
    /// the scenario items are appended in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is not found.
    pub fn session(&self, key: &str) -> Result<Session, FixtureError> {
        let fixture = self.cart_fixture(key)?;
        let mut session = Session::new();

        if let Some(user) = &fixture.user {
            session.sign_in(User::new(user));
        }

        session.init_cart();

        for item in self.items(key)? {
            session.add_item(item)?;
        }

        Ok(session)
    }

    /// The discount code of a scenario, defaulting to zero when omitted
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is not found.
    pub fn discount(&self, key: &str) -> Result<Decimal, FixtureError> {
        Ok(self.cart_fixture(key)?.discount.unwrap_or(Decimal::ZERO))
    }

    /// The fixture keys of all loaded cart scenarios
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.carts.keys().map(String::as_str)
    }

    fn cart_fixture(&self, key: &str) -> Result<&CartFixture, FixtureError> {
        self.carts
            .get(key)
            .ok_or_else(|| FixtureError::CartNotFound(key.to_string()))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
