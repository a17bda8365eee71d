//! Sessions

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{cart::Cart, discounts::tiered_total, items::Item, users::User};

/// Errors raised when session state is read before it has been initialized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No user has signed in yet.
    #[error("no user has signed in")]
    NotSignedIn,

    /// The shopping cart has not been created yet.
    #[error("shopping cart has not been created")]
    NoCart,
}

/// Scratch selection state for a session.
///
/// The item and price fields are independent; setting one never touches the
/// other, and no relation between them is enforced.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    item: Option<Item>,
    price: Option<Decimal>,
}

impl Selection {
    /// Returns the currently selected item, if any.
    #[must_use]
    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Returns the currently selected price, if any.
    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }
}

/// A single shopper's checkout session.
///
/// The session exclusively owns the signed-in user, the scratch selection
/// and the cart. Nothing is shared between sessions; callers wanting
/// concurrent use keep one session per caller.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    selection: Selection,
    cart: Option<Cart>,
}

impl Session {
    /// Creates a new session with no user, no selection and no cart.
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    /// Stores the given user as current, replacing any previous one.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Returns the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError::NotSignedIn`] if no user has signed in.
    pub fn current_user(&self) -> Result<&User, SessionError> {
        self.user.as_ref().ok_or(SessionError::NotSignedIn)
    }

    /// Stores an item in the scratch selection.
    pub fn select_item(&mut self, item: Item) {
        self.selection.item = Some(item);
    }

    /// Stores a price in the scratch selection.
    pub fn select_price(&mut self, price: Decimal) {
        self.selection.price = Some(price);
    }

    /// Returns the scratch selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Creates a fresh empty cart, discarding any existing cart contents.
    pub fn init_cart(&mut self) {
        self.cart = Some(Cart::new());
    }

    /// Returns the cart without modifying it.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError::NoCart`] if [`Session::init_cart`] has not
    /// been called.
    pub fn cart(&self) -> Result<&Cart, SessionError> {
        self.cart.as_ref().ok_or(SessionError::NoCart)
    }

    /// Appends an item to the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError::NoCart`] if [`Session::init_cart`] has not
    /// been called.
    pub fn add_item(&mut self, item: Item) -> Result<(), SessionError> {
        self.cart
            .as_mut()
            .ok_or(SessionError::NoCart)?
            .add_item(item);

        Ok(())
    }

    /// Checks out the cart under the tiered discount policy.
    ///
    /// A recognized discount code subtracts its percentage from the cart
    /// subtotal; any other code (zero included) leaves the subtotal
    /// unchanged rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError::NoCart`] if [`Session::init_cart`] has not
    /// been called.
    pub fn checkout(&self, discount: Decimal) -> Result<Decimal, SessionError> {
        let cart = self.cart()?;

        Ok(tiered_total(cart.items(), discount))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn current_user_before_sign_in_errors() {
        let session = Session::new();

        assert!(matches!(
            session.current_user(),
            Err(SessionError::NotSignedIn)
        ));
    }

    #[test]
    fn sign_in_replaces_previous_user() -> TestResult {
        let mut session = Session::new();

        session.sign_in(User::new("alice"));
        session.sign_in(User::new("bob"));

        assert_eq!(session.current_user()?.handle(), "bob");

        Ok(())
    }

    #[test]
    fn selection_starts_empty() {
        let session = Session::new();

        assert!(session.selection().item().is_none());
        assert!(session.selection().price().is_none());
    }

    #[test]
    fn select_item_does_not_touch_price() {
        let mut session = Session::new();

        session.select_item(Item::new(Decimal::from(5)));

        assert!(session.selection().item().is_some());
        assert!(session.selection().price().is_none());
    }

    #[test]
    fn select_price_does_not_touch_item() {
        let mut session = Session::new();

        session.select_price(Decimal::from(5));

        assert_eq!(session.selection().price(), Some(Decimal::from(5)));
        assert!(session.selection().item().is_none());
    }

    #[test]
    fn cart_before_init_errors() {
        let session = Session::new();

        assert!(matches!(session.cart(), Err(SessionError::NoCart)));
    }

    #[test]
    fn add_item_before_init_errors() {
        let mut session = Session::new();

        let result = session.add_item(Item::new(Decimal::from(10)));

        assert!(matches!(result, Err(SessionError::NoCart)));
    }

    #[test]
    fn checkout_before_init_errors() {
        let session = Session::new();

        assert!(matches!(
            session.checkout(Decimal::ZERO),
            Err(SessionError::NoCart)
        ));
    }

    #[test]
    fn add_item_appends_in_order() -> TestResult {
        let mut session = Session::new();

        session.init_cart();
        session.add_item(Item::new(Decimal::from(10)))?;
        session.add_item(Item::new(Decimal::from(20)))?;

        let prices: Vec<Decimal> = session.cart()?.iter().map(Item::price).collect();

        assert_eq!(prices, vec![Decimal::from(10), Decimal::from(20)]);

        Ok(())
    }

    #[test]
    fn init_cart_discards_previous_contents() -> TestResult {
        let mut session = Session::new();

        session.init_cart();
        session.add_item(Item::new(Decimal::from(10)))?;
        session.init_cart();

        assert!(session.cart()?.is_empty());

        Ok(())
    }

    #[test]
    fn cart_reads_do_not_reset() -> TestResult {
        let mut session = Session::new();

        session.init_cart();
        session.add_item(Item::new(Decimal::from(10)))?;

        assert_eq!(session.cart()?.len(), 1);
        assert_eq!(session.cart()?.len(), 1);

        Ok(())
    }

    #[test]
    fn checkout_applies_tier_discount() -> TestResult {
        let mut session = Session::new();

        session.init_cart();

        for price in [10, 20, 30] {
            session.add_item(Item::new(Decimal::from(price)))?;
        }

        assert_eq!(session.checkout(Decimal::from(10))?, Decimal::from(54));

        Ok(())
    }

    #[test]
    fn checkout_ignores_unknown_discount_codes() -> TestResult {
        let mut session = Session::new();

        session.init_cart();
        session.add_item(Item::new(Decimal::from(100)))?;

        assert_eq!(session.checkout(Decimal::from(15))?, Decimal::from(100));

        Ok(())
    }

    #[test]
    fn checkout_does_not_require_sign_in() -> TestResult {
        let mut session = Session::new();

        session.init_cart();
        session.add_item(Item::new(Decimal::from(10)))?;

        assert_eq!(session.checkout(Decimal::ZERO)?, Decimal::from(10));

        Ok(())
    }

    #[test]
    fn empty_cart_checks_out_to_zero() -> TestResult {
        let mut session = Session::new();

        session.init_cart();

        assert_eq!(session.checkout(Decimal::from(50))?, Decimal::ZERO);

        Ok(())
    }
}
