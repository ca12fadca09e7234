use yew_router::prelude::*;

/// The three storefront views plus the not-found fallback.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/checkout")]
    Checkout,
    #[at("/confirmation")]
    Confirmation,
    #[at("/404")]
    #[not_found]
    NotFound,
}
