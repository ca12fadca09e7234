pub mod cart_drawer;
pub mod navbar;
pub mod product_card;
