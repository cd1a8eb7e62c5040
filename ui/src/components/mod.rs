pub mod button;
pub mod footer;
pub mod header;
pub mod icons;
pub mod navbar;
pub mod product_card;
pub mod side_menu;
