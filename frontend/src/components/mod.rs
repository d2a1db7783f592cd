pub mod navbar;
pub mod snackbar;
