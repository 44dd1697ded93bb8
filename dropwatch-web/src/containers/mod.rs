pub(crate) mod auth_card;
pub(crate) mod header;
pub(crate) mod layout;
pub(crate) mod sidebar;
