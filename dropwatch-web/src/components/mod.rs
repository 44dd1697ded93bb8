pub(crate) mod form_field;
pub(crate) mod loading;
pub(crate) mod nav_item;
pub(crate) mod page_header;
pub(crate) mod stat_card;
pub(crate) mod theme_switcher;
pub(crate) mod toaster;
pub(crate) mod user_dropdown;

pub use form_field::FormField;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
