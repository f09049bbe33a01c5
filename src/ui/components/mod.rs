pub mod card;
pub mod rate_table;
pub mod search_form;
pub mod section_header;

pub use card::Card;
pub use rate_table::RateTable;
pub use search_form::SearchForm;
pub use section_header::SectionHeader;
