pub mod airport_field;
pub mod booking_page;
pub mod results_page;
pub mod search_form;
pub mod search_page;
