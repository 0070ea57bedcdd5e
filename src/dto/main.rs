use crate::domain::user::UserRecord;
use crate::pagination::{Navigation, Paginated};

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// One page of users plus the navigation bar around it.
#[derive(Debug)]
pub struct UsersPage {
    pub users: Paginated<UserRecord>,
    pub navigation: Navigation,
}

/// Data required to render the main index template.
#[derive(Debug)]
pub enum IndexPageData {
    Loaded(UsersPage),
    /// The upstream fetch did not succeed; only the status is shown.
    Failed { status_code: u16 },
}
