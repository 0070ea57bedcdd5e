use crate::dto::main::{IndexPageData, UsersPage};
pub use crate::dto::main::IndexQuery;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGES_IN_WINDOW, Navigation, Paginated};
use crate::source::{UserSource, UsersFetch};

/// Fetches the users and cuts out the requested page for the index page.
pub async fn load_index_page<S>(source: &S, query: IndexQuery) -> IndexPageData
where
    S: UserSource,
{
    let fetch = UsersFetch::from_result(source.fetch_users().await);
    if !fetch.is_success() {
        return IndexPageData::Failed {
            status_code: fetch.status_code,
        };
    }

    let users = Paginated::new(fetch.users, query.page.unwrap_or(1), DEFAULT_ITEMS_PER_PAGE);
    let navigation = Navigation::new(users.cursor(), DEFAULT_PAGES_IN_WINDOW);

    IndexPageData::Loaded(UsersPage { users, navigation })
}
