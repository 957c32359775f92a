//! Fixed target: the Darkins storefront. One site, one listing — these are
//! constants, not configuration.

/// Site origin, used to absolutize root-relative URLs.
pub const ORIGIN: &str = "https://darkins.in";

/// Storefront home page (visited first, matching a real browsing session).
pub const HOME_URL: &str = "https://darkins.in/";

/// The filtered "Experiences" collection listing.
pub const LISTING_URL: &str = "https://darkins.in/collections/experiences-tours/experiences";

/// Sort dropdown on the listing page.
pub const SORT_SELECTOR: &str = "select#SortBy";

/// Visible label of the sort option to pick.
pub const SORT_LABEL: &str = "Price, low to high";

/// Product image elements in the collection grid.
pub const IMAGE_SELECTOR: &str = ".grid-view-item__image";

/// Default directory downloaded images land in.
pub const DEFAULT_OUT_DIR: &str = "images";
