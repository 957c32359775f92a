pub mod cli;
pub mod download;
pub mod extract;
pub mod logging;
pub mod session;
pub mod site;
pub mod url_norm;
