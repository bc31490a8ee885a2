mod db;
pub use db::DatabaseHandler;

mod import;
pub use import::ImportReport;

mod repo_impl;
