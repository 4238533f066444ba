pub mod db_init;

pub mod import_service;
pub mod reports_service;
