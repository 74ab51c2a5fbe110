pub mod asset_routes;
pub mod auth_routes;
pub mod dashboard_routes;
pub mod document_routes;
pub mod garbage_routes;
pub mod registration_routes;
pub mod report_routes;
pub mod transfer_routes;
