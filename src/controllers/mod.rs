pub mod asset_issue_controller;
pub mod auth_controller;
pub mod dashboard_controller;
pub mod garbage_controller;
pub mod registration_controller;
pub mod report_controller;
pub mod transfer_controller;
