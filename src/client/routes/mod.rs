pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod not_found;
pub mod patients;

pub use appointments::Appointments;
pub use auth::Auth;
pub use dashboard::Dashboard;
pub use inventory::Inventory;
pub use not_found::NotFound;
pub use patients::Patients;
