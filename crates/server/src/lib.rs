pub mod errors;
pub mod extract;
pub mod launcher;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use launcher::launch;
pub use routes::build_router;
pub use startup::run;
