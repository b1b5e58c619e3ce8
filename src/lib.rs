
//---------------------------------------
pub mod web_api {
    pub mod routes;
    pub mod controllers;
}

pub use web_api::routes::map_routes;
pub use web_api::controllers::*;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
    pub mod error;
}

pub use shared::models::*;
pub use shared::dto::*;
pub use shared::error::ApiError;
//---------------------------------------

//---------------------------------------
pub mod authentication {
    pub mod auth;
    pub mod ownership;
}
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
}
//---------------------------------------

//---------------------------------------
pub mod analytics {
    pub mod engine;
}
//---------------------------------------

//---------------------------------------
pub mod reporting {
    pub mod pdf;
    pub mod renderer;
}
//---------------------------------------

//---------------------------------------
pub mod notifications {
    pub mod mailer;
}
//---------------------------------------

//---------------------------------------
pub mod cleanup {
    pub mod scheduler;
}
//---------------------------------------
