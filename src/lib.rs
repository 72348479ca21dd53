mod config;
mod controller;
mod error;
mod http_api;
mod like_api;
mod models;
mod view;

pub use config::{Config, BASE_URL_VAR};
pub use controller::LikeToggleController;
pub use error::Error;
pub use http_api::{HttpLikeApi, LIKES_PATH, LIKE_PATH, UNLIKE_PATH};
pub use like_api::LikeApi;
pub use models::{Action, Control, DisplayState, EntityId, LikeStatus};
pub use view::{ClickEvent, ControlState, LikeView, PageControls, TriggerEvent};
