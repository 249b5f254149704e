pub mod click_context;
pub mod click_handler;
pub mod dispatcher;
pub mod entity;
pub mod lang;
pub mod local_url;
pub mod url_normalizer;
pub mod utilities;
