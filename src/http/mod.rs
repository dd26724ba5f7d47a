//! HTTP layer: response builders and MIME detection

pub mod mime;
pub mod response;

pub use response::{
    apply_cors, apply_server_name, build_404_response, build_405_response, build_json_response,
    build_options_response, build_static_file_response,
};
