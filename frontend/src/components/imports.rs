pub use static_routes::*;

pub use gloo_console as console;
pub use gloo_net::http::{Request, Response};
pub use secrecy::SecretString;
pub use stylist::yew::styled_component;
pub use web_sys::HtmlInputElement;
pub use yew::prelude::*;

pub trait RequestExtend {
    fn static_get(static_path: impl Get) -> Self;
    fn static_post(static_path: impl Post) -> Self;
}

impl RequestExtend for Request {
    fn static_get(static_path: impl Get) -> Self {
        Request::get(static_path.get().complete())
    }

    fn static_post(static_path: impl Post) -> Self {
        Request::post(static_path.post().complete())
    }
}

pub mod request {
    pub type SendResult = std::result::Result<gloo_net::http::Response, gloo_net::Error>;
}
