mod app;
mod components;
mod router;
mod switch;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
