use yew_resizable_rect::components::app::App;
use yew_resizable_rect::util::init_logging;

fn main() {
    init_logging(log::Level::Info);
    yew::Renderer::<App>::new().render();
}
