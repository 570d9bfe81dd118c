fn main() {
    slider_view::app::cli::run();
}
