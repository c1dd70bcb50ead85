fn main() -> eframe::Result {
    env_logger::init();
    gridmask::app::run()
}
