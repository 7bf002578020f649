fn main() {
    console_error_panic_hook::set_once();
    forum_frontend::logging::init();
    forum_frontend::start();
}
