fn main() {
    civlab::app::cli::run();
}
