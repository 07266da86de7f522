fn main() {
    brainstormer::app::cli::run();
}
