fn main() {
    sewapay_scaffold::app::cli::run();
}
