fn main() {
    if let Err(e) = ohaeng_cli::run() {
        ohaeng_cli::print_error(&e.to_string());
        std::process::exit(1);
    }
}
