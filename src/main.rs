fn main() {
    if let Err(e) = hydrostat::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
