fn main() {
    if let Err(err) = thesis_timeline_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
