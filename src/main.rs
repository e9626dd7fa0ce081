use std::process;

fn main() {
    if let Err(err) = kindred::cli::run() {
        kindred::ui::output::error(format!("{:#}", err));
        process::exit(1);
    }
}
