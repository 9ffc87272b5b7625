use texgen::{
    cli::{get_args, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    let level =
        if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::new().filter_level(level).init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
