use files_uploader::{
    cli_service::CliService,
    config::AppConfig,
    domain::models::InvocationArgs,
};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::from_default_env()
        .add_directive("files_uploader=debug".parse().expect("static directive"))
        .add_directive("hyper=info".parse().expect("static directive"))
        .add_directive("reqwest=info".parse().expect("static directive"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    let args = InvocationArgs::from_args(std::env::args().skip(1));
    info!("Starting upload of {}", args.file_path.display());

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let service = match CliService::init(config) {
        Ok(service) => service,
        Err(code) => std::process::exit(code),
    };

    let outcome = service.run(&args).await;
    let code = service.exit_status(&outcome);
    if code != 0 {
        std::process::exit(code);
    }
}
