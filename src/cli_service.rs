use std::sync::Arc;
use std::time::Duration;
use reqwest::Client;
use tracing::{info, debug, error, Instrument};
use uuid::Uuid;
use crate::{
    application::upload_service::{UploadOptions, UploadService},
    config::AppConfig,
    domain::{
        error::UploadError,
        models::{InvocationArgs, UploadResult},
    },
    infrastructure::{
        files_api::HttpFilesApi,
        fs_adapter::LocalFileReader,
        oauth_wrap::WrapTokenClient,
        parser_adapter::ParserAdapter,
    },
};

pub struct CliService {
    service: UploadService,
    exit_codes: bool,
}

impl CliService {
    pub fn new(config: AppConfig) -> Result<Self, UploadError> {
        debug!("Initializing uploader");

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            info!("Using HTTP timeout of {}s", secs);
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()
            .map_err(|e| UploadError::Config(format!("failed to build HTTP client: {}", e)))?;

        let files_api = HttpFilesApi::new(client.clone(), &config.files_api.root_url)?;
        info!("Using token service: {}", config.oauth_wrap_request.url);

        let token_provider = WrapTokenClient::new(client, config.oauth_wrap_request);
        let options = UploadOptions {
            file_format: config.file_format,
            log_authorization: config.log_authorization,
        };

        let service = UploadService::new(
            Arc::new(LocalFileReader::new()),
            Arc::new(ParserAdapter::new()),
            Arc::new(token_provider),
            Arc::new(files_api),
            options,
        );

        debug!("Uploader initialization complete");
        Ok(Self { service, exit_codes: config.exit_codes })
    }

    /// Builds the service, logging a construction failure once. The error
    /// side is the status the process should exit with.
    pub fn init(config: AppConfig) -> Result<Self, i32> {
        let exit_codes = config.exit_codes;
        Self::new(config).map_err(|e| {
            error!("{}", e);
            exit_status(exit_codes, &Err(e))
        })
    }

    pub async fn run(&self, args: &InvocationArgs) -> Result<UploadResult, UploadError> {
        let span = tracing::info_span!("upload", invocation_id = %Uuid::new_v4());
        self.service.run(args).instrument(span).await
    }

    /// Status the process should exit with. Always 0 unless `exit_codes`
    /// is configured.
    pub fn exit_status(&self, outcome: &Result<UploadResult, UploadError>) -> i32 {
        exit_status(self.exit_codes, outcome)
    }
}

pub fn exit_status(exit_codes: bool, outcome: &Result<UploadResult, UploadError>) -> i32 {
    match outcome {
        Err(e) if exit_codes => e.exit_code(),
        _ => 0,
    }
}
