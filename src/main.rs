// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use example_api::config::settings::Settings;
use example_api::domain::services::email_service::EmailSender;
use example_api::infrastructure::database::connection;
use example_api::infrastructure::email::smtp_client::SmtpEmailSender;
use example_api::infrastructure::repositories::example_repo_impl::ExampleRepositoryImpl;
use example_api::infrastructure::storage::create_storage_repository;
use example_api::presentation::handlers::health_handler::DatabaseProbe;
use example_api::presentation::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use example_api::utils::telemetry;
use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = match Settings::new() {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            telemetry::init_default_telemetry();
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!(
        project = %settings.app.project_name,
        environment = %settings.app.environment,
        "Starting example-api..."
    );

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize auxiliary services
    // No route uses these yet; a bad storage config still fails startup here.
    let _storage = create_storage_repository(&settings.storage).await?;
    info!(storage_type = %settings.storage.storage_type, "Storage initialized");

    let _email_sender: Arc<dyn EmailSender> = Arc::new(SmtpEmailSender::new(&settings.smtp));
    info!(host = %settings.smtp.host, port = settings.smtp.port, "Email sender initialized");

    // 5. Initialize repositories
    let example_repo = Arc::new(ExampleRepositoryImpl::new(db.clone()));

    // 6. Start HTTP server
    let app = routes::app(&settings, example_repo, DatabaseProbe(Some(db.clone())));

    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.as_ref().clone().close().await?;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
