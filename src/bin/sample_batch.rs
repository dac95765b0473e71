// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use example_api::batch::sample_batch;
use example_api::config::settings::Settings;
use example_api::utils::telemetry;
use std::process::ExitCode;
use tracing::error;

/// 批处理入口
///
/// 成功退出码为 0，数据库错误或其他任何错误为 1
#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            telemetry::init_default_telemetry();
            error!(error = %e, "Failed to load configuration");
            return ExitCode::from(1);
        }
    };
    telemetry::init_telemetry(&settings.logging);

    let result = sample_batch::run_with_settings(&settings).await;
    if let Err(e) = &result {
        error!(error = ?e, "Batch execution failed");
    }

    ExitCode::from(sample_batch::exit_code(&result))
}
