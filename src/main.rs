use anyhow::Context;
use clap::Parser;
use amount_converter::utils::{logger, validation::Validate};
use amount_converter::{read_amounts, AmountConverter, BatchRunner, CliConfig};
use std::fs::File;
use std::io::BufReader;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 合併 TOML 與命令列參數並驗證配置
    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 讀取金額：輸入檔優先，否則用命令列參數
    let amounts = match &settings.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open input file {}", path))?;
            read_amounts(BufReader::new(file)).with_context(|| format!("cannot read {}", path))?
        }
        None => settings.amounts.clone(),
    };

    // 建立轉換器並執行批次轉換
    let converter = AmountConverter::standard();
    let runner = BatchRunner::new(&converter, settings.conversion_options(), settings.format);

    let stdout = std::io::stdout();
    let report = runner
        .run(&amounts, stdout.lock())
        .context("failed to write conversion results")?;

    // 根據第一個失敗的嚴重程度決定退出碼
    if let Some(e) = report.first_failure {
        tracing::error!(
            "Conversion failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
