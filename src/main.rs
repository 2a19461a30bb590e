use anyhow::Result;
use news_digest::utils::logging;
use news_digest::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let _digest = App::initialize(config).await?.run().await?;

    Ok(())
}
