//! 命令行入口，三个二进制共用

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::{
    app::build_router,
    config::{AppConfig, AppKind, StoreBackend},
    core::server,
    infrastructure::{logger::Logger, open_store},
};

#[derive(Debug, Parser)]
pub struct Cli {
    /// 配置文件路径，默认查找 config/<app>.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 覆盖监听地址
    #[arg(long)]
    pub bind: Option<String>,

    /// 覆盖监听端口
    #[arg(short, long)]
    pub port: Option<u16>,

    /// 使用内存存储，不连接数据库
    #[arg(long)]
    pub memory: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(bind) = &self.bind {
            config.http.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if self.memory {
            config.store.backend = StoreBackend::Memory;
        }
    }
}

/// 解析命令行、加载配置、连接存储并运行服务
pub async fn run(kind: AppKind) -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(kind, cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    let _guard = Logger::init(&config.logging)?;
    info!("启动 {} 应用", kind.name());

    let store = open_store(&config.store).await?;
    let app = build_router(kind, store);

    server::serve(app, &config.http).await
}
