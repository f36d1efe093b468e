//! 项目管理服务

use doc_crud_apps::{cli, AppKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run(AppKind::Projects).await
}
