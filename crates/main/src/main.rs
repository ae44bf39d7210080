//! 主应用程序入口
//!
//! 组装内存仓储与用例服务，同时启动 HTTP 与 RPC 两个前端，
//! 等待终止信号或任一子服务先行失败后协同停机。

use std::{sync::Arc, time::Duration};

use application::{
    AdService, AdServiceDependencies, UserService, UserServiceDependencies,
};
use config::AppConfig;
use infrastructure::{MemoryAdRepository, MemoryUserRepository};
use rpc_api::RpcState;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    // 两个仓储各自持有独立的锁
    let ad_repository = Arc::new(MemoryAdRepository::new());
    let user_repository = Arc::new(MemoryUserRepository::new());

    let ad_service = Arc::new(AdService::new(AdServiceDependencies {
        ad_repository,
        user_repository: user_repository.clone(),
    }));
    let user_service = Arc::new(UserService::new(UserServiceDependencies { user_repository }));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // 启动 HTTP 服务
    let app = router(AppState::new(ad_service.clone(), user_service.clone()));
    let http_listener = tokio::net::TcpListener::bind(config.http_addr()).await?;
    tracing::info!("HTTP 服务启动在 http://{}", config.http_addr());
    let mut http_shutdown = shutdown_rx.clone();
    let mut http_task = tokio::spawn(async move {
        axum::serve(http_listener, app)
            .with_graceful_shutdown(async move {
                let _ = http_shutdown.changed().await;
            })
            .await
    });

    // 启动 RPC 服务
    let rpc_listener = tokio::net::TcpListener::bind(config.rpc_addr()).await?;
    tracing::info!("RPC 服务启动在 {}", config.rpc_addr());
    let mut rpc_task = tokio::spawn(rpc_api::serve(
        rpc_listener,
        RpcState::new(ad_service, user_service),
        shutdown_rx,
    ));

    // 等待终止信号或任一子服务先行退出
    let mut http_done = false;
    let mut rpc_done = false;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("捕获到终止信号，开始停机");
        }
        result = &mut http_task => {
            report("http", result);
            http_done = true;
        }
        result = &mut rpc_task => {
            report("rpc", result);
            rpc_done = true;
        }
    }

    // 广播停机信号，在宽限期内等待监听器退出
    let _ = shutdown_tx.send(true);
    let grace = Duration::from_secs(config.shutdown_grace_secs);
    let drain = async {
        if !http_done {
            report("http", http_task.await);
        }
        if !rpc_done {
            report("rpc", rpc_task.await);
        }
    };
    if tokio::time::timeout(grace, drain).await.is_err() {
        tracing::warn!("停机宽限期已过，放弃等待剩余任务");
    }

    Ok(())
}

fn report(
    name: &str,
    result: Result<Result<(), std::io::Error>, tokio::task::JoinError>,
) {
    match result {
        Ok(Ok(())) => tracing::info!("{name} server exited"),
        Ok(Err(err)) => tracing::error!("{name} server failed: {err}"),
        Err(err) => tracing::error!("{name} server task panicked: {err}"),
    }
}
