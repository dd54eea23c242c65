#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Setting up error reporting failed")]
    InstallingColorEyre(#[source] color_eyre::Report),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("App init hook failed")]
    InitHook(#[source] crate::apps::HookError),

    #[error("App draw hook failed")]
    DrawHook(#[source] crate::apps::HookError),

    #[error("App game loop hook failed")]
    GameLoopHook(#[source] crate::apps::HookError),

    #[error("App event hook failed")]
    EventHook(#[source] crate::apps::HookError),

    #[error("Failed to write the preview frame")]
    Preview(#[source] std::io::Error),
}
